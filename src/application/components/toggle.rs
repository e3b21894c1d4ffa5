use std::cell::RefCell;
use std::rc::Rc;

use crate::application::components::{Lifecycle, StockTicker};
use crate::domain::logging::LogComponent;
use crate::log_info;

pub type TickerFactory = Box<dyn Fn() -> StockTicker>;

/// Checkbox container: the ticker exists only while `visible` is set.
pub struct TickerToggle {
    visible: bool,
    mounted: bool,
    factory: TickerFactory,
    ticker: Option<Rc<RefCell<StockTicker>>>,
}

impl TickerToggle {
    pub fn new(visible: bool, factory: TickerFactory) -> Self {
        Self {
            visible,
            mounted: false,
            factory,
            ticker: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The mounted ticker, if any.
    pub fn ticker(&self) -> Option<Rc<RefCell<StockTicker>>> {
        self.ticker.clone()
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        if self.mounted {
            if visible {
                self.mount_child();
            } else {
                self.unmount_child();
            }
        }
        true
    }

    fn mount_child(&mut self) {
        log_info!(LogComponent::Application("TickerToggle"), "mounting ticker");
        let ticker = Rc::new(RefCell::new((self.factory)()));
        ticker.borrow_mut().mount();
        self.ticker = Some(ticker);
    }

    fn unmount_child(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            log_info!(LogComponent::Application("TickerToggle"), "unmounting ticker");
            ticker.borrow_mut().unmount();
        }
    }
}

impl Lifecycle for TickerToggle {
    fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.visible {
            self.mount_child();
        }
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.unmount_child();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
