use std::cell::RefCell;
use std::rc::Rc;

use crate::application::components::{Lifecycle, Notify};
use crate::application::effects::{Deps, Dispose, EffectSlot};
use crate::application::task::{Spawner, guarded};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{ClosePrice, QuoteRepository};
use crate::{log_debug, log_error, log_info};

/// Shows the close of the `index`-th entry of the latest intraday series.
///
/// Each fetch captures a liveness flag and an abort handle. Cleanup (index
/// change or unmount) revokes both, so a late response is neither applied nor
/// reported.
pub struct StockTicker {
    repository: Rc<dyn QuoteRepository>,
    spawner: Rc<dyn Spawner>,
    notify: Notify,
    index: usize,
    price: Rc<RefCell<Option<ClosePrice>>>,
    mounted: bool,
    fetch: EffectSlot<usize>,
}

impl StockTicker {
    pub fn new(
        repository: Rc<dyn QuoteRepository>,
        spawner: Rc<dyn Spawner>,
        index: usize,
        notify: Notify,
    ) -> Self {
        Self {
            repository,
            spawner,
            notify,
            index,
            price: Rc::new(RefCell::new(None)),
            mounted: false,
            fetch: EffectSlot::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn price(&self) -> Option<ClosePrice> {
        self.price.borrow().clone()
    }

    pub fn set_index(&mut self, index: usize) -> bool {
        if self.index == index {
            return false;
        }
        self.index = index;
        if self.mounted {
            self.commit();
        }
        true
    }

    fn commit(&mut self) {
        let index = self.index;
        let repository = self.repository.clone();
        let spawner = self.spawner.clone();
        let slot = self.price.clone();
        let notify = self.notify.clone();

        self.fetch.commit(Deps::On(index), move || {
            log_info!(LogComponent::Application("StockTicker"), "fetching entry {index}");
            let (guard, task) = guarded(repository.fetch_series(), move |result| {
                match result.and_then(|series| series.close_at(index)) {
                    Ok(price) => {
                        *slot.borrow_mut() = Some(price);
                        notify();
                    }
                    Err(e) => {
                        log_error!(
                            LogComponent::Application("StockTicker"),
                            "failed to load entry {index}: {e}"
                        );
                    }
                }
            });
            spawner.spawn(task);
            Dispose::new(move || {
                if guard.is_live() {
                    log_debug!(
                        LogComponent::Application("StockTicker"),
                        "cancelling fetch of entry {index}"
                    );
                }
                guard.cancel();
            })
        });
    }
}

impl Lifecycle for StockTicker {
    fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.commit();
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.fetch.dispose();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
