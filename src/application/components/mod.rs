//! Component controllers.
//!
//! Each controller owns its state and effect slots and follows the same
//! lifecycle: `mount` performs the first commit, setters commit again when
//! state actually changes, `unmount` disposes every slot. Setters never call
//! [`Notify`]; only async completions do, after their borrows are released.

use std::rc::Rc;

pub mod counter;
pub mod email;
pub mod ticker;
pub mod toggle;

pub use counter::RenderLogger;
pub use email::EmailFetcher;
pub use ticker::StockTicker;
pub use toggle::TickerToggle;

/// Tells the view that controller state changed asynchronously.
pub type Notify = Rc<dyn Fn()>;

/// A notifier that does nothing, for headless use.
pub fn silent() -> Notify {
    Rc::new(|| {})
}

/// Mount/unmount contract shared by every controller.
pub trait Lifecycle {
    fn mount(&mut self);
    fn unmount(&mut self);
    fn is_mounted(&self) -> bool;
}
