//! Domain layer: value objects, payload parsing, errors and the logging
//! abstraction. Nothing in here touches the browser.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod render_log;
pub mod users;

pub use errors::{AppError, NetworkResult};
