//! Market data aggregate: intraday series, close prices and the repository
//! the ticker reads from.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
