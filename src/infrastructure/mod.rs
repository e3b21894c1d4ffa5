//! Infrastructure: HTTP clients, browser services and configuration.

pub mod config;
pub mod http;
pub mod services;

pub use config::AppConfig;
pub use services::{BrowserTimeProvider, ConsoleLogger};
