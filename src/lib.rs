use leptos::view;
use wasm_bindgen::prelude::*;

use crate::app::{App, LeptosLogger};
use crate::domain::logging::{LogComponent, LogLevel};
use crate::infrastructure::{
    AppConfig, BrowserTimeProvider,
    config::CONFIG_ELEMENT_ID,
};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// Install logging, read the page configuration and mount the demo.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    let loaded = AppConfig::from_document(CONFIG_ELEMENT_ID);
    let log_level = match &loaded {
        Ok(Some(config)) => config.log_level,
        _ => LogLevel::default(),
    };
    domain::logging::init_logger(Box::new(LeptosLogger::new(log_level)));

    let config = match loaded {
        Ok(Some(config)) => {
            log_info!(
                LogComponent::Presentation("Initialize"),
                "⚙️ Loaded configuration from #{CONFIG_ELEMENT_ID}"
            );
            config
        }
        Ok(None) => {
            log_info!(
                LogComponent::Presentation("Initialize"),
                "⚙️ No page configuration, using defaults"
            );
            AppConfig::default()
        }
        Err(e) => {
            log_warn!(
                LogComponent::Presentation("Initialize"),
                "⚠️ Ignoring page configuration: {e}"
            );
            AppConfig::default()
        }
    };

    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Lifecycle demo initialized (users: {}, symbol: {})",
        config.users_base_url,
        config.symbol.value()
    );

    leptos::mount_to_body(move || view! { <App config=config/> });
}
