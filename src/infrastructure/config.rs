use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, ParseResult};
use crate::domain::logging::LogLevel;
use crate::domain::market_data::{Symbol, TimeInterval};
use crate::domain::users::UserId;
use crate::infrastructure::http::{AlphaVantageClient, ReqresClient};

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

pub const DEFAULT_USERS_BASE_URL: &str = "https://reqres.in";
pub const DEFAULT_QUOTES_URL_TEMPLATE: &str = "https://www.alphavantage.co/query?function=TIME_SERIES_INTRADAY&symbol={symbol}&interval={interval}&apikey={apikey}";

/// Runtime settings. Every field has a default, so an empty object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub users_base_url: String,
    pub default_user_id: UserId,
    pub quotes_url_template: String,
    pub api_key: String,
    pub symbol: Symbol,
    pub interval: TimeInterval,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_base_url: DEFAULT_USERS_BASE_URL.to_string(),
            default_user_id: UserId::default(),
            quotes_url_template: DEFAULT_QUOTES_URL_TEMPLATE.to_string(),
            api_key: "demo".to_string(),
            symbol: Symbol::default(),
            interval: TimeInterval::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ParseResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ParseError(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ParseResult<()> {
        if self.users_base_url.trim().is_empty() {
            return Err(AppError::ValidationError("users_base_url is empty".to_string()));
        }
        if self.quotes_url_template.trim().is_empty() {
            return Err(AppError::ValidationError("quotes_url_template is empty".to_string()));
        }
        if !self.quotes_url_template.contains("{apikey}") {
            return Err(AppError::ValidationError(
                "quotes_url_template has no {apikey} placeholder".to_string(),
            ));
        }
        if self.symbol.value().is_empty() {
            return Err(AppError::ValidationError("symbol is empty".to_string()));
        }
        Ok(())
    }

    /// Read overrides embedded in the host page. `Ok(None)` when the page has
    /// no configuration element. Only callable in a browser.
    pub fn from_document(element_id: &str) -> ParseResult<Option<Self>> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(element_id))
            .and_then(|element| element.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).map(Some),
            _ => Ok(None),
        }
    }

    pub fn users_client(&self) -> ReqresClient {
        ReqresClient::new(self.users_base_url.clone())
    }

    pub fn quotes_client(&self) -> AlphaVantageClient {
        AlphaVantageClient::new(
            self.quotes_url_template.clone(),
            self.api_key.clone(),
            self.symbol.clone(),
            self.interval,
        )
    }
}
