//! HTTP plumbing over `gloo-net`. Clients build URLs natively (and are unit
//! tested that way); only `get_text` talks to the browser.

pub mod quotes_client;
pub mod users_client;

pub use quotes_client::AlphaVantageClient;
pub use users_client::ReqresClient;

use gloo_net::http::Request;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error};

/// GET `url` and return the body of a 2xx response.
pub async fn get_text(url: &str) -> NetworkResult<String> {
    log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {url}");

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Request failed: {e:?}")))?;

    if !HttpUtils::is_success_status(response.status()) {
        let error_msg = format!("HTTP error: {} - {}", response.status(), response.status_text());
        log_error!(LogComponent::Infrastructure("HTTP"), "{error_msg}");
        return Err(AppError::NetworkError(error_msg));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to read response: {e:?}")))?;

    log_debug!(
        LogComponent::Infrastructure("HTTP"),
        "✅ GET response: {} bytes",
        text.len()
    );

    Ok(text)
}

/// Утилиты для HTTP запросов
pub struct HttpUtils;

impl HttpUtils {
    /// Проверка статуса ответа
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Percent-encode a query value. Everything but ASCII alphanumerics is
    /// escaped, so `+` survives as a literal plus.
    pub fn url_encode(input: &str) -> String {
        utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
    }

    /// Join a base URL and a path without doubling the slash.
    pub fn join(base_url: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
