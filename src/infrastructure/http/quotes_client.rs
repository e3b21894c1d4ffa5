use futures::future::{FutureExt, LocalBoxFuture};

use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{QuoteRepository, Symbol, TimeInterval, TimeSeries};
use crate::infrastructure::http::{HttpUtils, get_text};
use crate::{log_info, log_warn};

/// Simple REST client for the intraday quotes endpoint
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    url_template: String,
    api_key: String,
    symbol: Symbol,
    interval: TimeInterval,
}

impl AlphaVantageClient {
    pub fn new(
        url_template: impl Into<String>,
        api_key: impl Into<String>,
        symbol: Symbol,
        interval: TimeInterval,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            api_key: api_key.into(),
            symbol,
            interval,
        }
    }

    /// Fill the `{symbol}`, `{interval}` and `{apikey}` placeholders.
    pub fn series_url(&self) -> String {
        self.url_template
            .replace("{symbol}", &HttpUtils::url_encode(self.symbol.value()))
            .replace("{interval}", self.interval.as_query_str())
            .replace("{apikey}", &HttpUtils::url_encode(&self.api_key))
    }
}

impl QuoteRepository for AlphaVantageClient {
    fn fetch_series(&self) -> LocalBoxFuture<'static, Result<TimeSeries, AppError>> {
        let url = self.series_url();
        let interval = self.interval;
        let symbol = self.symbol.value().to_string();
        async move {
            log_info!(LogComponent::Infrastructure("QuotesAPI"), "📈 Fetching {symbol} series");
            let body = get_text(&url).await?;
            let series = TimeSeries::parse(&body, interval)?;
            if series.is_empty() {
                log_warn!(LogComponent::Infrastructure("QuotesAPI"), "empty series for {symbol}");
            }
            Ok(series)
        }
        .boxed_local()
    }
}
