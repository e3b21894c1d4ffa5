use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::errors::{AppError, ParseResult};
use crate::domain::market_data::{ClosePrice, TimeInterval};

/// Keys the vendor uses instead of a series when it refuses a request.
const VENDOR_NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// One record of the series. Only the close is consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bar {
    #[serde(rename = "4. close")]
    pub close: ClosePrice,
}

/// Entry of the series, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub timestamp: String,
    pub bar: Bar,
}

/// Intraday time series as sent by the vendor (newest first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    entries: Vec<SeriesEntry>,
}

impl TimeSeries {
    pub fn new(entries: Vec<SeriesEntry>) -> Self {
        Self { entries }
    }

    /// Parse a quotes response body, keeping the order of the series object.
    pub fn parse(body: &str, interval: TimeInterval) -> ParseResult<Self> {
        let root: Map<String, Value> = serde_json::from_str(body)
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {e}")))?;

        let key = interval.series_key();
        let Some(series) = root.get(&key) else {
            let notice = VENDOR_NOTICE_KEYS
                .iter()
                .find_map(|k| root.get(*k).and_then(Value::as_str));
            return Err(match notice {
                Some(text) => AppError::NetworkError(format!("Vendor refused request: {text}")),
                None => AppError::ParseError(format!("Missing '{key}' in response")),
            });
        };

        let object = series
            .as_object()
            .ok_or_else(|| AppError::ParseError(format!("'{key}' is not an object")))?;

        let mut entries = Vec::with_capacity(object.len());
        for (timestamp, record) in object {
            let bar = Bar::deserialize(record).map_err(|e| {
                AppError::ParseError(format!("Invalid record at {timestamp}: {e}"))
            })?;
            entries.push(SeriesEntry {
                timestamp: timestamp.clone(),
                bar,
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    /// Close of the `index`-th entry from the start of the series.
    pub fn close_at(&self, index: usize) -> ParseResult<ClosePrice> {
        self.entries
            .get(index)
            .map(|entry| entry.bar.close.clone())
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "index {index} out of range for {} entries",
                    self.entries.len()
                ))
            })
    }
}
