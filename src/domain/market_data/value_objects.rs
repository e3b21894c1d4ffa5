use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::{AppError, ParseResult};

/// Value Object - Торговый символ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
#[serde(from = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::from("IBM")
    }
}

/// Value Object - intraday interval supported by the quotes endpoint
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeInterval {
    #[strum(serialize = "1min")]
    #[serde(rename = "1min")]
    OneMinute,

    #[default]
    #[strum(serialize = "5min")]
    #[serde(rename = "5min")]
    FiveMinutes,

    #[strum(serialize = "15min")]
    #[serde(rename = "15min")]
    FifteenMinutes,

    #[strum(serialize = "30min")]
    #[serde(rename = "30min")]
    ThirtyMinutes,

    #[strum(serialize = "60min")]
    #[serde(rename = "60min")]
    OneHour,
}

impl TimeInterval {
    pub fn as_query_str(&self) -> &str {
        self.as_ref()
    }

    /// Key under which the vendor nests the series, e.g. `Time Series (5min)`.
    pub fn series_key(&self) -> String {
        format!("Time Series ({})", self.as_query_str())
    }
}

/// Value Object - the `"4. close"` field, kept verbatim for display
#[derive(Debug, Clone, PartialEq, Eq, Deref, Display, Serialize, Deserialize)]
pub struct ClosePrice(String);

impl ClosePrice {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Parse the raw text of the entry index input.
pub fn parse_entry_index(raw: &str) -> ParseResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ValidationError(format!("'{raw}' is not an entry index")))
}
