use futures::future::LocalBoxFuture;

use crate::domain::errors::AppError;
use crate::domain::market_data::TimeSeries;

/// Интерфейс для получения рыночных данных
pub trait QuoteRepository {
    /// Fetch the latest intraday series. The future must not borrow `self`
    /// so it can outlive the component that started it.
    fn fetch_series(&self) -> LocalBoxFuture<'static, Result<TimeSeries, AppError>>;
}
