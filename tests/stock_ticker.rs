mod common;

use std::rc::Rc;

use common::{PendingQuotes, counting_notify, series};
use futures::executor::LocalPool;
use lifecycle_demo_wasm::application::components::{Lifecycle, StockTicker};
use lifecycle_demo_wasm::domain::AppError;
use lifecycle_demo_wasm::domain::logging::{LogLevel, MemoryLogger, init_logger};

fn error_count() -> usize {
    MemoryLogger::drain()
        .iter()
        .filter(|entry| entry.level == LogLevel::Error)
        .count()
}

#[test]
fn shows_close_of_requested_entry() {
    for (index, expected) in [(0, "104.00"), (1, "103.50"), (2, "103.70")] {
        let mut pool = LocalPool::new();
        let quotes = PendingQuotes::new();
        let (notify, renders) = counting_notify();
        let mut ticker = StockTicker::new(quotes.clone(), Rc::new(pool.spawner()), index, notify);

        ticker.mount();
        pool.run_until_stalled();
        assert_eq!(ticker.price(), None);

        assert!(quotes.resolve(0, Ok(series())));
        pool.run_until_stalled();
        assert_eq!(ticker.price().map(|p| p.value().to_string()).as_deref(), Some(expected));
        assert_eq!(renders.get(), 1);
    }
}

#[test]
fn unmount_while_pending_suppresses_result_and_error() {
    init_logger(Box::new(MemoryLogger));
    MemoryLogger::drain();

    let mut pool = LocalPool::new();
    let quotes = PendingQuotes::new();
    let (notify, renders) = counting_notify();
    let mut ticker = StockTicker::new(quotes.clone(), Rc::new(pool.spawner()), 0, notify);

    ticker.mount();
    pool.run_until_stalled();
    ticker.unmount();
    pool.run_until_stalled();

    quotes.resolve(0, Err(AppError::NetworkError("HTTP error: 503 - Service Unavailable".to_string())));
    pool.run_until_stalled();

    assert_eq!(ticker.price(), None);
    assert_eq!(renders.get(), 0);
    assert_eq!(error_count(), 0);
}

#[test]
fn index_change_discards_older_response() {
    let mut pool = LocalPool::new();
    let quotes = PendingQuotes::new();
    let (notify, renders) = counting_notify();
    let mut ticker = StockTicker::new(quotes.clone(), Rc::new(pool.spawner()), 0, notify);

    ticker.mount();
    pool.run_until_stalled();
    assert!(ticker.set_index(1));
    pool.run_until_stalled();
    assert_eq!(quotes.request_count(), 2);

    assert!(!quotes.resolve(0, Ok(series())));
    pool.run_until_stalled();
    assert_eq!(ticker.price(), None);

    assert!(quotes.resolve(1, Ok(series())));
    pool.run_until_stalled();
    assert_eq!(ticker.price().map(|p| p.value().to_string()).as_deref(), Some("103.50"));
    assert_eq!(renders.get(), 1);
}

#[test]
fn same_index_does_not_refetch() {
    let mut pool = LocalPool::new();
    let quotes = PendingQuotes::new();
    let (notify, _renders) = counting_notify();
    let mut ticker = StockTicker::new(quotes.clone(), Rc::new(pool.spawner()), 0, notify);

    ticker.mount();
    assert!(!ticker.set_index(0));
    pool.run_until_stalled();
    assert_eq!(quotes.request_count(), 1);
}

#[test]
fn out_of_range_entry_is_logged_while_live() {
    init_logger(Box::new(MemoryLogger));
    MemoryLogger::drain();

    let mut pool = LocalPool::new();
    let quotes = PendingQuotes::new();
    let (notify, renders) = counting_notify();
    let mut ticker = StockTicker::new(quotes.clone(), Rc::new(pool.spawner()), 7, notify);

    ticker.mount();
    quotes.resolve(0, Ok(series()));
    pool.run_until_stalled();

    assert_eq!(ticker.price(), None);
    assert_eq!(renders.get(), 0);
    assert_eq!(error_count(), 1);
}
