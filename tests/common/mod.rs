#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use lifecycle_demo_wasm::application::components::Notify;
use lifecycle_demo_wasm::domain::AppError;
use lifecycle_demo_wasm::domain::market_data::{QuoteRepository, TimeInterval, TimeSeries};
use lifecycle_demo_wasm::domain::users::{Email, UserId, UserRepository};

pub const SERIES_BODY: &str = r#"{
    "Meta Data": { "2. Symbol": "IBM", "4. Interval": "5min" },
    "Time Series (5min)": {
        "2024-01-02 16:00:00": { "1. open": "103.90", "4. close": "104.00" },
        "2024-01-02 15:55:00": { "1. open": "103.60", "4. close": "103.50" },
        "2024-01-02 15:50:00": { "1. open": "103.10", "4. close": "103.70" }
    }
}"#;

pub fn series() -> TimeSeries {
    TimeSeries::parse(SERIES_BODY, TimeInterval::FiveMinutes).unwrap()
}

pub fn email_for(id: UserId) -> Email {
    Email::new(format!("user{}@reqres.in", id.value()))
}

/// Notifier that counts how many times async state landed.
pub fn counting_notify() -> (Notify, Rc<Cell<usize>>) {
    let renders = Rc::new(Cell::new(0));
    let counter = renders.clone();
    (Rc::new(move || counter.set(counter.get() + 1)), renders)
}

type Reply<T> = oneshot::Sender<Result<T, AppError>>;

fn pending<T: 'static>() -> (Reply<T>, LocalBoxFuture<'static, Result<T, AppError>>) {
    let (tx, rx) = oneshot::channel();
    let fut = rx
        .map(|reply| {
            reply.unwrap_or_else(|_| Err(AppError::NetworkError("request dropped".to_string())))
        })
        .boxed_local();
    (tx, fut)
}

/// User directory whose responses are released by the test, in any order.
#[derive(Default)]
pub struct PendingUsers {
    requested: RefCell<Vec<UserId>>,
    replies: RefCell<Vec<(UserId, Reply<Email>)>>,
}

impl PendingUsers {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn requested(&self) -> Vec<UserId> {
        self.requested.borrow().clone()
    }

    /// Answer the oldest open request for `id`. Returns whether anyone was
    /// still listening.
    pub fn resolve(&self, id: UserId, reply: Result<Email, AppError>) -> bool {
        let mut replies = self.replies.borrow_mut();
        let Some(position) = replies.iter().position(|(requested, _)| *requested == id) else {
            return false;
        };
        let (_, tx) = replies.remove(position);
        tx.send(reply).is_ok()
    }

    /// Answer every open request, newest first, with the matching email.
    pub fn resolve_all_newest_first(&self) {
        let replies = std::mem::take(&mut *self.replies.borrow_mut());
        for (id, tx) in replies.into_iter().rev() {
            let _ = tx.send(Ok(email_for(id)));
        }
    }
}

impl UserRepository for PendingUsers {
    fn fetch_email(&self, id: UserId) -> LocalBoxFuture<'static, Result<Email, AppError>> {
        let (tx, fut) = pending();
        self.requested.borrow_mut().push(id);
        self.replies.borrow_mut().push((id, tx));
        fut
    }
}

/// Quotes endpoint whose responses are released by the test, addressed by
/// request number.
#[derive(Default)]
pub struct PendingQuotes {
    replies: RefCell<Vec<Option<Reply<TimeSeries>>>>,
}

impl PendingQuotes {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn request_count(&self) -> usize {
        self.replies.borrow().len()
    }

    /// Answer request `n` (zero based). Returns whether anyone was still
    /// listening.
    pub fn resolve(&self, n: usize, reply: Result<TimeSeries, AppError>) -> bool {
        let tx = self.replies.borrow_mut().get_mut(n).and_then(Option::take);
        tx.is_some_and(|tx| tx.send(reply).is_ok())
    }
}

impl QuoteRepository for PendingQuotes {
    fn fetch_series(&self) -> LocalBoxFuture<'static, Result<TimeSeries, AppError>> {
        let (tx, fut) = pending();
        self.replies.borrow_mut().push(Some(tx));
        fut
    }
}
