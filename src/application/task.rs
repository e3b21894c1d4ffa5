//! Cancellable async work started from an effect.
//!
//! [`guarded`] captures a liveness flag and an abort handle when the work
//! starts. The effect's cleanup cancels the [`TaskGuard`]; a result that
//! arrives afterwards is dropped instead of applied.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted, FutureExt, LocalBoxFuture};
use futures::executor::LocalSpawner;
use futures::task::LocalSpawnExt;

use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error};

/// Shared "still mounted" flag.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one in-flight task.
#[derive(Debug, Clone)]
pub struct TaskGuard {
    live: Liveness,
    abort: AbortHandle,
}

impl TaskGuard {
    /// Suppress the result and abort the future. Best effort: a request that
    /// already left the browser is not recalled.
    pub fn cancel(&self) {
        self.live.revoke();
        self.abort.abort();
    }

    pub fn is_live(&self) -> bool {
        self.live.is_live()
    }
}

/// Wrap `work` so that `apply` only sees its output while the guard is live.
/// The caller spawns the returned task on whatever executor it owns.
pub fn guarded<T, W, A>(work: W, apply: A) -> (TaskGuard, LocalBoxFuture<'static, ()>)
where
    T: 'static,
    W: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let live = Liveness::new();
    let check = live.clone();

    let task = async move {
        match Abortable::new(work, registration).await {
            Ok(output) if check.is_live() => apply(output),
            Ok(_) => {
                log_debug!(LogComponent::Application("Task"), "late result dropped");
            }
            Err(Aborted) => {
                log_debug!(LogComponent::Application("Task"), "task aborted before completion");
            }
        }
    }
    .boxed_local();

    (TaskGuard { live, abort }, task)
}

/// Runs `'static` tasks on the current thread.
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Browser spawner on the JS microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(e) = self.spawn_local(task) {
            log_error!(LogComponent::Application("Task"), "failed to spawn task: {e}");
        }
    }
}
