//! Dependency-driven effects with cleanup.
//!
//! An [`EffectSlot`] stands for one effect call site inside a component. Each
//! commit hands it the current dependencies; the slot decides whether the body
//! runs again and, if so, runs the previous cleanup first. Teardown runs the
//! last cleanup once more.

use std::cell::RefCell;
use std::rc::Rc;

/// Cleanup returned by an effect body. Runs at most once.
#[derive(Clone, Default)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// An effect without cleanup.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        // Release the borrow before calling, the cleanup may clone this handle.
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// When an effect body runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deps<K> {
    /// Every commit.
    Always,
    /// First commit only.
    Once,
    /// First commit and whenever the key changes.
    On(K),
}

pub struct EffectSlot<K> {
    ran: bool,
    last_key: Option<K>,
    cleanup: Option<Dispose>,
}

impl<K: PartialEq> EffectSlot<K> {
    pub fn new() -> Self {
        Self {
            ran: false,
            last_key: None,
            cleanup: None,
        }
    }

    fn should_run(&self, deps: &Deps<K>) -> bool {
        if !self.ran {
            return true;
        }
        match deps {
            Deps::Always => true,
            Deps::Once => false,
            Deps::On(key) => self.last_key.as_ref() != Some(key),
        }
    }

    /// Run `body` if `deps` call for it. Returns whether it ran.
    pub fn commit(&mut self, deps: Deps<K>, body: impl FnOnce() -> Dispose) -> bool {
        if !self.should_run(&deps) {
            return false;
        }

        if let Some(previous) = self.cleanup.take() {
            previous.run();
        }

        if let Deps::On(key) = deps {
            self.last_key = Some(key);
        }
        self.ran = true;
        self.cleanup = Some(body());
        true
    }

    /// Teardown: run the outstanding cleanup. The next commit starts fresh.
    pub fn dispose(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup.run();
        }
        self.ran = false;
        self.last_key = None;
    }

    pub fn has_run(&self) -> bool {
        self.ran
    }
}

impl<K: PartialEq> Default for EffectSlot<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for EffectSlot<K> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup.run();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + Clone) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |line: &str| sink.borrow_mut().push(line.to_string()))
    }

    fn body(record: impl Fn(&str) + Clone + 'static, tag: &'static str) -> impl FnOnce() -> Dispose {
        move || {
            record(&format!("run {tag}"));
            Dispose::new(move || record(&format!("cleanup {tag}")))
        }
    }

    #[test]
    fn dispose_runs_once() {
        let (log, record) = recorder();
        let dispose = Dispose::new(move || record("cleanup"));
        assert!(dispose.is_pending());
        dispose.run();
        dispose.clone().run();
        assert_eq!(*log.borrow(), ["cleanup"]);
        assert!(!dispose.is_pending());
    }

    #[test]
    fn keyed_slot_cleans_up_before_rerun() {
        let (log, record) = recorder();
        let mut slot = EffectSlot::new();

        assert!(slot.commit(Deps::On(1), body(record.clone(), "1")));
        assert!(!slot.commit(Deps::On(1), body(record.clone(), "1 again")));
        assert!(slot.commit(Deps::On(2), body(record.clone(), "2")));
        slot.dispose();

        assert_eq!(*log.borrow(), ["run 1", "cleanup 1", "run 2", "cleanup 2"]);
    }

    #[test]
    fn once_slot_never_reruns() {
        let (log, record) = recorder();
        let mut slot: EffectSlot<()> = EffectSlot::new();

        assert!(slot.commit(Deps::Once, body(record.clone(), "mount")));
        assert!(!slot.commit(Deps::Once, body(record.clone(), "again")));
        slot.dispose();

        assert_eq!(*log.borrow(), ["run mount", "cleanup mount"]);
    }

    #[test]
    fn always_slot_reruns_every_commit() {
        let (log, record) = recorder();
        let mut slot: EffectSlot<()> = EffectSlot::new();

        for tag in ["a", "b", "c"] {
            assert!(slot.commit(Deps::Always, body(record.clone(), tag)));
        }

        assert_eq!(
            *log.borrow(),
            ["run a", "cleanup a", "run b", "cleanup b", "run c"]
        );
    }

    #[test]
    fn remount_after_dispose_runs_again() {
        let (log, record) = recorder();
        let mut slot = EffectSlot::new();

        slot.commit(Deps::On("x"), body(record.clone(), "first"));
        slot.dispose();
        assert!(!slot.has_run());
        assert!(slot.commit(Deps::On("x"), body(record.clone(), "second")));

        assert_eq!(*log.borrow(), ["run first", "cleanup first", "run second"]);
    }

    #[test]
    fn drop_runs_pending_cleanup() {
        let (log, record) = recorder();
        {
            let mut slot: EffectSlot<()> = EffectSlot::new();
            slot.commit(Deps::Once, body(record.clone(), "scoped"));
        }
        assert_eq!(*log.borrow(), ["run scoped", "cleanup scoped"]);
    }
}
