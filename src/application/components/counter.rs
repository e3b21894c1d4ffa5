use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::application::components::Lifecycle;
use crate::application::effects::{Deps, Dispose, EffectSlot};
use crate::domain::logging::LogComponent;
use crate::domain::render_log::{EffectPolicy, RenderEvent};
use crate::log_info;

/// Oldest events are dropped past this many.
pub const MAX_HISTORY: usize = 100;

type History = Rc<RefCell<VecDeque<RenderEvent>>>;

fn record(history: &History, event: RenderEvent) {
    log_info!(LogComponent::Application("RenderLogger"), "{event}");
    let mut history = history.borrow_mut();
    history.push_back(event);
    while history.len() > MAX_HISTORY {
        history.pop_front();
    }
}

/// Counter whose renders are observed by three effects: one per render, one
/// at mount, one per change of the count.
pub struct RenderLogger {
    count: i64,
    mounted: bool,
    history: History,
    every_render: EffectSlot<()>,
    on_mount: EffectSlot<()>,
    on_change: EffectSlot<i64>,
}

impl RenderLogger {
    pub fn new(initial: i64) -> Self {
        Self {
            count: initial,
            mounted: false,
            history: Rc::new(RefCell::new(VecDeque::new())),
            every_render: EffectSlot::new(),
            on_mount: EffectSlot::new(),
            on_change: EffectSlot::new(),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn history(&self) -> Vec<RenderEvent> {
        self.history.borrow().iter().copied().collect()
    }

    pub fn clear_history(&mut self) {
        self.history.borrow_mut().clear();
    }

    /// Update the counter. An equal value does not render.
    pub fn set_count(&mut self, count: i64) -> bool {
        if self.count == count {
            return false;
        }
        self.count = count;
        if self.mounted {
            self.commit();
        }
        true
    }

    fn commit(&mut self) {
        let count = self.count;

        let history = self.history.clone();
        self.every_render.commit(Deps::Always, move || {
            record(&history, RenderEvent::ran(EffectPolicy::EveryRender, count));
            Dispose::noop()
        });

        // The cleanup reports the count it was registered with.
        let history = self.history.clone();
        self.on_mount.commit(Deps::Once, move || {
            record(&history, RenderEvent::ran(EffectPolicy::MountOnly, count));
            Dispose::new(move || {
                record(&history, RenderEvent::cleaned_up(EffectPolicy::MountOnly, count))
            })
        });

        let history = self.history.clone();
        self.on_change.commit(Deps::On(count), move || {
            record(&history, RenderEvent::ran(EffectPolicy::OnChange, count));
            Dispose::noop()
        });
    }
}

impl Lifecycle for RenderLogger {
    fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.commit();
    }

    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.every_render.dispose();
        self.on_mount.dispose();
        self.on_change.dispose();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Default for RenderLogger {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EffectPolicy::*;

    #[test]
    fn mount_runs_all_three_policies() {
        let mut logger = RenderLogger::new(0);
        logger.mount();
        assert_eq!(
            logger.history(),
            [
                RenderEvent::ran(EveryRender, 0),
                RenderEvent::ran(MountOnly, 0),
                RenderEvent::ran(OnChange, 0),
            ]
        );
    }

    #[test]
    fn change_skips_mount_only_effect() {
        let mut logger = RenderLogger::new(0);
        logger.mount();
        logger.clear_history();

        assert!(logger.set_count(2));
        assert_eq!(
            logger.history(),
            [RenderEvent::ran(EveryRender, 2), RenderEvent::ran(OnChange, 2)]
        );
    }

    #[test]
    fn equal_value_does_not_render() {
        let mut logger = RenderLogger::new(4);
        logger.mount();
        logger.clear_history();

        assert!(!logger.set_count(4));
        assert!(logger.history().is_empty());
    }

    #[test]
    fn unmount_runs_mount_cleanup_with_initial_count() {
        let mut logger = RenderLogger::new(1);
        logger.mount();
        logger.set_count(5);
        logger.clear_history();

        logger.unmount();
        assert_eq!(logger.history(), [RenderEvent::cleaned_up(MountOnly, 1)]);
        assert!(!logger.is_mounted());
    }

    #[test]
    fn updates_before_mount_are_silent() {
        let mut logger = RenderLogger::new(0);
        logger.set_count(3);
        assert!(logger.history().is_empty());
        logger.mount();
        assert_eq!(logger.history()[0], RenderEvent::ran(EveryRender, 3));
    }

    #[test]
    fn history_keeps_only_latest_events() {
        let mut logger = RenderLogger::new(0);
        logger.mount();
        for count in 1..=200 {
            logger.set_count(count);
        }

        let history = logger.history();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.last(), Some(&RenderEvent::ran(OnChange, 200)));
        assert_eq!(history[0], RenderEvent::ran(EveryRender, 151));
    }
}
