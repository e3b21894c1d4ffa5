use std::cell::RefCell;
use std::rc::Rc;

use crate::application::components::{Lifecycle, Notify};
use crate::application::effects::{Deps, Dispose, EffectSlot};
use crate::application::task::{Spawner, guarded};
use crate::domain::logging::LogComponent;
use crate::domain::users::{Email, UserId, UserRepository};
use crate::{log_error, log_info};

/// Shows the email of one user; refetches whenever the id changes.
///
/// There is no recovery path: a failed lookup is logged and the previous
/// email stays on screen. The fetch effect does cancel on cleanup, so only
/// the most recently requested id can ever land.
pub struct EmailFetcher {
    repository: Rc<dyn UserRepository>,
    spawner: Rc<dyn Spawner>,
    notify: Notify,
    user_id: UserId,
    email: Rc<RefCell<Option<Email>>>,
    mounted: bool,
    fetch: EffectSlot<UserId>,
}

impl EmailFetcher {
    pub fn new(
        repository: Rc<dyn UserRepository>,
        spawner: Rc<dyn Spawner>,
        user_id: UserId,
        notify: Notify,
    ) -> Self {
        Self {
            repository,
            spawner,
            notify,
            user_id,
            email: Rc::new(RefCell::new(None)),
            mounted: false,
            fetch: EffectSlot::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> Option<Email> {
        self.email.borrow().clone()
    }

    pub fn set_user_id(&mut self, user_id: UserId) -> bool {
        if self.user_id == user_id {
            return false;
        }
        self.user_id = user_id;
        if self.mounted {
            self.commit();
        }
        true
    }

    fn commit(&mut self) {
        let user_id = self.user_id;
        let repository = self.repository.clone();
        let spawner = self.spawner.clone();
        let slot = self.email.clone();
        let notify = self.notify.clone();

        self.fetch.commit(Deps::On(user_id), move || {
            log_info!(LogComponent::Application("EmailFetcher"), "fetching user {user_id}");
            let (guard, task) = guarded(repository.fetch_email(user_id), move |result| {
                match result {
                    Ok(email) => {
                        *slot.borrow_mut() = Some(email);
                        notify();
                    }
                    Err(e) => {
                        log_error!(
                            LogComponent::Application("EmailFetcher"),
                            "lookup of user {user_id} failed: {e}"
                        );
                    }
                }
            });
            spawner.spawn(task);
            Dispose::new(move || guard.cancel())
        });
    }
}

impl Lifecycle for EmailFetcher {
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
        self.fetch.dispose();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
