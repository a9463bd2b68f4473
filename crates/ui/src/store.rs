use deploy_core::model::User;
use deploy_core::{UserAction, reduce};
use dioxus::prelude::*;

/// Holds the signed-in profile for the component tree.
///
/// The value lives in a signal owned by the scope that installed the store;
/// components read it and send `UserAction`s through `dispatch`.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionStore {
    user: Signal<User>,
}

impl SessionStore {
    #[must_use]
    pub fn new(initial: User) -> Self {
        Self {
            user: Signal::new(initial),
        }
    }

    /// Current profile. Subscribes the calling component to changes.
    #[must_use]
    pub fn current(&self) -> User {
        self.user.read().clone()
    }

    /// Current profile without subscribing; for use inside event handlers.
    #[must_use]
    pub fn peek(&self) -> User {
        self.user.peek().clone()
    }

    /// Run the reducer and store the result. Unchanged states do not notify readers.
    pub fn dispatch(&self, action: UserAction) {
        let current = self.peek();
        let next = reduce(&current, &action);
        let changed = next != current;
        tracing::debug!(kind = action.kind(), changed, "session action");

        if changed {
            let mut user = self.user;
            user.set(next);
        }
    }
}

/// Install a `SessionStore` seeded with `initial` for this scope and its children.
pub fn use_session_provider(initial: impl FnOnce() -> User) -> SessionStore {
    use_context_provider(|| SessionStore::new(initial()))
}

#[must_use]
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}
