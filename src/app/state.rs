use crate::app::counter::{CounterSlice, CounterState};
use crate::app::user::{UserSlice, UserState};
use crate::store::{Logger, Store, SubscriptionGuard};

/// The combined application snapshot, one field per slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub counter: CounterState,
    pub user: UserState,
}

impl AppState {
    /// Starting snapshot: counter at 1 and the given profile username.
    ///
    /// The username must be the real initial profile; nothing else in the
    /// application ever re-seeds it.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            counter: CounterState::default(),
            user: UserState::new(username),
        }
    }
}

/// The application store: one shared [`Store`] with the counter and user
/// slices attached.
///
/// Both slices hold the same whole-store handle, so either can in principle
/// reach the other's subtree through its handle; day-to-day they stay inside
/// their own field of [`AppState`]. Consumers receive this struct (or clones
/// of it) explicitly; there is no ambient global instance.
#[derive(Clone)]
pub struct AppStore {
    store: Store<AppState>,
    pub counter: CounterSlice,
    pub user: UserSlice,
}

impl AppStore {
    /// Assemble the store and its slices from an initial snapshot.
    pub fn new(initial: AppState) -> Self {
        Self::assemble(Store::new(initial))
    }

    /// Like [`AppStore::new`], with the transition [`Logger`] attached when
    /// the environment enables devtools.
    pub fn from_env(initial: AppState) -> Self {
        let mut store = Store::new(initial);
        if let Some(logger) = Logger::from_env("slicebox::app") {
            store = store.with_middleware(logger);
        }
        Self::assemble(store)
    }

    fn assemble(store: Store<AppState>) -> Self {
        let counter = CounterSlice::attach(&store);
        let user = UserSlice::attach(&store);
        Self {
            store,
            counter,
            user,
        }
    }

    /// A clone of the current full snapshot.
    pub fn state(&self) -> AppState {
        self.store.get()
    }

    /// The whole-store handle, for whole-state subscription or cross-slice
    /// updates.
    pub fn store(&self) -> &Store<AppState> {
        &self.store
    }

    /// Subscribe to every transition, regardless of which slice changed.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionGuard<AppState>
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_share_one_store() {
        let store = AppStore::new(AppState::new("gabriel-jesusvix"));

        store.counter.increment();
        store.user.set_username("alice");

        let state = store.state();
        assert_eq!(state.counter.count, 2);
        assert_eq!(state.user.username, "alice");
    }

    #[test]
    fn cross_slice_updates_go_through_the_shared_handle() {
        let store = AppStore::new(AppState::new("gabriel-jesusvix"));

        store.store().update("reset", |state| {
            state.counter.count = 1;
            state.user.username = "fresh".to_string();
        });

        assert_eq!(store.counter.count(), 1);
        assert_eq!(store.user.username(), "fresh");
    }

    #[test]
    fn clones_are_the_same_store() {
        let store = AppStore::new(AppState::new("gabriel-jesusvix"));
        let clone = store.clone();

        clone.counter.increment();
        assert_eq!(store.counter.count(), 2);
    }
}
