use crate::app::state::AppState;
use crate::slice::SliceHandle;
use crate::store::{Store, SubscriptionGuard};

/// State owned by the counter slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub count: u64,
}

impl Default for CounterState {
    fn default() -> Self {
        // The counter widget starts at 1
        Self { count: 1 }
    }
}

/// The counter slice: a display value and its increment mutator.
#[derive(Clone)]
pub struct CounterSlice {
    handle: SliceHandle<AppState, CounterState>,
}

impl CounterSlice {
    pub(crate) fn attach(store: &Store<AppState>) -> Self {
        Self {
            handle: SliceHandle::new(store, |state| &state.counter, |state| &mut state.counter),
        }
    }

    /// The current counter value.
    pub fn count(&self) -> u64 {
        self.handle.read(|counter| counter.count)
    }

    /// Add one to the counter. There is no upper bound and no decrement.
    pub fn increment(&self) {
        self.handle.update("counter/increment", |counter| counter.count += 1);
    }

    /// Subscribe to counter changes only.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionGuard<AppState>
    where
        F: Fn(&CounterState) + Send + Sync + 'static,
    {
        self.handle.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppStore;

    #[test]
    fn counter_starts_at_one() {
        let store = AppStore::new(AppState::new("test"));
        assert_eq!(store.counter.count(), 1);
    }

    #[test]
    fn increment_sequence() {
        let store = AppStore::new(AppState::new("test"));

        for n in 1..=50 {
            store.counter.increment();
            assert_eq!(store.counter.count(), 1 + n);
        }
    }
}
