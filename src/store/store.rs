use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::store::middleware::Middleware;
use crate::store::subscription::{SubscriberEntry, SubscriptionGuard};

/// A thread-safe store for managing application state.
///
/// The store holds one snapshot of state at a time. Updates are applied to a
/// draft copy and then installed as the new current snapshot, so values read
/// out of the store earlier are never mutated behind their holders' backs.
pub struct Store<S> {
    state: Arc<RwLock<S>>,
    subscribers: Arc<RwLock<Vec<SubscriberEntry<S>>>>,
    middleware: Arc<RwLock<Vec<Box<dyn Middleware<S>>>>>,
    next_subscriber_id: Arc<AtomicUsize>,
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Create a new store with the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            middleware: Arc::new(RwLock::new(Vec::new())),
            next_subscriber_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Attach a middleware layer that observes every transition.
    ///
    /// Layers run in the order they were attached. A middleware only sees the
    /// previous and next snapshots; it cannot alter either.
    pub fn with_middleware<M>(self, middleware: M) -> Self
    where
        M: Middleware<S> + 'static,
    {
        self.middleware.write().unwrap().push(Box::new(middleware));
        self
    }

    /// Get a clone of the current snapshot.
    pub fn get(&self) -> S {
        self.state.read().unwrap().clone()
    }

    /// Read the current snapshot without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Replace the whole snapshot.
    pub fn set(&self, new_state: S) {
        self.apply("set", |state| *state = new_state);
    }

    /// Update the state through a draft.
    ///
    /// The closure receives a mutable draft of the current snapshot and may
    /// edit it in place; the edited draft then becomes the new current
    /// snapshot. The `action` label is reported to middleware.
    pub fn update<F>(&self, action: &str, f: F)
    where
        F: FnOnce(&mut S),
    {
        self.apply(action, f);
    }

    /// Subscribe to every state transition.
    ///
    /// The callback is called with the new snapshot after each update,
    /// whether or not the parts it cares about changed. Dropping the returned
    /// guard unsubscribes.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionGuard<S>
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.register(Box::new(move |_prev, next| callback(next)))
    }

    /// Subscribe to a selected portion of state.
    ///
    /// The callback is only called when the selected value differs between
    /// the previous and next snapshot, so updates confined to other parts of
    /// the state do not notify this subscriber.
    pub fn subscribe_with<T, Sel, F>(&self, selector: Sel, callback: F) -> SubscriptionGuard<S>
    where
        T: PartialEq,
        Sel: Fn(&S) -> T + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.register(Box::new(move |prev, next| {
            let selected = selector(next);
            if selector(prev) != selected {
                callback(&selected);
            }
        }))
    }

    /// Install a transition: draft, freeze, middleware, notify.
    fn apply<F>(&self, action: &str, f: F)
    where
        F: FnOnce(&mut S),
    {
        let (prev, next) = {
            let mut state = self.state.write().unwrap();
            let mut draft = state.clone();
            f(&mut draft);
            let prev = std::mem::replace(&mut *state, draft);
            (prev, state.clone())
        };
        // Write lock is released before middleware and subscribers run

        {
            let middleware = self.middleware.read().unwrap();
            for layer in middleware.iter() {
                layer.on_transition(action, &prev, &next);
            }
        }

        let subscribers = self.subscribers.read().unwrap();
        for entry in subscribers.iter() {
            (entry.notify)(&prev, &next);
        }
    }

    fn register(&self, notify: Box<dyn Fn(&S, &S) + Send + Sync>) -> SubscriptionGuard<S> {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .write()
            .unwrap()
            .push(SubscriberEntry { id, notify });
        SubscriptionGuard::new(id, Arc::downgrade(&self.subscribers))
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            middleware: Arc::clone(&self.middleware),
            next_subscriber_id: Arc::clone(&self.next_subscriber_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct AppState {
        count: usize,
        name: String,
    }

    #[test]
    fn store_get_set() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        assert_eq!(store.get().count, 0);

        store.set(AppState {
            count: 42,
            name: "updated".to_string(),
        });

        assert_eq!(store.get().count, 42);
        assert_eq!(store.get().name, "updated");
    }

    #[test]
    fn store_update() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        store.update("bump", |state| {
            state.count += 10;
        });

        assert_eq!(store.get().count, 10);
    }

    #[test]
    fn snapshots_are_immutable() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let before = store.get();
        store.update("bump", |state| state.count = 42);

        assert_eq!(before.count, 0);
        assert_eq!(store.get().count, 42);
    }

    #[test]
    fn store_subscribe() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let _subscription = store.subscribe(move |_state| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(call_count.load(Ordering::SeqCst), 0);

        store.update("bump", |state| state.count += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);

        store.update("bump", |state| state.count += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn plain_subscribers_fire_on_every_replacement() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let _subscription = store.subscribe(move |_state| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });

        // The update leaves the state value-equal, but the snapshot was
        // replaced, which is enough to notify a plain subscriber.
        store.update("noop", |_state| {});
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn selector_subscribers_skip_unrelated_updates() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let _subscription = store.subscribe_with(
            |state| state.count,
            move |_count| {
                call_count_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        store.update("rename", |state| state.name = "other".to_string());
        assert_eq!(call_count.load(Ordering::SeqCst), 0);

        store.update("bump", |state| state.count += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn selector_subscribers_receive_the_selected_value() {
        let store = Store::new(AppState {
            count: 1,
            name: "test".to_string(),
        });

        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();

        let _subscription = store.subscribe_with(
            |state| state.count,
            move |count| {
                seen_clone.store(*count, Ordering::SeqCst);
            },
        );

        store.update("bump", |state| state.count = 7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
