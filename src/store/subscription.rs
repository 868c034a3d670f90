use std::sync::{RwLock, Weak};

/// A registered subscriber: its id plus the notification closure.
///
/// The closure receives the previous and next snapshots so selector-based
/// subscribers can decide whether their slice of state actually changed.
pub(crate) struct SubscriberEntry<S> {
    pub(crate) id: usize,
    pub(crate) notify: Box<dyn Fn(&S, &S) + Send + Sync>,
}

/// RAII guard for store subscriptions.
///
/// Dropping the guard removes the subscriber from the store. Call
/// [`SubscriptionGuard::forget`] to keep the subscription for as long as the
/// store lives.
pub struct SubscriptionGuard<S> {
    subscriber_id: usize,
    registry: Weak<RwLock<Vec<SubscriberEntry<S>>>>,
    active: bool,
}

impl<S> SubscriptionGuard<S> {
    pub(crate) fn new(
        subscriber_id: usize,
        registry: Weak<RwLock<Vec<SubscriberEntry<S>>>>,
    ) -> Self {
        Self {
            subscriber_id,
            registry,
            active: true,
        }
    }

    /// Keep the subscription alive for the lifetime of the store.
    pub fn forget(mut self) {
        self.active = false;
    }
}

impl<S> Drop for SubscriptionGuard<S> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut subscribers) = registry.write() {
                subscribers.retain(|entry| entry.id != self.subscriber_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::Store;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let store = Store::new(0);
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let subscription = store.subscribe(move |_| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.update("bump", |n| *n += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);

        drop(subscription);

        store.update("bump", |n| *n += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn forgotten_subscriptions_stay_registered() {
        let store = Store::new(0);
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        store
            .subscribe(move |_| {
                call_count_clone.fetch_add(1, Ordering::SeqCst);
            })
            .forget();

        store.update("bump", |n| *n += 1);
        store.update("bump", |n| *n += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }
}
