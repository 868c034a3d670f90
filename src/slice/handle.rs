use crate::store::{Store, SubscriptionGuard};

/// A slice's view of a shared store.
///
/// A handle pairs the whole-store capability with a lens onto the slice's
/// own subtree of the state. Reads and updates made through the handle are
/// scoped to that subtree, and subscriptions only fire when the subtree
/// changed, so mutations of sibling slices stay invisible.
///
/// Nothing prevents a slice from reaching past its subtree: [`SliceHandle::store`]
/// hands back the full store for cross-slice reads and updates.
pub struct SliceHandle<S, T> {
    store: Store<S>,
    select: fn(&S) -> &T,
    select_mut: fn(&mut S) -> &mut T,
}

impl<S, T> SliceHandle<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Attach a slice to a store through a lens pair.
    pub fn new(store: &Store<S>, select: fn(&S) -> &T, select_mut: fn(&mut S) -> &mut T) -> Self {
        Self {
            store: store.clone(),
            select,
            select_mut,
        }
    }

    /// Get a clone of the slice's current state.
    pub fn get(&self) -> T {
        let select = self.select;
        self.store.read(move |state| select(state).clone())
    }

    /// Read the slice's current state without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let select = self.select;
        self.store.read(move |state| f(select(state)))
    }

    /// Update the slice through a draft of its subtree.
    pub fn update(&self, action: &str, f: impl FnOnce(&mut T)) {
        let select_mut = self.select_mut;
        self.store.update(action, move |state| f(select_mut(state)));
    }

    /// Subscribe to changes of this slice only.
    ///
    /// The callback fires when the slice's state differs between the
    /// previous and next snapshot; transitions that only touch other slices
    /// are skipped.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionGuard<S>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let select = self.select;
        self.store
            .subscribe_with(move |state| select(state).clone(), callback)
    }

    /// The whole-store capability behind this slice.
    pub fn store(&self) -> &Store<S> {
        &self.store
    }
}

impl<S, T> Clone for SliceHandle<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            select: self.select,
            select_mut: self.select_mut,
        }
    }
}
