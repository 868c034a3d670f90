//! # Slicebox
//!
//! A composable state-store library for Rust.
//!
//! Slicebox provides two levels of abstraction for managing UI state:
//!
//! ## Store (core container)
//!
//! A thread-safe snapshot container for whole application state:
//! - `Store<S>` - updates produce a fresh snapshot, so state handed out
//!   earlier never changes underneath its holders
//! - Subscriptions with optional selectors, notified only when the selected
//!   portion of state actually changed
//! - Middleware support for logging and debugging every transition
//!
//! ## Slices (composed application state)
//!
//! Convenient abstractions for splitting one store across domains:
//! - `SliceHandle<S, T>` - a slice's view of the shared store, scoped to its
//!   own subtree while carrying the whole-store capability
//! - `AppStore` - the bundled demo application: a counter slice and a
//!   user-profile slice merged into one state

pub mod app;
pub mod slice;
pub mod store;

// Re-export main types for convenience
pub use app::{AppState, AppStore, CounterSlice, CounterState, UserError, UserSlice, UserState};
pub use slice::SliceHandle;
pub use store::{Logger, Middleware, Store, SubscriptionGuard};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::new(0);
        assert_eq!(store.get(), 0);
        store.set(42);
        assert_eq!(store.get(), 42);
    }
}
