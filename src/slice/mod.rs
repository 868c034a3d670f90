//! Slice composition over a shared store.
//!
//! A slice is a named part of the state plus the operations that manage it.
//! Every slice holds the same whole-store handle; the lens in its
//! [`SliceHandle`] scopes day-to-day reads, updates, and subscriptions to
//! the slice's own subtree.

mod handle;

pub use handle::SliceHandle;
