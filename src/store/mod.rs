//! Snapshot state store with subscriptions and middleware.
//!
//! The store holds one immutable snapshot at a time. Updates edit a draft
//! copy which is then installed as the new current snapshot, middleware
//! observes each transition, and subscribers are notified in order.

mod middleware;
mod store;
mod subscription;

pub use middleware::{Logger, Middleware, DEVTOOLS_ENV};
pub use store::Store;
pub use subscription::SubscriptionGuard;
