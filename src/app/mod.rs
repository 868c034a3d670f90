//! The demo application state: a counter widget and a user-profile form
//! sharing one store.
//!
//! Each slice owns a field of [`AppState`] and exposes the mutators for it;
//! [`AppStore`] assembles both slices around a single shared [`crate::store::Store`].

mod counter;
mod state;
mod user;

pub use counter::{CounterSlice, CounterState};
pub use state::{AppState, AppStore};
pub use user::{UserError, UserSlice, UserState};
