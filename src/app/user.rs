use crate::app::state::AppState;
use crate::slice::SliceHandle;
use crate::store::{Store, SubscriptionGuard};
use thiserror::Error;

/// State owned by the user-profile slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserState {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: None,
            email: None,
        }
    }

    /// GitHub avatar image for the current username.
    pub fn avatar_url(&self) -> String {
        format!("https://github.com/{}.png", self.username)
    }

    /// Uppercased first character of the username, shown when the avatar
    /// image is unavailable. `None` when the username is empty.
    pub fn avatar_fallback(&self) -> Option<char> {
        let first = self.username.chars().next()?;
        first.to_uppercase().next()
    }
}

/// Rejection reasons for the validated username path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("username must not be empty")]
    EmptyUsername,
}

/// The user-profile slice: the profile record and its mutators.
#[derive(Clone)]
pub struct UserSlice {
    handle: SliceHandle<AppState, UserState>,
}

impl UserSlice {
    pub(crate) fn attach(store: &Store<AppState>) -> Self {
        Self {
            handle: SliceHandle::new(store, |state| &state.user, |state| &mut state.user),
        }
    }

    /// A clone of the current profile.
    pub fn user(&self) -> UserState {
        self.handle.get()
    }

    /// The current username.
    pub fn username(&self) -> String {
        self.handle.read(|user| user.username.clone())
    }

    /// Replace the username unconditionally.
    ///
    /// Any string is stored as-is, including the empty string; use
    /// [`UserSlice::try_set_username`] to validate first. Setting the same
    /// value again leaves the state value-equal.
    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.handle
            .update("user/set_username", move |user| user.username = username);
    }

    /// Validated username replacement: rejects the empty string.
    pub fn try_set_username(&self, username: &str) -> Result<(), UserError> {
        if username.is_empty() {
            log::warn!("rejected empty username submission");
            return Err(UserError::EmptyUsername);
        }
        self.set_username(username);
        Ok(())
    }

    /// Subscribe to profile changes only.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionGuard<AppState>
    where
        F: Fn(&UserState) + Send + Sync + 'static,
    {
        self.handle.subscribe(callback)
    }
}
