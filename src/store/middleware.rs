use std::env;
use std::fmt;

/// Environment variable that switches the transition logger on.
pub const DEVTOOLS_ENV: &str = "SLICEBOX_DEVTOOLS";

/// A side channel observing every state transition.
///
/// Middleware is handed the action label plus the previous and next
/// snapshots after a transition has been computed. It cannot alter either
/// snapshot; the store passes shared references only.
pub trait Middleware<S>: Send + Sync {
    fn on_transition(&self, action: &str, prev: &S, next: &S);
}

/// Middleware that logs every transition through the `log` facade.
///
/// Emits one debug record per transition with the action label and the
/// previous and next snapshots. Pair with an env-filter logger such as
/// `env_logger` to route the records somewhere useful.
pub struct Logger {
    target: &'static str,
}

impl Logger {
    /// Create a logger reporting under the given log target.
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Create the logger only when [`DEVTOOLS_ENV`] is set to a truthy value.
    ///
    /// Development builds export the variable; production configurations
    /// leave it unset and the store runs without the side channel.
    pub fn from_env(target: &'static str) -> Option<Self> {
        match env::var(DEVTOOLS_ENV) {
            Ok(value) if value == "1" || value.eq_ignore_ascii_case("true") => {
                Some(Self::new(target))
            }
            _ => None,
        }
    }
}

impl<S: fmt::Debug> Middleware<S> for Logger {
    fn on_transition(&self, action: &str, prev: &S, next: &S) {
        log::debug!(target: self.target, "{action}: {prev:?} -> {next:?}");
    }
}
