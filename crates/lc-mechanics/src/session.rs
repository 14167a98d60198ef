//! Play-session scope.
//!
//! Some rules last "until the end of the session". Rather than keep a
//! global flag, callers hold a [`SessionContext`] and pass it to every
//! operation that cares.

use serde::{Deserialize, Serialize};

/// Identifies the current play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionContext {
    number: u32,
}

impl SessionContext {
    /// The session with the given number.
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    /// This session's number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The session after this one.
    pub fn next(&self) -> Self {
        Self {
            number: self.number.saturating_add(1),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Display for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session {}", self.number)
    }
}
