//! Opaque user identifiers.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicI64, Ordering};

/// Last identifier handed out by [`UserId::fallback`].
static LAST_FALLBACK: AtomicI64 = AtomicI64::new(0);

/// An opaque identifier assigned to a user by the remote API.
///
/// The API may use numbers or strings; both are carried verbatim and
/// compared by value. Numbers keep their JSON representation, so `0`,
/// `1.5` and values above `i64::MAX` survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// A numeric identifier.
    Number(serde_json::Number),
    /// A textual identifier.
    Text(String),
}

impl UserId {
    /// Generates a local identifier for records the API did not identify.
    ///
    /// Values are milliseconds since the Unix epoch and strictly increase
    /// within a process, so two calls in the same millisecond still differ.
    #[must_use]
    pub fn fallback() -> Self {
        let now = Utc::now().timestamp_millis();
        let previous = LAST_FALLBACK
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        Self::Number(now.max(previous + 1).into())
    }

    /// Returns true if the identifier is falsy (`0` or an empty string).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Returns the identifier as a URL path segment.
    #[must_use]
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
