//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserDraft, UserId};

/// User repository trait.
///
/// Every method is exactly one remote round-trip. Nothing is retried; a
/// failure is reported as [`roster_core::RosterError::Fetch`] and the caller
/// decides what to show.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users in server order.
    async fn list(&self) -> RosterResult<Vec<User>>;

    /// Fetches a single user.
    async fn get(&self, id: &UserId) -> RosterResult<User>;

    /// Creates a user.
    ///
    /// The returned user carries the caller's own fields; only the id comes
    /// from the server, or from [`UserId::fallback`] when the server sends none
    /// or a falsy one (`0`, `""`).
    async fn create(&self, draft: &UserDraft) -> RosterResult<User>;

    /// Replaces a user. Returns the caller's input unchanged on success.
    async fn update(&self, user: &User) -> RosterResult<User>;

    /// Deletes a user.
    async fn remove(&self, id: &UserId) -> RosterResult<()>;
}
