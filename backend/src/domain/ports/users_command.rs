//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for creating, replacing and removing users.
///
/// Implementations validate drafts before they reach storage and report
/// violations as `invalid_request` errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and store a new user. The draft's id is ignored.
    async fn create_user(&self, draft: User) -> Result<User, Error>;

    /// Validate `draft` and replace the fields of user `id`.
    async fn update_user(&self, id: UserId, draft: User) -> Result<User, Error>;

    /// Remove user `id`, or fail with `not_found`.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
