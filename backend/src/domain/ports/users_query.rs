//! Driving port for reading users.
//!
//! Inbound adapters use this port to fetch users without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for user reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return user `id`, or a `not_found` error.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
