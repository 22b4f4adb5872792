//! Driven port for user storage and its errors.
//!
//! Adapters own id assignment and the email uniqueness constraint; callers
//! hand them records that already passed [`User::validate`].

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another record already holds this email.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// Storage port for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record and return it with its assigned id.
    ///
    /// Any id already present on `user` is ignored.
    async fn insert(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Replace name, email and phone of record `id`.
    ///
    /// Returns `None` when no such record exists.
    async fn update(&self, id: UserId, user: &User) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch all records ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Remove record `id`, returning whether it existed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
