//! User domain service.
//!
//! Implements the driving ports on top of a [`UserRepository`]: drafts are
//! validated before any write, and storage failures become domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserId, UserValidationErrors};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { email } => {
            Error::conflict(format!("email already registered: {email}"))
                .with_details(json!({ "field": "email", "code": "duplicate_email" }))
        }
    }
}

fn validation_error(errors: &UserValidationErrors) -> Error {
    let violations: Vec<Value> = errors
        .iter()
        .map(|violation| {
            json!({
                "field": violation.field().as_str(),
                "message": violation.to_string(),
            })
        })
        .collect();
    Error::invalid_request("user validation failed").with_details(json!({
        "violations": violations,
    }))
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

fn validate(draft: &User) -> Result<(), Error> {
    draft.validate().map_err(|errors| {
        debug!(%errors, "user draft rejected");
        validation_error(&errors)
    })
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, draft: User) -> Result<User, Error> {
        validate(&draft)?;
        let stored = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = ?stored.id(), "user created");
        Ok(stored)
    }

    async fn update_user(&self, id: UserId, draft: User) -> Result<User, Error> {
        validate(&draft)?;
        let stored = self
            .repository
            .update(id, &draft)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))?;
        info!(user_id = %id, "user updated");
        Ok(stored)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !removed {
            return Err(user_not_found(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
