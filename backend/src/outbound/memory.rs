//! Process-local `UserRepository` used when no database is configured.
//!
//! Mirrors the PostgreSQL adapter's observable behaviour: ids count up from
//! one and are never reused, records list in id order, and email uniqueness is
//! an exact, case-sensitive comparison.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

#[derive(Debug)]
struct Store {
    rows: BTreeMap<i64, User>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .iter()
            .any(|(id, user)| Some(*id) != except && user.email() == email)
    }
}

/// In-memory [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Empty store; the first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        if store.email_taken(user.email(), None) {
            return Err(UserPersistenceError::duplicate_email(user.email()));
        }
        let id = store.next_id;
        store.next_id += 1;
        let stored = user.clone().with_id(UserId::new(id));
        store.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: UserId, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.lock()?;
        if !store.rows.contains_key(&id.get()) {
            return Ok(None);
        }
        if store.email_taken(user.email(), Some(id.get())) {
            return Err(UserPersistenceError::duplicate_email(user.email()));
        }
        let stored = user.clone().with_id(id);
        store.rows.insert(id.get(), stored.clone());
        Ok(Some(stored))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(&id.get()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.rows.remove(&id.get()).is_some())
    }
}
