//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be exercised with in-memory or mocked implementations.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the user API.
    pub users: Arc<dyn UsersQuery>,
    /// Write side of the user API.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle separate read and write ports.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Build state from one service implementing both user ports.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use techassessment::domain::UserService;
    /// use techassessment::inbound::http::state::HttpState;
    /// use techassessment::outbound::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: S) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        let service = Arc::new(service);
        Self::new(service.clone(), service)
    }
}
