//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::UserService;
use crate::inbound::http::state::HttpState;
use crate::outbound::InMemoryUserRepository;

/// State backed by a fresh in-memory repository.
pub fn in_memory_state() -> web::Data<HttpState> {
    let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
    web::Data::new(HttpState::from_service(service))
}
