//! Builds the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use techassessment::domain::UserService;
use techassessment::domain::ports::UserRepository;
use techassessment::inbound::http::state::HttpState;
use techassessment::outbound::InMemoryUserRepository;
use techassessment::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

fn build_user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "user repository selected");
            Arc::new(DieselUserRepository::new(pool.clone()))
        }
        None => {
            info!(storage = "memory", "user repository selected");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Wire the user service over the selected repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = UserService::new(build_user_repository(config));
    web::Data::new(HttpState::from_service(service))
}
