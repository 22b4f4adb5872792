//! HTTP inbound adapter: greeting, user CRUD and health endpoints.

pub mod error;
pub mod greeting;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Mount every route. Handlers expect `web::Data<HttpState>` and
/// `web::Data<HealthState>` in app data.
///
/// ```
/// use actix_web::App;
/// use techassessment::inbound::http::routes;
///
/// let app = App::new().configure(routes);
/// ```
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(greeting::index)
        .service(greeting::greet)
        .service(web::scope("/api/v1").configure(users::configure))
        .service(health::ready)
        .service(health::live);
}
