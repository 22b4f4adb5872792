//! OpenAPI document for the HTTP surface.
//!
//! Registers the greeting, user and health paths together with the schema
//! wrappers from [`crate::inbound::http::schemas`]. Served by Swagger UI in
//! debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tech assessment API",
        description = "Greeting endpoints, user records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::greeting::index,
        crate::inbound::http::greeting::greet,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserRequest, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "greeting", description = "Plain-text greetings"),
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
