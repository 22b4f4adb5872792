//! Greeting service and user record API.
//!
//! Layout follows ports and adapters: [`domain`] holds records, validation
//! and services; [`inbound`] exposes them over HTTP; [`outbound`] stores
//! them in PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
