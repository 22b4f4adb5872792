//! OpenAPI schemas for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape so the adapter layer owns the documentation concern.

use utoipa::ToSchema;

/// Machine-readable error code.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed request or failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record with the requested id.
    #[schema(rename = "not_found")]
    NotFound,
    /// The write clashes with stored state, e.g. a registered email.
    #[schema(rename = "conflict")]
    Conflict,
    /// Storage is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected failure; details are withheld.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error payload returned by every failing endpoint.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "user validation failed")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as validation violations.
    details: Option<serde_json::Value>,
}

/// Stored user record.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Between 2 and 50 characters.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Unique across users.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Between 10 and 15 characters when present.
    #[schema(example = "081234567890")]
    phone: Option<String>,
}
