//! Request validation helpers for the HTTP adapter.
//!
//! Malformed identifiers and bodies are rejected here, before any domain call,
//! with `invalid_request` errors whose details name the offending field.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
    InvalidBody,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidBody => "invalid_body",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

/// HTTP field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer identifier")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

/// Parse a path segment into a [`UserId`].
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .trim()
        .parse::<UserId>()
        .map_err(|_| invalid_id_error(field, value))
}

fn payload_error(code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

/// JSON extractor config turning body errors into domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected JSON body");
        payload_error(ErrorCode::InvalidBody, format!("invalid request body: {err}")).into()
    })
}

/// Query extractor config turning query-string errors into domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected query string");
        payload_error(ErrorCode::InvalidQuery, format!("invalid query string: {err}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    const ID: FieldName = FieldName::new("id");

    #[rstest]
    #[case("1", 1)]
    #[case(" 42 ", 42)]
    fn parses_integer_ids(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_user_id(raw, ID).expect("valid id"), UserId::new(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    fn rejects_non_integer_ids(#[case] raw: &str) {
        let err = parse_user_id(raw, ID).expect_err("invalid id");

        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(err.message(), "id must be an integer identifier");
        let details = err.details().expect("details present");
        assert_eq!(details["field"], "id");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_id");
    }
}
