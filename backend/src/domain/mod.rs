//! Domain primitives, ports and services.
//!
//! Purpose: hold the transport-agnostic core. Inbound adapters call the
//! driving ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: error payload shared by every adapter.
//! - User / UserId: the user record and its storage identifier.
//! - UserService: user use-cases over a `UserRepository`.
//! - TraceId: request correlation identifier.
//! - greeting: greeting texts.

pub mod error;
pub mod greeting;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    User, UserField, UserId, UserValidationError, UserValidationErrors, is_valid_email,
};
pub use self::user_service::UserService;
