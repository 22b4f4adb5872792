//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: PostgreSQL repositories built on Diesel.
//! - **memory**: process-local storage used when no database is configured.
//!
//! Adapters translate between domain records and storage representations and
//! hold no business rules.

pub mod memory;
pub mod persistence;

pub use memory::InMemoryUserRepository;
