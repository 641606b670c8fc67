//! GBTI Core - domain entities, services, and traits for the group calendar.
//!
//! This crate is database-agnostic. It defines repository traits that are
//! implemented by the `storage-sqlite` crate and services that hold the
//! calendar rules: participant linking, weekly recurring slots and their
//! materialization, notices, members, push subscriptions and sessions.

pub mod auth;
pub mod calendars;
pub mod constants;
pub mod errors;
pub mod members;
pub mod notices;
pub mod notifications;
pub mod participants;
pub mod recurring;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
