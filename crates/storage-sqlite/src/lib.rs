//! SQLite storage implementation for the GBTI group calendar.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `gbti-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! Reads go through the r2d2 pool; every write is sent to a single writer task
//! that runs it inside an immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod calendars;
pub mod members;
pub mod notices;
pub mod notifications;
pub mod participants;
pub mod recurring;
pub mod sessions;

#[cfg(test)]
mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use calendars::CalendarRepository;
pub use members::MemberRepository;
pub use notices::NoticeRepository;
pub use notifications::PushSubscriptionRepository;
pub use participants::ParticipantRepository;
pub use recurring::RecurringSlotRepository;
pub use sessions::SessionRepository;

// Re-export from gbti-core for convenience
pub use gbti_core::errors::{DatabaseError, Error, Result};
