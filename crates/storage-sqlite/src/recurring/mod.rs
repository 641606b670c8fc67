//! SQLite storage implementation for weekly recurring slots.

mod model;
mod repository;

pub use model::RecurringSlotDB;
pub use repository::RecurringSlotRepository;
