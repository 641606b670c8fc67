//! SQLite storage implementation for calendars and their participant links.

mod model;
mod repository;

pub use model::{CalendarDB, CalendarParticipantDB};
pub use repository::CalendarRepository;
