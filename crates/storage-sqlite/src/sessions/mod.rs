//! SQLite storage implementation for login sessions.

mod model;
mod repository;

pub use model::SessionDB;
pub use repository::SessionRepository;
