//! SQLite storage implementation for participants.

mod model;
mod repository;

pub use model::ParticipantDB;
pub use repository::{find_or_insert_participant, ParticipantRepository};
