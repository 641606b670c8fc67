//! SQLite storage implementation for the member roster.

mod model;
mod repository;

pub use model::MemberDB;
pub use repository::MemberRepository;
