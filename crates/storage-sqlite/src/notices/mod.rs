//! SQLite storage implementation for notices.

mod model;
mod repository;

pub use model::NoticeDB;
pub use repository::NoticeRepository;
