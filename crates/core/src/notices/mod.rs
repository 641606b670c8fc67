//! Notice board - announcements shown newest first.

mod notices_model;
mod notices_service;
mod notices_traits;

pub use notices_model::{NewNotice, Notice};
pub use notices_service::NoticeService;
pub use notices_traits::{NoticeRepositoryTrait, NoticeServiceTrait};
