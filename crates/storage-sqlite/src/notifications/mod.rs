//! SQLite storage implementation for push subscriptions.

mod model;
mod repository;

pub use model::PushSubscriptionDB;
pub use repository::PushSubscriptionRepository;
