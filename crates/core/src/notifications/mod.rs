//! Web push subscriptions. Delivery happens elsewhere; this module only
//! records who wants to be notified and about what.

mod notifications_model;
mod notifications_service;
mod notifications_traits;

pub use notifications_model::{NewPushSubscription, PushSubscription};
pub use notifications_service::PushSubscriptionService;
pub use notifications_traits::{PushSubscriptionRepositoryTrait, PushSubscriptionServiceTrait};
