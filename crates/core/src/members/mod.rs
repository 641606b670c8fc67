//! Member roster.

mod members_model;
mod members_service;
mod members_traits;

pub use members_model::{Member, MemberUpdate, NewMember};
pub use members_service::MemberService;
pub use members_traits::{MemberRepositoryTrait, MemberServiceTrait};
