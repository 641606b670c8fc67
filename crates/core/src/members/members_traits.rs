use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::members_model::{Member, MemberUpdate, NewMember};
use crate::errors::Result;

#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    /// Lists members ordered by name.
    fn list(&self) -> Result<Vec<Member>>;
    async fn insert(&self, member: Member) -> Result<Member>;
    async fn update(
        &self,
        member_id: &str,
        name: &str,
        part: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<Member>;
    async fn delete(&self, member_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait MemberServiceTrait: Send + Sync {
    fn get_members(&self) -> Result<Vec<Member>>;
    async fn create_member(&self, new_member: NewMember) -> Result<Member>;
    async fn update_member(&self, update: MemberUpdate) -> Result<Member>;
    async fn delete_member(&self, member_id: &str) -> Result<usize>;
}
