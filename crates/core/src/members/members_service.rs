use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::members_model::{Member, MemberUpdate, NewMember};
use super::members_traits::{MemberRepositoryTrait, MemberServiceTrait};
use crate::errors::Result;

pub struct MemberService {
    repository: Arc<dyn MemberRepositoryTrait>,
}

impl MemberService {
    pub fn new(repository: Arc<dyn MemberRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn clean_part(part: Option<String>) -> Option<String> {
    part.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}

#[async_trait]
impl MemberServiceTrait for MemberService {
    fn get_members(&self) -> Result<Vec<Member>> {
        self.repository.list()
    }

    async fn create_member(&self, new_member: NewMember) -> Result<Member> {
        new_member.validate()?;
        let now = Utc::now().naive_utc();
        let member = Member {
            id: Uuid::new_v4().to_string(),
            name: new_member.name.trim().to_string(),
            part: clean_part(new_member.part),
            created_at: now,
            updated_at: now,
        };
        self.repository.insert(member).await
    }

    async fn update_member(&self, update: MemberUpdate) -> Result<Member> {
        update.validate()?;
        self.repository
            .update(
                &update.id,
                update.name.trim(),
                clean_part(update.part),
                Utc::now().naive_utc(),
            )
            .await
    }

    async fn delete_member(&self, member_id: &str) -> Result<usize> {
        self.repository.delete(member_id).await
    }
}
