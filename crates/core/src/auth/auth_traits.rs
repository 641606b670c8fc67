use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::auth_model::{IssuedSession, Role, Session};
use crate::errors::Result;

#[async_trait]
pub trait SessionRepositoryTrait: Send + Sync {
    async fn insert(&self, session: Session) -> Result<()>;
    fn get(&self, session_id: &str) -> Result<Option<Session>>;
    async fn delete(&self, session_id: &str) -> Result<usize>;
    async fn delete_expired(&self, now: NaiveDateTime) -> Result<usize>;
}

#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    async fn open_session(&self, role: Role) -> Result<IssuedSession>;

    /// Role granted by `token`, or `None` for unknown or expired tokens.
    async fn resolve_role(&self, token: &str) -> Result<Option<Role>>;

    async fn close_session(&self, token: &str) -> Result<usize>;
}
