use async_trait::async_trait;

use super::notices_model::{NewNotice, Notice};
use crate::errors::Result;

#[async_trait]
pub trait NoticeRepositoryTrait: Send + Sync {
    /// Lists notices newest first.
    fn list(&self) -> Result<Vec<Notice>>;
    async fn insert(&self, notice: Notice) -> Result<Notice>;
    async fn delete(&self, notice_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait NoticeServiceTrait: Send + Sync {
    fn get_notices(&self) -> Result<Vec<Notice>>;
    async fn create_notice(&self, new_notice: NewNotice) -> Result<Notice>;
    async fn delete_notice(&self, notice_id: &str) -> Result<usize>;
}
