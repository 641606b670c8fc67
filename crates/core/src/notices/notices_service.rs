use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use super::notices_model::{NewNotice, Notice};
use super::notices_traits::{NoticeRepositoryTrait, NoticeServiceTrait};
use crate::constants::DEFAULT_NOTICE_AUTHOR;
use crate::errors::Result;

pub struct NoticeService {
    repository: Arc<dyn NoticeRepositoryTrait>,
}

impl NoticeService {
    pub fn new(repository: Arc<dyn NoticeRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NoticeServiceTrait for NoticeService {
    fn get_notices(&self) -> Result<Vec<Notice>> {
        self.repository.list()
    }

    async fn create_notice(&self, new_notice: NewNotice) -> Result<Notice> {
        let notice = Notice {
            id: Uuid::new_v4().to_string(),
            title: new_notice.title,
            content: new_notice.content,
            image_url: new_notice.image_url.filter(|u| !u.trim().is_empty()),
            author: new_notice
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NOTICE_AUTHOR.to_string()),
            created_at: Utc::now().naive_utc(),
        };
        let created = self.repository.insert(notice).await?;
        info!("Posted notice {} by {}", created.id, created.author);
        Ok(created)
    }

    async fn delete_notice(&self, notice_id: &str) -> Result<usize> {
        self.repository.delete(notice_id).await
    }
}
