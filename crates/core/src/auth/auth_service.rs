use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use log::{debug, info};
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;

use super::auth_model::{digest_token, IssuedSession, Role, Session};
use super::auth_traits::{SessionRepositoryTrait, SessionServiceTrait};
use crate::errors::Result;

const TOKEN_BYTES: usize = 32;

pub struct SessionService {
    repository: Arc<dyn SessionRepositoryTrait>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    async fn open_session(&self, role: Role) -> Result<IssuedSession> {
        let now = Utc::now().naive_utc();
        let purged = self.repository.delete_expired(now).await?;
        if purged > 0 {
            debug!("Purged {} expired session(s)", purged);
        }

        let token = Self::generate_token();
        let max_age = role.session_ttl();
        let expires_at = now + max_age;
        self.repository
            .insert(Session {
                id: digest_token(&token),
                role,
                created_at: now,
                expires_at,
            })
            .await?;
        info!("Opened {} session expiring at {}", role, expires_at);

        Ok(IssuedSession {
            token,
            role,
            expires_at,
            max_age,
        })
    }

    async fn resolve_role(&self, token: &str) -> Result<Option<Role>> {
        if token.is_empty() {
            return Ok(None);
        }
        let session_id = digest_token(token);
        let Some(session) = self.repository.get(&session_id)? else {
            return Ok(None);
        };
        if session.is_expired(Utc::now().naive_utc()) {
            self.repository.delete(&session_id).await?;
            return Ok(None);
        }
        Ok(Some(session.role))
    }

    async fn close_session(&self, token: &str) -> Result<usize> {
        self.repository.delete(&digest_token(token)).await
    }
}
