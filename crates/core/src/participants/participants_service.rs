use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::participants_model::{validate_participant_name, Participant};
use super::participants_traits::{ParticipantRepositoryTrait, ParticipantServiceTrait};
use crate::errors::Result;

pub struct ParticipantService {
    repository: Arc<dyn ParticipantRepositoryTrait>,
}

impl ParticipantService {
    pub fn new(repository: Arc<dyn ParticipantRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ParticipantServiceTrait for ParticipantService {
    fn get_participants(&self) -> Result<Vec<Participant>> {
        self.repository.list()
    }

    async fn ensure_participant(&self, name: &str) -> Result<Participant> {
        let name = validate_participant_name(name)?;
        debug!("Ensuring participant '{}' exists", name);
        self.repository.find_or_create(name).await
    }
}
