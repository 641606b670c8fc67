use async_trait::async_trait;

use super::participants_model::Participant;
use crate::errors::Result;

/// Trait defining the contract for Participant repository operations.
#[async_trait]
pub trait ParticipantRepositoryTrait: Send + Sync {
    /// Lists every participant ordered by name.
    fn list(&self) -> Result<Vec<Participant>>;

    /// Returns the participant with this exact name, inserting it first if needed.
    ///
    /// Implementations must perform the insert as a single conditional statement
    /// so that concurrent callers converge on one row.
    async fn find_or_create(&self, name: String) -> Result<Participant>;
}

/// Trait defining the contract for Participant service operations.
#[async_trait]
pub trait ParticipantServiceTrait: Send + Sync {
    fn get_participants(&self) -> Result<Vec<Participant>>;
    async fn ensure_participant(&self, name: &str) -> Result<Participant>;
}
