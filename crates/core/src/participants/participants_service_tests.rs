#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::participants::{
        Participant, ParticipantRepositoryTrait, ParticipantService, ParticipantServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockParticipantRepository {
        participants: Mutex<Vec<Participant>>,
    }

    #[async_trait]
    impl ParticipantRepositoryTrait for MockParticipantRepository {
        fn list(&self) -> Result<Vec<Participant>> {
            let mut all = self.participants.lock().unwrap().clone();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn find_or_create(&self, name: String) -> Result<Participant> {
            let mut participants = self.participants.lock().unwrap();
            if let Some(existing) = participants.iter().find(|p| p.name == name) {
                return Ok(existing.clone());
            }
            let created = Participant {
                id: format!("p-{}", participants.len() + 1),
                name,
                created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            };
            participants.push(created.clone());
            Ok(created)
        }
    }

    fn service() -> (ParticipantService, Arc<MockParticipantRepository>) {
        let repo = Arc::new(MockParticipantRepository::default());
        (ParticipantService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_ensure_participant_is_idempotent() {
        let (service, repo) = service();
        let first = service.ensure_participant("Jisoo").await.unwrap();
        let second = service.ensure_participant(" Jisoo ").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(repo.participants.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_participant_is_case_sensitive() {
        let (service, _) = service();
        let upper = service.ensure_participant("Lee").await.unwrap();
        let lower = service.ensure_participant("lee").await.unwrap();
        assert_ne!(upper.id, lower.id);
    }

    #[tokio::test]
    async fn test_ensure_participant_rejects_blank_name() {
        let (service, repo) = service();
        assert!(service.ensure_participant("  ").await.is_err());
        assert!(repo.participants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_participants_is_alphabetical() {
        let (service, _) = service();
        for name in ["Yuna", "Bora", "Hana"] {
            service.ensure_participant(name).await.unwrap();
        }
        let names: Vec<String> = service
            .get_participants()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Bora", "Hana", "Yuna"]);
    }
}
