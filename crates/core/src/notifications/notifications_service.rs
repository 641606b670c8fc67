use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use super::notifications_model::{NewPushSubscription, PushSubscription};
use super::notifications_traits::{PushSubscriptionRepositoryTrait, PushSubscriptionServiceTrait};
use crate::errors::{Error, Result};

pub struct PushSubscriptionService {
    repository: Arc<dyn PushSubscriptionRepositoryTrait>,
    vapid_public_key: Option<String>,
}

impl PushSubscriptionService {
    pub fn new(
        repository: Arc<dyn PushSubscriptionRepositoryTrait>,
        vapid_public_key: Option<String>,
    ) -> Self {
        Self {
            repository,
            vapid_public_key,
        }
    }
}

#[async_trait]
impl PushSubscriptionServiceTrait for PushSubscriptionService {
    fn get_subscriptions(&self) -> Result<Vec<PushSubscription>> {
        self.repository.list()
    }

    async fn subscribe(&self, subscription: NewPushSubscription) -> Result<PushSubscription> {
        subscription.validate()?;
        let now = Utc::now().naive_utc();
        let mut leads = subscription.leads;
        leads.sort_unstable();
        leads.dedup();

        let stored = self
            .repository
            .upsert(PushSubscription {
                endpoint: subscription.endpoint.trim().to_string(),
                p256dh: subscription.p256dh,
                auth: subscription.auth,
                targets: subscription.targets,
                leads,
                user_agent: subscription.user_agent,
                timezone: subscription.timezone,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(
            "Stored push subscription ({} target(s), leads {:?})",
            stored.targets.len(),
            stored.leads
        );
        Ok(stored)
    }

    async fn unsubscribe(&self, endpoint: &str) -> Result<usize> {
        self.repository.delete(endpoint.trim()).await
    }

    fn vapid_public_key(&self) -> Result<String> {
        self.vapid_public_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::NotFound("VAPID public key".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSubscriptionRepository {
        rows: Mutex<Vec<PushSubscription>>,
    }

    #[async_trait]
    impl PushSubscriptionRepositoryTrait for MockSubscriptionRepository {
        fn list(&self) -> Result<Vec<PushSubscription>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn upsert(&self, subscription: PushSubscription) -> Result<PushSubscription> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(existing) = rows.iter_mut().find(|r| r.endpoint == subscription.endpoint) {
                let created_at = existing.created_at;
                *existing = PushSubscription {
                    created_at,
                    ..subscription
                };
                return Ok(existing.clone());
            }
            rows.push(subscription.clone());
            Ok(subscription)
        }

        async fn delete(&self, endpoint: &str) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.endpoint != endpoint);
            Ok(before - rows.len())
        }
    }

    fn input(endpoint: &str, leads: Vec<i32>) -> NewPushSubscription {
        NewPushSubscription {
            endpoint: endpoint.to_string(),
            p256dh: "key".to_string(),
            auth: "secret".to_string(),
            targets: vec!["cal-1".to_string()],
            leads,
            user_agent: Some("test".to_string()),
            timezone: None,
        }
    }

    #[tokio::test]
    async fn test_subscribe_twice_replaces_row() {
        let repo = Arc::new(MockSubscriptionRepository::default());
        let service = PushSubscriptionService::new(repo.clone(), None);
        service.subscribe(input("https://push/1", vec![10])).await.unwrap();
        let second = service
            .subscribe(input("https://push/1", vec![60, 10, 60]))
            .await
            .unwrap();
        assert_eq!(second.leads, vec![10, 60]);
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_subscribe_rejects_missing_keys() {
        let service =
            PushSubscriptionService::new(Arc::new(MockSubscriptionRepository::default()), None);
        let mut bad = input("https://push/1", vec![]);
        bad.auth = " ".to_string();
        assert!(service.subscribe(bad).await.is_err());
        assert!(service.subscribe(input("", vec![])).await.is_err());
        assert!(service.subscribe(input("https://push/2", vec![-5])).await.is_err());
    }

    #[test]
    fn test_vapid_key_missing_is_not_found() {
        let service =
            PushSubscriptionService::new(Arc::new(MockSubscriptionRepository::default()), None);
        assert!(matches!(service.vapid_public_key(), Err(Error::NotFound(_))));

        let service = PushSubscriptionService::new(
            Arc::new(MockSubscriptionRepository::default()),
            Some("BPk".to_string()),
        );
        assert_eq!(service.vapid_public_key().unwrap(), "BPk");
    }
}
