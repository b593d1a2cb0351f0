use std::sync::Arc;

use anyhow::Result;
use axum::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        entities::subscriptions::SubscriptionEntity,
        repositories::subscriptions::SubscriptionRepository,
    },
    infrastructure::jsonfile::store::JsonFileStore,
};

pub struct SubscriptionJsonFile {
    store: Arc<JsonFileStore>,
}

impl SubscriptionJsonFile {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionJsonFile {
    async fn find_current_active_subscription(
        &self,
        user_id: i64,
    ) -> Result<Option<SubscriptionEntity>> {
        let now = Utc::now();

        let subscription = self
            .store
            .read(|document| {
                document
                    .subscriptions
                    .iter()
                    .filter(|subscription| subscription.user_id == user_id)
                    .filter(|subscription| subscription.is_active_at(now))
                    .max_by_key(|subscription| subscription.ends_at)
                    .cloned()
            })
            .await;

        Ok(subscription)
    }

    async fn count_active_subscriptions(&self) -> Result<i64> {
        let now = Utc::now();

        let count = self
            .store
            .read(|document| {
                document
                    .subscriptions
                    .iter()
                    .filter(|subscription| subscription.is_active_at(now))
                    .count()
            })
            .await;

        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::subscriptions::InsertSubscriptionEntity;
    use chrono::{DateTime, Duration};
    use tempfile::tempdir;

    fn repo_in(dir: &std::path::Path) -> SubscriptionJsonFile {
        let store = Arc::new(JsonFileStore::open(dir.join("data.json")).unwrap());
        SubscriptionJsonFile::new(store)
    }

    async fn activate(
        repo: &SubscriptionJsonFile,
        user_id: i64,
        plan_key: &str,
        ends_at: DateTime<Utc>,
    ) {
        repo.store
            .mutate(|document| {
                document.activate_subscription(InsertSubscriptionEntity {
                    user_id,
                    plan_key: plan_key.to_string(),
                    amount: 29,
                    starts_at: ends_at - Duration::days(7),
                    ends_at,
                })
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn user_without_subscriptions_has_no_current_one() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());

        let current = repo.find_current_active_subscription(7).await.unwrap();
        assert!(current.is_none());
    }

    #[tokio::test]
    async fn current_subscription_belongs_to_the_requested_user() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let now = Utc::now();

        activate(&repo, 7, "weekly", now + Duration::days(7)).await;
        activate(&repo, 8, "monthly", now + Duration::days(30)).await;

        let current = repo
            .find_current_active_subscription(7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.user_id, 7);
        assert_eq!(current.plan_key, "weekly");
    }

    #[tokio::test]
    async fn stale_active_row_past_its_end_is_not_current() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());

        // Status still says active in storage; only the timestamp has passed.
        activate(&repo, 7, "daily", Utc::now() - Duration::hours(1)).await;

        let current = repo.find_current_active_subscription(7).await.unwrap();
        assert!(current.is_none());
        assert_eq!(repo.count_active_subscriptions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn latest_end_wins_when_storage_holds_two_active_rows() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let now = Utc::now();

        // Should not happen under the activation invariant, but reads must
        // tolerate it.
        repo.store
            .mutate(|document| {
                document.activate_subscription(InsertSubscriptionEntity {
                    user_id: 7,
                    plan_key: "weekly".to_string(),
                    amount: 29,
                    starts_at: now,
                    ends_at: now + Duration::days(7),
                });
                for subscription in &mut document.subscriptions {
                    subscription.status = "active".to_string();
                }
                document.activate_subscription(InsertSubscriptionEntity {
                    user_id: 7,
                    plan_key: "monthly".to_string(),
                    amount: 99,
                    starts_at: now,
                    ends_at: now + Duration::days(30),
                });
                for subscription in &mut document.subscriptions {
                    subscription.status = "active".to_string();
                }
            })
            .await
            .unwrap();

        let current = repo
            .find_current_active_subscription(7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.plan_key, "monthly");
    }

    #[tokio::test]
    async fn active_count_spans_users() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let now = Utc::now();

        activate(&repo, 7, "weekly", now + Duration::days(7)).await;
        activate(&repo, 8, "monthly", now + Duration::days(30)).await;
        activate(&repo, 9, "daily", now - Duration::hours(1)).await;

        assert_eq!(repo.count_active_subscriptions().await.unwrap(), 2);
    }
}
