use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::subscriptions::SubscriptionEntity;

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    /// The one subscription currently granting access, if any. When storage
    /// holds several candidates the one with the latest `ends_at` wins.
    async fn find_current_active_subscription(
        &self,
        user_id: i64,
    ) -> Result<Option<SubscriptionEntity>>;

    async fn count_active_subscriptions(&self) -> Result<i64>;
}
