use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::domain::{
    entities::subscriptions::SubscriptionEntity,
    repositories::subscriptions::SubscriptionRepository,
    value_objects::{enums::content_sections::ContentSection, subscriptions::AccessDecisionModel},
};

/// Decides whether a user may open a gated section right now. Reading a
/// decision never mutates anything, so asking twice gives the same answer.
pub struct AccessUseCase<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
}

impl<S> AccessUseCase<S>
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>) -> Self {
        Self { subscription_repo }
    }

    pub async fn evaluate(
        &self,
        user_id: i64,
        section: ContentSection,
    ) -> Result<AccessDecisionModel> {
        let subscription = self
            .subscription_repo
            .find_current_active_subscription(user_id)
            .await?;

        match subscription.as_ref() {
            Some(subscription) => debug!(
                user_id,
                %section,
                subscription_id = subscription.id,
                "access: allowed by active subscription"
            ),
            None => debug!(user_id, %section, "access: no active subscription"),
        }

        Ok(AccessDecisionModel {
            allowed: subscription.is_some(),
            subscription,
        })
    }

    pub async fn current_subscription(&self, user_id: i64) -> Result<Option<SubscriptionEntity>> {
        self.subscription_repo
            .find_current_active_subscription(user_id)
            .await
    }
}
