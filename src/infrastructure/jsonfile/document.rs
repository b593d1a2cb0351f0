use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        content::ContentEntity,
        payments::PaymentEntity,
        subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
        users::UserEntity,
    },
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

/// Everything the site stores, serialized as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<UserEntity>,

    #[serde(default)]
    pub payments: Vec<PaymentEntity>,

    #[serde(default)]
    pub subscriptions: Vec<SubscriptionEntity>,

    #[serde(default)]
    pub content: Vec<ContentEntity>,
}

impl Document {
    pub fn next_user_id(&self) -> i64 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }

    pub fn next_payment_id(&self) -> i64 {
        self.payments.iter().map(|payment| payment.id).max().unwrap_or(0) + 1
    }

    pub fn next_subscription_id(&self) -> i64 {
        self.subscriptions
            .iter()
            .map(|subscription| subscription.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn next_content_id(&self) -> i64 {
        self.content.iter().map(|row| row.id).max().unwrap_or(0) + 1
    }

    /// Expires every active subscription of the owner before pushing the new
    /// row. At most one subscription per user is active in storage.
    pub fn activate_subscription(
        &mut self,
        new_subscription: InsertSubscriptionEntity,
    ) -> SubscriptionEntity {
        for subscription in &mut self.subscriptions {
            if subscription.user_id == new_subscription.user_id
                && subscription.status == SubscriptionStatus::Active.to_string()
            {
                subscription.status = SubscriptionStatus::Expired.to_string();
            }
        }

        let subscription = SubscriptionEntity {
            id: self.next_subscription_id(),
            user_id: new_subscription.user_id,
            plan_key: new_subscription.plan_key,
            amount: new_subscription.amount,
            starts_at: new_subscription.starts_at,
            ends_at: new_subscription.ends_at,
            status: SubscriptionStatus::Active.to_string(),
            created_at: Utc::now(),
        };
        self.subscriptions.push(subscription.clone());

        subscription
    }
}
