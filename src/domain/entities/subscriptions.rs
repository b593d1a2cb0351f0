use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionEntity {
    pub id: i64,
    pub user_id: i64,
    pub plan_key: String,
    pub amount: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl SubscriptionEntity {
    /// A subscription only grants access while `now` is strictly before `ends_at`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status == SubscriptionStatus::Active.to_string() && now < self.ends_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSubscriptionEntity {
    pub user_id: i64,
    pub plan_key: String,
    pub amount: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_subscription(ends_at: DateTime<Utc>, status: SubscriptionStatus) -> SubscriptionEntity {
        SubscriptionEntity {
            id: 1,
            user_id: 7,
            plan_key: "weekly".to_string(),
            amount: 29,
            starts_at: ends_at - Duration::days(7),
            ends_at,
            status: status.to_string(),
            created_at: ends_at - Duration::days(7),
        }
    }

    #[test]
    fn test_is_active_before_ends_at() {
        let now = Utc::now();
        let subscription = sample_subscription(now + Duration::hours(1), SubscriptionStatus::Active);

        assert!(subscription.is_active_at(now));
    }

    #[test]
    fn test_is_not_active_at_exact_ends_at() {
        let now = Utc::now();
        let subscription = sample_subscription(now, SubscriptionStatus::Active);

        assert!(!subscription.is_active_at(now));
    }

    #[test]
    fn test_expired_status_is_never_active() {
        let now = Utc::now();
        let subscription = sample_subscription(now + Duration::hours(1), SubscriptionStatus::Expired);

        assert!(!subscription.is_active_at(now));
    }
}
