use serde::Serialize;

use crate::domain::entities::subscriptions::SubscriptionEntity;

/// Outcome of an access check for one gated section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccessDecisionModel {
    pub allowed: bool,
    pub subscription: Option<SubscriptionEntity>,
}
