pub mod content_sections;
pub mod content_statuses;
pub mod payment_statuses;
pub mod plan_keys;
pub mod subscription_statuses;
pub mod user_roles;
