pub mod admin;
pub mod content;
pub mod enums;
pub mod payments;
pub mod plans;
pub mod subscriptions;
pub mod users;
