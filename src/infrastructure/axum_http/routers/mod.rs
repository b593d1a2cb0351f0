pub mod access;
pub mod admin;
pub mod auth;
pub mod content;
pub mod payments;
pub mod plans;
