pub mod document;
pub mod repositories;
pub mod store;
