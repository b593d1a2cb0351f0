use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntity {
    pub id: i64,
    pub section: String,
    pub title: String,
    pub description: String,
    pub meta: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertContentEntity {
    pub section: String,
    pub title: String,
    pub description: String,
    pub meta: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContentEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta: Option<String>,
    pub status: Option<String>,
}
