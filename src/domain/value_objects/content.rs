use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::content::{InsertContentEntity, UpdateContentEntity},
    value_objects::enums::{content_sections::ContentSection, content_statuses::ContentStatus},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertContentModel {
    pub section: ContentSection,
    pub title: String,
    pub description: String,
    pub meta: Option<String>,
    pub status: Option<ContentStatus>,
}

impl InsertContentModel {
    pub fn to_entity(&self) -> InsertContentEntity {
        InsertContentEntity {
            section: self.section.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            meta: self.meta.as_deref().unwrap_or_default().trim().to_string(),
            status: self.status.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContentModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta: Option<String>,
    pub status: Option<ContentStatus>,
}

impl UpdateContentModel {
    pub fn to_entity(&self) -> UpdateContentEntity {
        UpdateContentEntity {
            title: self.title.as_ref().map(|title| title.trim().to_string()),
            description: self
                .description
                .as_ref()
                .map(|description| description.trim().to_string()),
            meta: self.meta.as_ref().map(|meta| meta.trim().to_string()),
            status: self.status.as_ref().map(|status| status.to_string()),
        }
    }
}
