use std::sync::Arc;

use anyhow::Result;
use axum::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        entities::content::{ContentEntity, InsertContentEntity, UpdateContentEntity},
        repositories::content::ContentRepository,
        value_objects::enums::{
            content_sections::ContentSection, content_statuses::ContentStatus,
        },
    },
    infrastructure::jsonfile::store::JsonFileStore,
};

pub struct ContentJsonFile {
    store: Arc<JsonFileStore>,
}

impl ContentJsonFile {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContentRepository for ContentJsonFile {
    async fn insert_content(&self, new_content: InsertContentEntity) -> Result<ContentEntity> {
        self.store
            .mutate(|document| {
                let now = Utc::now();
                let row = ContentEntity {
                    id: document.next_content_id(),
                    section: new_content.section,
                    title: new_content.title,
                    description: new_content.description,
                    meta: new_content.meta,
                    status: new_content.status,
                    created_at: now,
                    updated_at: now,
                };
                document.content.push(row.clone());

                row
            })
            .await
    }

    async fn list_content_by_section(
        &self,
        section: ContentSection,
        published_only: bool,
    ) -> Result<Vec<ContentEntity>> {
        let mut rows = self
            .store
            .read(|document| {
                document
                    .content
                    .iter()
                    .filter(|row| row.section == section.to_string())
                    .filter(|row| {
                        !published_only || row.status == ContentStatus::Published.to_string()
                    })
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        rows.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(rows)
    }

    async fn update_content(
        &self,
        content_id: i64,
        update: UpdateContentEntity,
    ) -> Result<Option<ContentEntity>> {
        self.store
            .mutate(|document| {
                let row = document.content.iter_mut().find(|row| row.id == content_id)?;

                if let Some(title) = update.title {
                    row.title = title;
                }
                if let Some(description) = update.description {
                    row.description = description;
                }
                if let Some(meta) = update.meta {
                    row.meta = meta;
                }
                if let Some(status) = update.status {
                    row.status = status;
                }
                row.updated_at = Utc::now();

                Some(row.clone())
            })
            .await
    }

    async fn delete_content(&self, content_id: i64) -> Result<bool> {
        self.store
            .mutate(|document| {
                let before = document.content.len();
                document.content.retain(|row| row.id != content_id);

                document.content.len() < before
            })
            .await
    }

    async fn count_content_by_section(&self, section: ContentSection) -> Result<i64> {
        let count = self
            .store
            .read(|document| {
                document
                    .content
                    .iter()
                    .filter(|row| row.section == section.to_string())
                    .count()
            })
            .await;

        Ok(count as i64)
    }

    async fn count_content(&self) -> Result<i64> {
        let count = self.store.read(|document| document.content.len()).await;

        Ok(count as i64)
    }
}
