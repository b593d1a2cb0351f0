use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::content::{ContentEntity, InsertContentEntity, UpdateContentEntity},
    value_objects::enums::content_sections::ContentSection,
};

#[async_trait]
#[automock]
pub trait ContentRepository {
    async fn insert_content(&self, new_content: InsertContentEntity) -> Result<ContentEntity>;

    async fn list_content_by_section(
        &self,
        section: ContentSection,
        published_only: bool,
    ) -> Result<Vec<ContentEntity>>;

    async fn update_content(
        &self,
        content_id: i64,
        update: UpdateContentEntity,
    ) -> Result<Option<ContentEntity>>;

    async fn delete_content(&self, content_id: i64) -> Result<bool>;

    async fn count_content_by_section(&self, section: ContentSection) -> Result<i64>;

    async fn count_content(&self) -> Result<i64>;
}
