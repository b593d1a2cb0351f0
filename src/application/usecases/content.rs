use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::content::ContentEntity,
    repositories::content::ContentRepository,
    value_objects::{
        content::{InsertContentModel, UpdateContentModel},
        enums::content_sections::ContentSection,
    },
};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("content row not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ContentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ContentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ContentError::NotFound => StatusCode::NOT_FOUND,
            ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ContentError>;

pub struct ContentUseCase<C>
where
    C: ContentRepository + Send + Sync + 'static,
{
    content_repo: Arc<C>,
}

impl<C> ContentUseCase<C>
where
    C: ContentRepository + Send + Sync + 'static,
{
    pub fn new(content_repo: Arc<C>) -> Self {
        Self { content_repo }
    }

    pub async fn list_published(&self, section: ContentSection) -> UseCaseResult<Vec<ContentEntity>> {
        let rows = self
            .content_repo
            .list_content_by_section(section, true)
            .await
            .map_err(|err| {
                error!(%section, db_error = ?err, "content: failed to list published rows");
                ContentError::Internal(err)
            })?;
        Ok(rows)
    }

    pub async fn list_section(&self, section: ContentSection) -> UseCaseResult<Vec<ContentEntity>> {
        let rows = self
            .content_repo
            .list_content_by_section(section, false)
            .await
            .map_err(|err| {
                error!(%section, db_error = ?err, "content: failed to list section rows");
                ContentError::Internal(err)
            })?;
        Ok(rows)
    }

    pub async fn create(&self, insert_model: InsertContentModel) -> UseCaseResult<ContentEntity> {
        if insert_model.title.trim().is_empty() || insert_model.description.trim().is_empty() {
            let err =
                ContentError::InvalidInput("title and description are required".to_string());
            warn!(
                section = %insert_model.section,
                status = err.status_code().as_u16(),
                "content: create with missing fields"
            );
            return Err(err);
        }

        let row = self
            .content_repo
            .insert_content(insert_model.to_entity())
            .await
            .map_err(|err| {
                error!(
                    section = %insert_model.section,
                    db_error = ?err,
                    "content: failed to insert row"
                );
                ContentError::Internal(err)
            })?;

        info!(section = %insert_model.section, content_id = row.id, "content: row created");
        Ok(row)
    }

    pub async fn update(
        &self,
        content_id: i64,
        update_model: UpdateContentModel,
    ) -> UseCaseResult<ContentEntity> {
        let blank_title = update_model
            .title
            .as_ref()
            .is_some_and(|title| title.trim().is_empty());
        let blank_description = update_model
            .description
            .as_ref()
            .is_some_and(|description| description.trim().is_empty());
        if blank_title || blank_description {
            let err =
                ContentError::InvalidInput("title and description cannot be blank".to_string());
            warn!(
                content_id,
                status = err.status_code().as_u16(),
                "content: update would blank required fields"
            );
            return Err(err);
        }

        let updated = self
            .content_repo
            .update_content(content_id, update_model.to_entity())
            .await
            .map_err(|err| {
                error!(content_id, db_error = ?err, "content: failed to update row");
                ContentError::Internal(err)
            })?;

        match updated {
            Some(row) => {
                info!(content_id, "content: row updated");
                Ok(row)
            }
            None => {
                let err = ContentError::NotFound;
                warn!(
                    content_id,
                    status = err.status_code().as_u16(),
                    "content: update on unknown row"
                );
                Err(err)
            }
        }
    }

    pub async fn delete(&self, content_id: i64) -> UseCaseResult<()> {
        let deleted = self
            .content_repo
            .delete_content(content_id)
            .await
            .map_err(|err| {
                error!(content_id, db_error = ?err, "content: failed to delete row");
                ContentError::Internal(err)
            })?;

        if !deleted {
            let err = ContentError::NotFound;
            warn!(
                content_id,
                status = err.status_code().as_u16(),
                "content: delete on unknown row"
            );
            return Err(err);
        }

        info!(content_id, "content: row deleted");
        Ok(())
    }
}
