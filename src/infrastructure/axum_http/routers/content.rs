use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::{
    application::usecases::content::ContentUseCase,
    domain::{
        repositories::content::ContentRepository,
        value_objects::enums::content_sections::ContentSection,
    },
    infrastructure::{
        axum_http::error_responses,
        jsonfile::{repositories::content::ContentJsonFile, store::JsonFileStore},
    },
};

pub fn routes(store: Arc<JsonFileStore>) -> Router {
    let content_repository = ContentJsonFile::new(Arc::clone(&store));
    let content_usecase = ContentUseCase::new(Arc::new(content_repository));

    Router::new()
        .route("/:section", get(list_published_content))
        .with_state(Arc::new(content_usecase))
}

pub async fn list_published_content<C>(
    State(content_usecase): State<Arc<ContentUseCase<C>>>,
    Path(section): Path<String>,
) -> impl IntoResponse
where
    C: ContentRepository + Send + Sync + 'static,
{
    let Some(section) = ContentSection::from_str(&section) else {
        return error_responses::error_response(
            StatusCode::BAD_REQUEST,
            format!("unknown section: {}", section),
        );
    };

    match content_usecase.list_published(section).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            error!(%section, error = ?err, "content router: failed to list published rows");
            error_responses::error_response(err.status_code(), err.to_string())
        }
    }
}
