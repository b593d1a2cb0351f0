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
    application::usecases::access::AccessUseCase,
    auth::AuthUser,
    domain::{
        repositories::subscriptions::SubscriptionRepository,
        value_objects::enums::content_sections::ContentSection,
    },
    infrastructure::{
        axum_http::error_responses,
        jsonfile::{repositories::subscriptions::SubscriptionJsonFile, store::JsonFileStore},
    },
};

pub fn routes(store: Arc<JsonFileStore>) -> Router {
    let subscription_repository = SubscriptionJsonFile::new(Arc::clone(&store));
    let access_usecase = AccessUseCase::new(Arc::new(subscription_repository));

    Router::new()
        .route("/", get(current_subscription))
        .route("/:section", get(evaluate_section_access))
        .with_state(Arc::new(access_usecase))
}

pub async fn evaluate_section_access<S>(
    State(access_usecase): State<Arc<AccessUseCase<S>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(section): Path<String>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    // Unknown sections are a caller error, never evaluated.
    let Some(section) = ContentSection::from_str(&section) else {
        return error_responses::error_response(
            StatusCode::BAD_REQUEST,
            format!("unknown section: {}", section),
        );
    };

    match access_usecase.evaluate(user_id, section).await {
        Ok(decision) => Json(decision).into_response(),
        Err(err) => {
            error!(%user_id, %section, error = ?err, "access router: evaluation failed");
            error_responses::error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn current_subscription<S>(
    State(access_usecase): State<Arc<AccessUseCase<S>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
{
    match access_usecase.current_subscription(user_id).await {
        Ok(subscription) => Json(subscription).into_response(),
        Err(err) => {
            error!(%user_id, error = ?err, "access router: failed to load subscription");
            error_responses::error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
