use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::domain::value_objects::plans::PLAN_CATALOG;

pub fn routes() -> Router {
    Router::new().route("/", get(list_plans))
}

// The catalog is static configuration, so no repository sits behind this.
pub async fn list_plans() -> impl IntoResponse {
    Json(PLAN_CATALOG).into_response()
}
