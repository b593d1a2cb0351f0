use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use tracing::error;

use crate::{
    application::usecases::{
        admin::AdminUseCase, content::ContentUseCase, payments::PaymentUseCase,
    },
    auth::AdminUser,
    domain::{
        repositories::{
            content::ContentRepository, payments::PaymentRepository,
            subscriptions::SubscriptionRepository, users::UserRepository,
        },
        value_objects::{
            content::{InsertContentModel, UpdateContentModel},
            enums::content_sections::ContentSection,
            payments::DeclinePaymentModel,
        },
    },
    infrastructure::{
        axum_http::error_responses,
        jsonfile::{
            repositories::{
                content::ContentJsonFile, payments::PaymentJsonFile,
                subscriptions::SubscriptionJsonFile, users::UserJsonFile,
            },
            store::JsonFileStore,
        },
    },
};

#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    section: String,
}

pub fn routes(store: Arc<JsonFileStore>) -> Router {
    let admin_usecase = AdminUseCase::new(
        Arc::new(UserJsonFile::new(Arc::clone(&store))),
        Arc::new(PaymentJsonFile::new(Arc::clone(&store))),
        Arc::new(SubscriptionJsonFile::new(Arc::clone(&store))),
        Arc::new(ContentJsonFile::new(Arc::clone(&store))),
    );
    let payment_usecase = PaymentUseCase::new(Arc::new(PaymentJsonFile::new(Arc::clone(&store))));
    let content_usecase = ContentUseCase::new(Arc::new(ContentJsonFile::new(Arc::clone(&store))));

    let overview_routes = Router::new()
        .route("/overview", get(overview))
        .route("/users", get(list_users))
        .route("/payments", get(list_all_payments))
        .with_state(Arc::new(admin_usecase));

    let review_routes = Router::new()
        .route("/payments/:id/approve", post(approve_payment))
        .route("/payments/:id/decline", post(decline_payment))
        .with_state(Arc::new(payment_usecase));

    let content_routes = Router::new()
        .route("/content", get(list_section_content).post(create_content))
        .route("/content/:id", patch(update_content).delete(delete_content))
        .with_state(Arc::new(content_usecase));

    overview_routes.merge(review_routes).merge(content_routes)
}

pub async fn overview<U, P, S, C>(
    State(admin_usecase): State<Arc<AdminUseCase<U, P, S, C>>>,
    AdminUser(admin): AdminUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    match admin_usecase.overview().await {
        Ok(overview) => Json(overview).into_response(),
        Err(err) => {
            error!(admin_id = admin.user_id, error = ?err, "admin router: overview failed");
            error_responses::error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn list_users<U, P, S, C>(
    State(admin_usecase): State<Arc<AdminUseCase<U, P, S, C>>>,
    AdminUser(admin): AdminUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    match admin_usecase.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => {
            error!(admin_id = admin.user_id, error = ?err, "admin router: user listing failed");
            error_responses::error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn list_all_payments<U, P, S, C>(
    State(admin_usecase): State<Arc<AdminUseCase<U, P, S, C>>>,
    AdminUser(admin): AdminUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    match admin_usecase.list_all_payments().await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            error!(admin_id = admin.user_id, error = ?err, "admin router: payment listing failed");
            error_responses::error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn approve_payment<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    AdminUser(admin): AdminUser,
    Path(payment_id): Path<i64>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    match payment_usecase.approve_payment(payment_id, admin.user_id).await {
        Ok(payment) => Json(payment).into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn decline_payment<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    AdminUser(admin): AdminUser,
    Path(payment_id): Path<i64>,
    Json(decline_model): Json<DeclinePaymentModel>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    match payment_usecase
        .decline_payment(payment_id, admin.user_id, decline_model.note)
        .await
    {
        Ok(payment) => Json(payment).into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn list_section_content<C>(
    State(content_usecase): State<Arc<ContentUseCase<C>>>,
    AdminUser(admin): AdminUser,
    Query(query): Query<SectionQuery>,
) -> impl IntoResponse
where
    C: ContentRepository + Send + Sync + 'static,
{
    let Some(section) = ContentSection::from_str(&query.section) else {
        return error_responses::error_response(
            StatusCode::BAD_REQUEST,
            format!("unknown section: {}", query.section),
        );
    };

    match content_usecase.list_section(section).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            error!(admin_id = admin.user_id, error = ?err, "admin router: content listing failed");
            error_responses::error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn create_content<C>(
    State(content_usecase): State<Arc<ContentUseCase<C>>>,
    AdminUser(_admin): AdminUser,
    Json(insert_model): Json<InsertContentModel>,
) -> impl IntoResponse
where
    C: ContentRepository + Send + Sync + 'static,
{
    match content_usecase.create(insert_model).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn update_content<C>(
    State(content_usecase): State<Arc<ContentUseCase<C>>>,
    AdminUser(_admin): AdminUser,
    Path(content_id): Path<i64>,
    Json(update_model): Json<UpdateContentModel>,
) -> impl IntoResponse
where
    C: ContentRepository + Send + Sync + 'static,
{
    match content_usecase.update(content_id, update_model).await {
        Ok(row) => Json(row).into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn delete_content<C>(
    State(content_usecase): State<Arc<ContentUseCase<C>>>,
    AdminUser(_admin): AdminUser,
    Path(content_id): Path<i64>,
) -> impl IntoResponse
where
    C: ContentRepository + Send + Sync + 'static,
{
    match content_usecase.delete(content_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}
