use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::error;

use crate::{
    application::usecases::payments::PaymentUseCase,
    auth::AuthUser,
    domain::{
        repositories::payments::PaymentRepository, value_objects::payments::SubmitPaymentModel,
    },
    infrastructure::{
        axum_http::error_responses,
        jsonfile::{repositories::payments::PaymentJsonFile, store::JsonFileStore},
    },
};

pub fn routes(store: Arc<JsonFileStore>) -> Router {
    let payment_repository = PaymentJsonFile::new(Arc::clone(&store));
    let payment_usecase = PaymentUseCase::new(Arc::new(payment_repository));

    Router::new()
        .route("/", post(submit_payment))
        .route("/", get(list_my_payments))
        .with_state(Arc::new(payment_usecase))
}

pub async fn submit_payment<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(submit_model): Json<SubmitPaymentModel>,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    match payment_usecase
        .submit_payment(user_id, &submit_model.plan_key, &submit_model.utr)
        .await
    {
        Ok(payment) => (StatusCode::CREATED, Json(payment)).into_response(),
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn list_my_payments<P>(
    State(payment_usecase): State<Arc<PaymentUseCase<P>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    P: PaymentRepository + Send + Sync + 'static,
{
    match payment_usecase.list_my_payments(user_id).await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => {
            error!(%user_id, error = ?err, "payments router: failed to list payments");
            error_responses::error_response(err.status_code(), err.to_string())
        }
    }
}
