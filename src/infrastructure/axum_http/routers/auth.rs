use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::error;

use crate::{
    application::usecases::auth::AuthUseCase,
    auth::{AuthUser, issue_session_token, remove_session_cookie, session_cookie},
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{LoginUserModel, RegisterUserModel, UserProfileModel},
    },
    infrastructure::{
        axum_http::error_responses,
        jsonfile::{repositories::users::UserJsonFile, store::JsonFileStore},
    },
};

pub fn routes(store: Arc<JsonFileStore>) -> Router {
    let user_repository = UserJsonFile::new(Arc::clone(&store));
    let auth_usecase = AuthUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(Arc::new(auth_usecase))
}

pub async fn register<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    jar: CookieJar,
    Json(register_model): Json<RegisterUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.register(register_model).await {
        Ok(user) => match issue_session_token(&user) {
            Ok(token) => {
                let jar = jar.add(session_cookie(token));
                (StatusCode::CREATED, jar, Json(UserProfileModel::from(user))).into_response()
            }
            Err(err) => {
                error!(error = ?err, "auth router: failed to issue session token");
                error_responses::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                )
            }
        },
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn login<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    jar: CookieJar,
    Json(login_model): Json<LoginUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.login(login_model).await {
        Ok(user) => match issue_session_token(&user) {
            Ok(token) => {
                let jar = jar.add(session_cookie(token));
                (StatusCode::OK, jar, Json(UserProfileModel::from(user))).into_response()
            }
            Err(err) => {
                error!(error = ?err, "auth router: failed to issue session token");
                error_responses::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.to_string(),
                )
            }
        },
        Err(err) => error_responses::error_response(err.status_code(), err.to_string()),
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(remove_session_cookie());
    (StatusCode::OK, jar, "Logged out").into_response()
}

pub async fn me(
    AuthUser {
        user_id,
        name,
        email,
        role,
    }: AuthUser,
) -> impl IntoResponse {
    Json(UserProfileModel {
        id: user_id,
        name,
        email,
        role,
    })
    .into_response()
}
