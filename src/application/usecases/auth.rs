use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::{hash_password, verify_password};
use crate::domain::{
    entities::users::{InsertUserEntity, UserEntity},
    repositories::users::UserRepository,
    value_objects::{
        enums::user_roles::UserRole,
        users::{LoginUserModel, RegisterUserModel},
    },
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("email is already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

fn is_valid_email(email: &str) -> bool {
    email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false)
}

pub struct AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
}

impl<U> AuthUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn register(&self, register_model: RegisterUserModel) -> UseCaseResult<UserEntity> {
        let name = register_model.name.trim().to_string();
        let email = register_model.email.trim().to_lowercase();
        info!(%email, "auth: register requested");

        if name.is_empty() {
            let err = AuthError::InvalidInput("name is required".to_string());
            warn!(status = err.status_code().as_u16(), "auth: empty name");
            return Err(err);
        }

        if !is_valid_email(&email) {
            let err = AuthError::InvalidInput("a valid email is required".to_string());
            warn!(status = err.status_code().as_u16(), "auth: malformed email");
            return Err(err);
        }

        if register_model.password.len() < 6 {
            let err = AuthError::InvalidInput(
                "password must be at least 6 characters".to_string(),
            );
            warn!(status = err.status_code().as_u16(), "auth: password too short");
            return Err(err);
        }

        let password_hash = hash_password(&register_model.password)?;

        let new_user = InsertUserEntity {
            name,
            email: email.clone(),
            password_hash,
            role: UserRole::User.to_string(),
        };

        let inserted = self
            .user_repo
            .insert_user(new_user)
            .await
            .map_err(|err| {
                error!(%email, db_error = ?err, "auth: failed to insert user");
                AuthError::Internal(err)
            })?;

        match inserted {
            Some(user) => {
                info!(%email, user_id = user.id, "auth: user registered");
                Ok(user)
            }
            None => {
                let err = AuthError::EmailTaken;
                warn!(
                    %email,
                    status = err.status_code().as_u16(),
                    "auth: email already registered"
                );
                Err(err)
            }
        }
    }

    pub async fn login(&self, login_model: LoginUserModel) -> UseCaseResult<UserEntity> {
        let email = login_model.email.trim().to_lowercase();
        info!(%email, "auth: login requested");

        let user = self
            .user_repo
            .find_user_by_email(&email)
            .await
            .map_err(|err| {
                error!(%email, db_error = ?err, "auth: failed to load user");
                AuthError::Internal(err)
            })?;

        // Unknown email and wrong password must be indistinguishable to the caller.
        let user = match user {
            Some(user) => user,
            None => {
                let err = AuthError::InvalidCredentials;
                warn!(
                    %email,
                    status = err.status_code().as_u16(),
                    "auth: login with unknown email"
                );
                return Err(err);
            }
        };

        if !verify_password(&login_model.password, &user.password_hash) {
            let err = AuthError::InvalidCredentials;
            warn!(
                %email,
                status = err.status_code().as_u16(),
                "auth: login with wrong password"
            );
            return Err(err);
        }

        info!(%email, user_id = user.id, "auth: login succeeded");
        Ok(user)
    }
}
