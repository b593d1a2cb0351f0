use anyhow::Context;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Utc};
use cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::config_loader;
use crate::domain::entities::users::UserEntity;
use crate::domain::value_objects::enums::user_roles::UserRole;

pub const SESSION_COOKIE: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Wraps an authenticated user whose role has been checked to be admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[derive(Debug)]
pub struct AuthError(anyhow::Error);

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError(err)
    }
}

// Tell axum how to convert `AuthError` into a response.
impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            format!("Unauthorized: {}", self.0),
        )
            .into_response()
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow::anyhow!("Failed to hash password: {}", err))?;

    Ok(password_hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

pub fn issue_session_token(user: &UserEntity) -> anyhow::Result<String> {
    let session_secret = config_loader::get_session_secret()?;

    let expires_at = Utc::now()
        .checked_add_signed(Duration::days(session_secret.token_ttl_days))
        .context("failed to compute session expiry")?;

    let claims = SessionClaims {
        sub: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(session_secret.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_session_token(token: &str) -> Result<SessionClaims, AuthError> {
    let session_secret = config_loader::get_session_secret()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let decoding_key = DecodingKey::from_secret(session_secret.secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("Session token validation failed: {}", e))?;

    Ok(token_data.claims)
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

// Removal only matches when the name and path agree with the original cookie.
pub fn remove_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1. Get the session cookie
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing session cookie".to_string(),
            ))?;

        // 2. Validate JWT
        let claims = validate_session_token(&token)
            .map_err(|e| (StatusCode::UNAUTHORIZED, e.0.to_string()))?;

        // 3. Parse sub to i64
        let user_id: i64 = claims.sub.parse().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID in token".to_string(),
            )
        })?;

        // 4. Return AuthUser
        Ok(AuthUser {
            user_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if auth_user.role != UserRole::Admin.to_string() {
            return Err((StatusCode::FORBIDDEN, "Admin only".to_string()));
        }

        Ok(AdminUser(auth_user))
    }
}
