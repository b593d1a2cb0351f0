use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        UserModel {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// Session-facing view of a user. Never exposes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfileModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UserEntity> for UserProfileModel {
    fn from(entity: UserEntity) -> Self {
        UserProfileModel {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserModel {
    pub email: String,
    pub password: String,
}
