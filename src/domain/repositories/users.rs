use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::users::{InsertUserEntity, UserEntity};

#[async_trait]
#[automock]
pub trait UserRepository {
    /// Returns `None` when the email is already taken (case-insensitive).
    async fn insert_user(&self, new_user: InsertUserEntity) -> Result<Option<UserEntity>>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>>;

    async fn list_users(&self) -> Result<Vec<UserEntity>>;

    async fn count_users(&self) -> Result<i64>;
}
