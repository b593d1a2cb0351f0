use std::sync::Arc;

use anyhow::Result;
use axum::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        entities::users::{InsertUserEntity, UserEntity},
        repositories::users::UserRepository,
    },
    infrastructure::jsonfile::store::JsonFileStore,
};

pub struct UserJsonFile {
    store: Arc<JsonFileStore>,
}

impl UserJsonFile {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserJsonFile {
    async fn insert_user(&self, new_user: InsertUserEntity) -> Result<Option<UserEntity>> {
        self.store
            .mutate(|document| {
                let email_taken = document
                    .users
                    .iter()
                    .any(|user| user.email.eq_ignore_ascii_case(&new_user.email));
                if email_taken {
                    return None;
                }

                let user = UserEntity {
                    id: document.next_user_id(),
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    role: new_user.role,
                    created_at: Utc::now(),
                };
                document.users.push(user.clone());

                Some(user)
            })
            .await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
        let user = self
            .store
            .read(|document| {
                document
                    .users
                    .iter()
                    .find(|user| user.email.eq_ignore_ascii_case(email))
                    .cloned()
            })
            .await;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserEntity>> {
        let mut users = self.store.read(|document| document.users.clone()).await;
        users.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(users)
    }

    async fn count_users(&self) -> Result<i64> {
        let count = self.store.read(|document| document.users.len()).await;

        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_user(email: &str) -> InsertUserEntity {
        InsertUserEntity {
            name: "Student".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn inserting_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonFileStore::open(dir.path().join("data.json")).unwrap());
        let repo = UserJsonFile::new(store);

        let first = repo.insert_user(new_user("a@example.com")).await.unwrap();
        let second = repo.insert_user(new_user("b@example.com")).await.unwrap();

        assert_eq!(first.unwrap().id, 1);
        assert_eq!(second.unwrap().id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonFileStore::open(dir.path().join("data.json")).unwrap());
        let repo = UserJsonFile::new(store);

        repo.insert_user(new_user("student@example.com"))
            .await
            .unwrap();
        let duplicate = repo
            .insert_user(new_user("Student@Example.COM"))
            .await
            .unwrap();

        assert!(duplicate.is_none());
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn lookup_by_email_ignores_case() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonFileStore::open(dir.path().join("data.json")).unwrap());
        let repo = UserJsonFile::new(store);

        repo.insert_user(new_user("student@example.com"))
            .await
            .unwrap();

        let found = repo
            .find_user_by_email("STUDENT@example.com")
            .await
            .unwrap();
        assert_eq!(found.unwrap().email, "student@example.com");
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonFileStore::open(dir.path().join("data.json")).unwrap());
        let repo = UserJsonFile::new(store);

        repo.insert_user(new_user("a@example.com")).await.unwrap();
        repo.insert_user(new_user("b@example.com")).await.unwrap();

        let users = repo.list_users().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
