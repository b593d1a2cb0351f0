use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::auth::hash_password;
use crate::config::config_model::AdminSeed;
use crate::domain::{
    entities::{content::InsertContentEntity, users::InsertUserEntity},
    repositories::{content::ContentRepository, users::UserRepository},
    value_objects::enums::{
        content_sections::ContentSection, content_statuses::ContentStatus, user_roles::UserRole,
    },
};

/// Startup seeding: one admin account and a starter content catalog.
/// Both steps are no-ops on an already populated store.
pub struct SeedUseCase<U, C>
where
    U: UserRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    content_repo: Arc<C>,
}

impl<U, C> SeedUseCase<U, C>
where
    U: UserRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, content_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            content_repo,
        }
    }

    pub async fn run(&self, admin_seed: &AdminSeed) -> Result<()> {
        self.ensure_admin_user(admin_seed).await?;
        self.ensure_default_content().await?;
        Ok(())
    }

    async fn ensure_admin_user(&self, admin_seed: &AdminSeed) -> Result<()> {
        let email = admin_seed.email.trim().to_lowercase();

        if self.user_repo.find_user_by_email(&email).await?.is_some() {
            info!(%email, "seed: admin user already present");
            return Ok(());
        }

        let password_hash = hash_password(&admin_seed.password)?;
        self.user_repo
            .insert_user(InsertUserEntity {
                name: "Admin".to_string(),
                email: email.clone(),
                password_hash,
                role: UserRole::Admin.to_string(),
            })
            .await?;

        info!(%email, "seed: admin user created");
        Ok(())
    }

    async fn ensure_default_content(&self) -> Result<()> {
        if self.content_repo.count_content().await? > 0 {
            return Ok(());
        }

        let rows = default_content();
        let row_count = rows.len();
        for row in rows {
            self.content_repo.insert_content(row).await?;
        }

        info!(row_count, "seed: default content rows created");
        Ok(())
    }
}

fn seed_row(
    section: ContentSection,
    title: &str,
    description: &str,
    meta: &str,
) -> InsertContentEntity {
    InsertContentEntity {
        section: section.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        meta: meta.to_string(),
        status: ContentStatus::Published.to_string(),
    }
}

fn default_content() -> Vec<InsertContentEntity> {
    vec![
        seed_row(
            ContentSection::Courses,
            "Course batches launching soon",
            "Free batches of institutes coming soon.",
            "JEE & NEET",
        ),
        seed_row(
            ContentSection::Books,
            "Physics Notes",
            "Concept summaries and solved examples.",
            "Download / View",
        ),
        seed_row(
            ContentSection::Books,
            "Chemistry Notes",
            "Physical, organic and inorganic quick revision.",
            "Download / View",
        ),
        seed_row(
            ContentSection::Books,
            "Biology Notes",
            "Chapter-wise essentials and diagrams.",
            "Download / View",
        ),
        seed_row(
            ContentSection::Pyqs,
            "JEE Main PYQs",
            "Questions grouped by year and subject",
            "Year-wise + Topic-wise",
        ),
        seed_row(
            ContentSection::Pyqs,
            "JEE Advanced PYQs",
            "High-level previous year question sets",
            "Advanced pattern sets",
        ),
        seed_row(
            ContentSection::Pyqs,
            "NEET PYQs",
            "Medical entrance PYQ practice library",
            "Year-wise collection",
        ),
        seed_row(
            ContentSection::Mock,
            "JEE Main Full-Length",
            "Repeated PYQ pattern simulation",
            "Questions: 90 | Duration: 180 mins",
        ),
        seed_row(
            ContentSection::Mock,
            "NEET Full-Length",
            "Repeated PYQ pattern simulation",
            "Questions: 200 | Duration: 200 mins",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{content::ContentEntity, users::UserEntity},
        repositories::{content::MockContentRepository, users::MockUserRepository},
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn admin_seed() -> AdminSeed {
        AdminSeed {
            email: "Admin@StudyPro.local".to_string(),
            password: "Admin@123".to_string(),
        }
    }

    fn existing_admin() -> UserEntity {
        UserEntity {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@studypro.local".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin.to_string(),
            created_at: Utc::now(),
        }
    }

    fn echo_inserted_content(new_content: InsertContentEntity) -> ContentEntity {
        ContentEntity {
            id: 1,
            section: new_content.section,
            title: new_content.title,
            description: new_content.description,
            meta: new_content.meta,
            status: new_content.status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn seeds_admin_user_when_absent() {
        let mut user_repo = MockUserRepository::new();
        let mut content_repo = MockContentRepository::new();

        user_repo
            .expect_find_user_by_email()
            .with(eq("admin@studypro.local"))
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repo
            .expect_insert_user()
            .withf(|new_user| {
                new_user.name == "Admin"
                    && new_user.email == "admin@studypro.local"
                    && new_user.role == "admin"
            })
            .returning(|_| Box::pin(async { Ok(Some(existing_admin())) }));
        content_repo
            .expect_count_content()
            .returning(|| Box::pin(async { Ok(9) }));

        let usecase = SeedUseCase::new(Arc::new(user_repo), Arc::new(content_repo));
        usecase.run(&admin_seed()).await.unwrap();
    }

    #[tokio::test]
    async fn skips_admin_seed_when_already_present() {
        let mut user_repo = MockUserRepository::new();
        let mut content_repo = MockContentRepository::new();

        user_repo
            .expect_find_user_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_admin())) }));
        user_repo.expect_insert_user().times(0);
        content_repo
            .expect_count_content()
            .returning(|| Box::pin(async { Ok(9) }));

        let usecase = SeedUseCase::new(Arc::new(user_repo), Arc::new(content_repo));
        usecase.run(&admin_seed()).await.unwrap();
    }

    #[tokio::test]
    async fn seeds_nine_content_rows_into_an_empty_store() {
        let mut user_repo = MockUserRepository::new();
        let mut content_repo = MockContentRepository::new();

        user_repo
            .expect_find_user_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_admin())) }));
        content_repo
            .expect_count_content()
            .returning(|| Box::pin(async { Ok(0) }));
        content_repo
            .expect_insert_content()
            .times(9)
            .returning(|new_content| {
                Box::pin(async move { Ok(echo_inserted_content(new_content)) })
            });

        let usecase = SeedUseCase::new(Arc::new(user_repo), Arc::new(content_repo));
        usecase.run(&admin_seed()).await.unwrap();
    }

    #[tokio::test]
    async fn skips_content_seed_when_rows_exist() {
        let mut user_repo = MockUserRepository::new();
        let mut content_repo = MockContentRepository::new();

        user_repo
            .expect_find_user_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_admin())) }));
        content_repo
            .expect_count_content()
            .returning(|| Box::pin(async { Ok(9) }));
        content_repo.expect_insert_content().times(0);

        let usecase = SeedUseCase::new(Arc::new(user_repo), Arc::new(content_repo));
        usecase.run(&admin_seed()).await.unwrap();
    }

    #[test]
    fn default_catalog_covers_every_section() {
        let rows = default_content();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows.iter().filter(|row| row.section == "courses").count(), 1);
        assert_eq!(rows.iter().filter(|row| row.section == "books").count(), 3);
        assert_eq!(rows.iter().filter(|row| row.section == "pyqs").count(), 3);
        assert_eq!(rows.iter().filter(|row| row.section == "mock").count(), 2);
        assert!(rows.iter().all(|row| row.status == "published"));
    }
}
