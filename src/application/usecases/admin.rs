use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use tracing::info;

use crate::domain::{
    repositories::{
        content::ContentRepository, payments::PaymentRepository,
        subscriptions::SubscriptionRepository, users::UserRepository,
    },
    value_objects::{
        admin::{AdminOverviewModel, ContentCountsModel},
        enums::content_sections::ContentSection,
        payments::PaymentReviewModel,
        users::UserModel,
    },
};

pub struct AdminUseCase<U, P, S, C>
where
    U: UserRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    payment_repo: Arc<P>,
    subscription_repo: Arc<S>,
    content_repo: Arc<C>,
}

impl<U, P, S, C> AdminUseCase<U, P, S, C>
where
    U: UserRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    C: ContentRepository + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        payment_repo: Arc<P>,
        subscription_repo: Arc<S>,
        content_repo: Arc<C>,
    ) -> Self {
        Self {
            user_repo,
            payment_repo,
            subscription_repo,
            content_repo,
        }
    }

    pub async fn overview(&self) -> Result<AdminOverviewModel> {
        info!("admin: building overview");

        let users = self.user_repo.count_users().await?;
        let payments = self.payment_repo.count_payments().await?;
        let revenue = self.payment_repo.sum_approved_amounts().await?;
        let active_subscriptions = self
            .subscription_repo
            .count_active_subscriptions()
            .await?;

        let content = ContentCountsModel {
            courses: self
                .content_repo
                .count_content_by_section(ContentSection::Courses)
                .await?,
            books: self
                .content_repo
                .count_content_by_section(ContentSection::Books)
                .await?,
            pyqs: self
                .content_repo
                .count_content_by_section(ContentSection::Pyqs)
                .await?,
            mock: self
                .content_repo
                .count_content_by_section(ContentSection::Mock)
                .await?,
        };

        Ok(AdminOverviewModel {
            users,
            payments,
            revenue,
            active_subscriptions,
            content,
        })
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>> {
        let users = self.user_repo.list_users().await?;
        Ok(users.into_iter().map(UserModel::from).collect())
    }

    pub async fn list_all_payments(&self) -> Result<Vec<PaymentReviewModel>> {
        let payments = self.payment_repo.list_all_payments().await?;
        let users = self.user_repo.list_users().await?;
        let users_by_id: HashMap<i64, _> = users.iter().map(|user| (user.id, user)).collect();

        let rows = payments
            .into_iter()
            .map(|payment| {
                // Deleted owners still show up in the ledger under a placeholder.
                let (user_name, user_email) = match users_by_id.get(&payment.user_id) {
                    Some(user) => (user.name.clone(), user.email.clone()),
                    None => ("-".to_string(), "-".to_string()),
                };
                PaymentReviewModel::new(payment, user_name, user_email)
            })
            .collect();

        Ok(rows)
    }
}
