use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{
    payments::{InsertPaymentEntity, PaymentEntity},
    subscriptions::InsertSubscriptionEntity,
};

#[async_trait]
#[automock]
pub trait PaymentRepository {
    async fn insert_payment(&self, new_payment: InsertPaymentEntity) -> Result<PaymentEntity>;

    async fn find_payment_by_id(&self, payment_id: i64) -> Result<Option<PaymentEntity>>;

    async fn list_payments_by_user(&self, user_id: i64) -> Result<Vec<PaymentEntity>>;

    async fn list_all_payments(&self) -> Result<Vec<PaymentEntity>>;

    /// Flips a pending payment to approved and activates the subscription in
    /// one storage commit. Returns `None` when the payment is no longer
    /// pending, in which case nothing is written.
    async fn approve_pending_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
        subscription: InsertSubscriptionEntity,
    ) -> Result<Option<PaymentEntity>>;

    /// Flips a pending payment to declined. Returns `None` when the payment
    /// is no longer pending, in which case nothing is written.
    async fn decline_pending_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
        note: Option<String>,
    ) -> Result<Option<PaymentEntity>>;

    async fn count_payments(&self) -> Result<i64>;

    async fn sum_approved_amounts(&self) -> Result<i64>;
}
