use std::sync::Arc;

use anyhow::Result;
use axum::async_trait;
use chrono::Utc;

use crate::{
    domain::{
        entities::{
            payments::{InsertPaymentEntity, PaymentEntity},
            subscriptions::InsertSubscriptionEntity,
        },
        repositories::payments::PaymentRepository,
        value_objects::enums::payment_statuses::PaymentStatus,
    },
    infrastructure::jsonfile::store::JsonFileStore,
};

pub struct PaymentJsonFile {
    store: Arc<JsonFileStore>,
}

impl PaymentJsonFile {
    pub fn new(store: Arc<JsonFileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentRepository for PaymentJsonFile {
    async fn insert_payment(&self, new_payment: InsertPaymentEntity) -> Result<PaymentEntity> {
        self.store
            .mutate(|document| {
                let payment = PaymentEntity {
                    id: document.next_payment_id(),
                    user_id: new_payment.user_id,
                    plan_key: new_payment.plan_key,
                    amount: new_payment.amount,
                    utr: new_payment.utr,
                    payment_ref: new_payment.payment_ref,
                    status: new_payment.status,
                    note: None,
                    submitted_at: Utc::now(),
                    reviewed_by: None,
                    reviewed_at: None,
                };
                document.payments.push(payment.clone());

                payment
            })
            .await
    }

    async fn find_payment_by_id(&self, payment_id: i64) -> Result<Option<PaymentEntity>> {
        let payment = self
            .store
            .read(|document| {
                document
                    .payments
                    .iter()
                    .find(|payment| payment.id == payment_id)
                    .cloned()
            })
            .await;

        Ok(payment)
    }

    async fn list_payments_by_user(&self, user_id: i64) -> Result<Vec<PaymentEntity>> {
        let mut payments = self
            .store
            .read(|document| {
                document
                    .payments
                    .iter()
                    .filter(|payment| payment.user_id == user_id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        payments.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(payments)
    }

    async fn list_all_payments(&self) -> Result<Vec<PaymentEntity>> {
        let mut payments = self.store.read(|document| document.payments.clone()).await;
        payments.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(payments)
    }

    async fn approve_pending_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
        subscription: InsertSubscriptionEntity,
    ) -> Result<Option<PaymentEntity>> {
        // The status flip and the activation commit in the same store write;
        // a reviewer racing this call finds the payment no longer pending.
        self.store
            .mutate(|document| {
                let payment = document
                    .payments
                    .iter_mut()
                    .find(|payment| payment.id == payment_id)?;
                if payment.status != PaymentStatus::Pending.to_string() {
                    return None;
                }

                payment.status = PaymentStatus::Approved.to_string();
                payment.reviewed_by = Some(reviewer_id);
                payment.reviewed_at = Some(Utc::now());
                let payment = payment.clone();

                document.activate_subscription(subscription);

                Some(payment)
            })
            .await
    }

    async fn decline_pending_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
        note: Option<String>,
    ) -> Result<Option<PaymentEntity>> {
        self.store
            .mutate(|document| {
                let payment = document
                    .payments
                    .iter_mut()
                    .find(|payment| payment.id == payment_id)?;
                if payment.status != PaymentStatus::Pending.to_string() {
                    return None;
                }

                payment.status = PaymentStatus::Declined.to_string();
                payment.note = note;
                payment.reviewed_by = Some(reviewer_id);
                payment.reviewed_at = Some(Utc::now());

                Some(payment.clone())
            })
            .await
    }

    async fn count_payments(&self) -> Result<i64> {
        let count = self.store.read(|document| document.payments.len()).await;

        Ok(count as i64)
    }

    async fn sum_approved_amounts(&self) -> Result<i64> {
        let revenue = self
            .store
            .read(|document| {
                document
                    .payments
                    .iter()
                    .filter(|payment| payment.status == PaymentStatus::Approved.to_string())
                    .map(|payment| payment.amount)
                    .sum()
            })
            .await;

        Ok(revenue)
    }
}
