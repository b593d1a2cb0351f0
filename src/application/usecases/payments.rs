use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::{
        payments::{InsertPaymentEntity, PaymentEntity},
        subscriptions::InsertSubscriptionEntity,
    },
    repositories::payments::PaymentRepository,
    value_objects::{
        enums::{payment_statuses::PaymentStatus, plan_keys::PlanKey},
        plans,
    },
};

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("plan not found")]
    InvalidPlan,
    #[error("reference code must be 6-40 characters of letters, digits or dashes")]
    InvalidReference,
    #[error("payment not found")]
    NotFound,
    #[error("only pending payments can be reviewed")]
    InvalidState,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PaymentError::InvalidPlan | PaymentError::InvalidReference => StatusCode::BAD_REQUEST,
            PaymentError::NotFound => StatusCode::NOT_FOUND,
            PaymentError::InvalidState => StatusCode::CONFLICT,
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PaymentError>;

// User-supplied reference codes are bank UTR style strings.
fn is_valid_reference(utr: &str) -> bool {
    (6..=40).contains(&utr.len())
        && utr
            .bytes()
            .all(|b| matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-'))
}

fn generate_payment_ref() -> String {
    let suffix = rand::thread_rng().gen_range(0..10_000);
    format!("REQ-{}-{}", Utc::now().timestamp_millis(), suffix)
}

pub struct PaymentUseCase<P>
where
    P: PaymentRepository + Send + Sync + 'static,
{
    payment_repo: Arc<P>,
}

impl<P> PaymentUseCase<P>
where
    P: PaymentRepository + Send + Sync + 'static,
{
    pub fn new(payment_repo: Arc<P>) -> Self {
        Self { payment_repo }
    }

    pub async fn submit_payment(
        &self,
        user_id: i64,
        plan_key: &str,
        utr: &str,
    ) -> UseCaseResult<PaymentEntity> {
        info!(user_id, plan_key, "payments: submit requested");

        let plan = match PlanKey::from_str(plan_key.trim()) {
            Some(key) => plans::resolve_plan(key),
            None => {
                let err = PaymentError::InvalidPlan;
                warn!(
                    user_id,
                    plan_key,
                    status = err.status_code().as_u16(),
                    "payments: unknown plan key"
                );
                return Err(err);
            }
        };

        let utr = utr.trim();
        if !is_valid_reference(utr) {
            let err = PaymentError::InvalidReference;
            warn!(
                user_id,
                status = err.status_code().as_u16(),
                "payments: malformed reference code"
            );
            return Err(err);
        }

        let new_payment = InsertPaymentEntity {
            user_id,
            plan_key: plan.key.to_string(),
            amount: plan.amount,
            utr: utr.to_string(),
            payment_ref: generate_payment_ref(),
            status: PaymentStatus::Pending.to_string(),
        };

        let payment = self
            .payment_repo
            .insert_payment(new_payment)
            .await
            .map_err(|err| {
                error!(user_id, db_error = ?err, "payments: failed to insert payment");
                PaymentError::Internal(err)
            })?;

        info!(
            user_id,
            payment_id = payment.id,
            payment_ref = %payment.payment_ref,
            "payments: submitted for review"
        );
        Ok(payment)
    }

    pub async fn list_my_payments(&self, user_id: i64) -> UseCaseResult<Vec<PaymentEntity>> {
        info!(user_id, "payments: listing payment history");
        let payments = self
            .payment_repo
            .list_payments_by_user(user_id)
            .await
            .map_err(|err| {
                error!(user_id, db_error = ?err, "payments: failed to list payments");
                PaymentError::Internal(err)
            })?;
        Ok(payments)
    }

    pub async fn approve_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
    ) -> UseCaseResult<PaymentEntity> {
        info!(payment_id, reviewer_id, "payments: approve requested");

        let payment = self
            .payment_repo
            .find_payment_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(payment_id, db_error = ?err, "payments: failed to load payment");
                PaymentError::Internal(err)
            })?;

        let payment = match payment {
            Some(payment) => payment,
            None => {
                let err = PaymentError::NotFound;
                warn!(
                    payment_id,
                    status = err.status_code().as_u16(),
                    "payments: approve on unknown payment"
                );
                return Err(err);
            }
        };

        if payment.status != PaymentStatus::Pending.to_string() {
            let err = PaymentError::InvalidState;
            warn!(
                payment_id,
                payment_status = %payment.status,
                status = err.status_code().as_u16(),
                "payments: approve on non-pending payment"
            );
            return Err(err);
        }

        let plan = match PlanKey::from_str(&payment.plan_key) {
            Some(key) => plans::resolve_plan(key),
            None => {
                let err = PaymentError::InvalidPlan;
                warn!(
                    payment_id,
                    plan_key = %payment.plan_key,
                    status = err.status_code().as_u16(),
                    "payments: stored payment references unknown plan"
                );
                return Err(err);
            }
        };

        let starts_at = Utc::now();
        let ends_at = starts_at
            .checked_add_signed(Duration::days(plan.duration_days))
            .context("failed to compute subscription end date")?;

        let subscription = InsertSubscriptionEntity {
            user_id: payment.user_id,
            plan_key: payment.plan_key.clone(),
            amount: payment.amount,
            starts_at,
            ends_at,
        };

        let approved = self
            .payment_repo
            .approve_pending_payment(payment_id, reviewer_id, subscription)
            .await
            .map_err(|err| {
                error!(payment_id, db_error = ?err, "payments: failed to approve payment");
                PaymentError::Internal(err)
            })?;

        match approved {
            Some(payment) => {
                info!(
                    payment_id,
                    user_id = payment.user_id,
                    "payments: approved and subscription activated"
                );
                Ok(payment)
            }
            None => {
                let err = PaymentError::InvalidState;
                warn!(
                    payment_id,
                    status = err.status_code().as_u16(),
                    "payments: payment was no longer pending at commit"
                );
                Err(err)
            }
        }
    }

    pub async fn decline_payment(
        &self,
        payment_id: i64,
        reviewer_id: i64,
        note: Option<String>,
    ) -> UseCaseResult<PaymentEntity> {
        info!(payment_id, reviewer_id, "payments: decline requested");

        let payment = self
            .payment_repo
            .find_payment_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(payment_id, db_error = ?err, "payments: failed to load payment");
                PaymentError::Internal(err)
            })?;

        let payment = match payment {
            Some(payment) => payment,
            None => {
                let err = PaymentError::NotFound;
                warn!(
                    payment_id,
                    status = err.status_code().as_u16(),
                    "payments: decline on unknown payment"
                );
                return Err(err);
            }
        };

        if payment.status != PaymentStatus::Pending.to_string() {
            let err = PaymentError::InvalidState;
            warn!(
                payment_id,
                payment_status = %payment.status,
                status = err.status_code().as_u16(),
                "payments: decline on non-pending payment"
            );
            return Err(err);
        }

        let note = note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        let declined = self
            .payment_repo
            .decline_pending_payment(payment_id, reviewer_id, note)
            .await
            .map_err(|err| {
                error!(payment_id, db_error = ?err, "payments: failed to decline payment");
                PaymentError::Internal(err)
            })?;

        match declined {
            Some(payment) => {
                info!(payment_id, "payments: declined");
                Ok(payment)
            }
            None => {
                let err = PaymentError::InvalidState;
                warn!(
                    payment_id,
                    status = err.status_code().as_u16(),
                    "payments: payment was no longer pending at commit"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::payments::MockPaymentRepository;
    use mockall::predicate::eq;

    fn sample_payment(id: i64, status: PaymentStatus) -> PaymentEntity {
        PaymentEntity {
            id,
            user_id: 7,
            plan_key: "weekly".to_string(),
            amount: 29,
            utr: "ABC123".to_string(),
            payment_ref: "REQ-1700000000000-42".to_string(),
            status: status.to_string(),
            note: None,
            submitted_at: Utc::now(),
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    #[tokio::test]
    async fn submit_weekly_payment_is_recorded_pending() {
        let mut payment_repo = MockPaymentRepository::new();

        payment_repo
            .expect_insert_payment()
            .withf(|new_payment| {
                new_payment.user_id == 7
                    && new_payment.plan_key == "weekly"
                    && new_payment.amount == 29
                    && new_payment.utr == "ABC123"
                    && new_payment.status == "pending"
                    && new_payment.payment_ref.starts_with("REQ-")
            })
            .returning(|new_payment| {
                Box::pin(async move {
                    Ok(PaymentEntity {
                        id: 1,
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
                    })
                })
            });

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let payment = usecase.submit_payment(7, "weekly", "ABC123").await.unwrap();

        assert_eq!(payment.amount, 29);
        assert_eq!(payment.status, "pending");
    }

    #[tokio::test]
    async fn submit_with_unknown_plan_is_rejected() {
        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_insert_payment().times(0);

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.submit_payment(7, "yearly", "ABC123").await;

        assert!(matches!(result, Err(PaymentError::InvalidPlan)));
    }

    #[tokio::test]
    async fn submit_with_malformed_reference_is_rejected() {
        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_insert_payment().times(0);

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.submit_payment(7, "weekly", "ab").await;

        assert!(matches!(result, Err(PaymentError::InvalidReference)));
    }

    #[tokio::test]
    async fn approve_pending_payment_activates_a_seven_day_subscription() {
        let mut payment_repo = MockPaymentRepository::new();

        let pending = sample_payment(8, PaymentStatus::Pending);
        payment_repo
            .expect_find_payment_by_id()
            .with(eq(8))
            .returning(move |_| {
                let pending = pending.clone();
                Box::pin(async move { Ok(Some(pending)) })
            });

        payment_repo
            .expect_approve_pending_payment()
            .withf(|payment_id, reviewer_id, subscription| {
                *payment_id == 8
                    && *reviewer_id == 1
                    && subscription.user_id == 7
                    && subscription.plan_key == "weekly"
                    && subscription.amount == 29
                    && subscription.ends_at - subscription.starts_at == Duration::days(7)
            })
            .returning(|payment_id, reviewer_id, _| {
                Box::pin(async move {
                    let mut payment = sample_payment(payment_id, PaymentStatus::Approved);
                    payment.reviewed_by = Some(reviewer_id);
                    payment.reviewed_at = Some(Utc::now());
                    Ok(Some(payment))
                })
            });

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let payment = usecase.approve_payment(8, 1).await.unwrap();

        assert_eq!(payment.status, "approved");
        assert_eq!(payment.reviewed_by, Some(1));
    }

    #[tokio::test]
    async fn approve_on_declined_payment_is_rejected_without_activation() {
        let mut payment_repo = MockPaymentRepository::new();

        let declined = sample_payment(8, PaymentStatus::Declined);
        payment_repo
            .expect_find_payment_by_id()
            .with(eq(8))
            .returning(move |_| {
                let declined = declined.clone();
                Box::pin(async move { Ok(Some(declined)) })
            });
        payment_repo.expect_approve_pending_payment().times(0);

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.approve_payment(8, 1).await;

        assert!(matches!(result, Err(PaymentError::InvalidState)));
    }

    #[tokio::test]
    async fn approve_on_unknown_payment_is_not_found() {
        let mut payment_repo = MockPaymentRepository::new();

        payment_repo
            .expect_find_payment_by_id()
            .with(eq(99))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.approve_payment(99, 1).await;

        assert!(matches!(result, Err(PaymentError::NotFound)));
    }

    #[tokio::test]
    async fn approve_losing_the_commit_race_is_invalid_state() {
        let mut payment_repo = MockPaymentRepository::new();

        let pending = sample_payment(8, PaymentStatus::Pending);
        payment_repo
            .expect_find_payment_by_id()
            .with(eq(8))
            .returning(move |_| {
                let pending = pending.clone();
                Box::pin(async move { Ok(Some(pending)) })
            });

        payment_repo
            .expect_approve_pending_payment()
            .returning(|_, _, _| Box::pin(async { Ok(None) }));

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.approve_payment(8, 1).await;

        assert!(matches!(result, Err(PaymentError::InvalidState)));
    }

    #[tokio::test]
    async fn decline_pending_payment_stores_trimmed_note() {
        let mut payment_repo = MockPaymentRepository::new();

        let pending = sample_payment(8, PaymentStatus::Pending);
        payment_repo
            .expect_find_payment_by_id()
            .with(eq(8))
            .returning(move |_| {
                let pending = pending.clone();
                Box::pin(async move { Ok(Some(pending)) })
            });

        payment_repo
            .expect_decline_pending_payment()
            .with(eq(8), eq(1), eq(Some("duplicate entry".to_string())))
            .returning(|payment_id, reviewer_id, note| {
                Box::pin(async move {
                    let mut payment = sample_payment(payment_id, PaymentStatus::Declined);
                    payment.reviewed_by = Some(reviewer_id);
                    payment.note = note;
                    Ok(Some(payment))
                })
            });

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let payment = usecase
            .decline_payment(8, 1, Some("  duplicate entry  ".to_string()))
            .await
            .unwrap();

        assert_eq!(payment.status, "declined");
        assert_eq!(payment.note, Some("duplicate entry".to_string()));
    }

    #[tokio::test]
    async fn decline_on_approved_payment_is_rejected() {
        let mut payment_repo = MockPaymentRepository::new();

        let approved = sample_payment(8, PaymentStatus::Approved);
        payment_repo
            .expect_find_payment_by_id()
            .with(eq(8))
            .returning(move |_| {
                let approved = approved.clone();
                Box::pin(async move { Ok(Some(approved)) })
            });
        payment_repo.expect_decline_pending_payment().times(0);

        let usecase = PaymentUseCase::new(Arc::new(payment_repo));
        let result = usecase.decline_payment(8, 1, None).await;

        assert!(matches!(result, Err(PaymentError::InvalidState)));
    }

    #[test]
    fn reference_code_validation_accepts_utr_shapes() {
        assert!(is_valid_reference("ABC123"));
        assert!(is_valid_reference("utr-2024-0001"));
        assert!(is_valid_reference(&"A".repeat(40)));

        assert!(!is_valid_reference("ab"));
        assert!(!is_valid_reference(&"A".repeat(41)));
        assert!(!is_valid_reference("has space"));
        assert!(!is_valid_reference("emoji🙂ref"));
    }
}
