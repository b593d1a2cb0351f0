use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::payments::PaymentEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPaymentModel {
    pub plan_key: String,
    pub utr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclinePaymentModel {
    pub note: Option<String>,
}

/// Admin review row: one payment joined with its owner for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentReviewModel {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub plan_key: String,
    pub amount: i64,
    pub utr: String,
    pub payment_ref: String,
    pub status: String,
    pub note: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl PaymentReviewModel {
    pub fn new(payment: PaymentEntity, user_name: String, user_email: String) -> Self {
        PaymentReviewModel {
            id: payment.id,
            user_id: payment.user_id,
            user_name,
            user_email,
            plan_key: payment.plan_key,
            amount: payment.amount,
            utr: payment.utr,
            payment_ref: payment.payment_ref,
            status: payment.status,
            note: payment.note,
            submitted_at: payment.submitted_at,
            reviewed_by: payment.reviewed_by,
            reviewed_at: payment.reviewed_at,
        }
    }
}
