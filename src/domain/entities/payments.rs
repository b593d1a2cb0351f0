use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentEntity {
    pub id: i64,
    pub user_id: i64,
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPaymentEntity {
    pub user_id: i64,
    pub plan_key: String,
    pub amount: i64,
    pub utr: String,
    pub payment_ref: String,
    pub status: String,
}
