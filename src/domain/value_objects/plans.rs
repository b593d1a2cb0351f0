use serde::Serialize;

use crate::domain::value_objects::enums::plan_keys::PlanKey;

/// A purchasable access plan. The catalog is fixed at compile time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PlanModel {
    pub key: PlanKey,
    pub label: &'static str,
    pub amount: i64,
    pub duration_days: i64,
}

pub const DAILY_PLAN: PlanModel = PlanModel {
    key: PlanKey::Daily,
    label: "Daily",
    amount: 9,
    duration_days: 1,
};

pub const WEEKLY_PLAN: PlanModel = PlanModel {
    key: PlanKey::Weekly,
    label: "7 Days",
    amount: 29,
    duration_days: 7,
};

pub const MONTHLY_PLAN: PlanModel = PlanModel {
    key: PlanKey::Monthly,
    label: "Monthly",
    amount: 99,
    duration_days: 30,
};

pub const PLAN_CATALOG: [PlanModel; 3] = [DAILY_PLAN, WEEKLY_PLAN, MONTHLY_PLAN];

pub fn resolve_plan(key: PlanKey) -> PlanModel {
    match key {
        PlanKey::Daily => DAILY_PLAN,
        PlanKey::Weekly => WEEKLY_PLAN,
        PlanKey::Monthly => MONTHLY_PLAN,
    }
}
