use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanKey {
    Daily,
    Weekly,
    Monthly,
}

impl PlanKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKey::Daily => "daily",
            PlanKey::Weekly => "weekly",
            PlanKey::Monthly => "monthly",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(PlanKey::Daily),
            "weekly" => Some(PlanKey::Weekly),
            "monthly" => Some(PlanKey::Monthly),
            _ => None,
        }
    }
}

impl Display for PlanKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
