use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Published,
    Draft,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Published => "published",
            ContentStatus::Draft => "draft",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "draft" => ContentStatus::Draft,
            _ => ContentStatus::Published,
        }
    }
}

impl Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
