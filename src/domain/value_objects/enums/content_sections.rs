use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSection {
    Courses,
    Books,
    Pyqs,
    Mock,
}

impl ContentSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSection::Courses => "courses",
            ContentSection::Books => "books",
            ContentSection::Pyqs => "pyqs",
            ContentSection::Mock => "mock",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "courses" => Some(ContentSection::Courses),
            "books" => Some(ContentSection::Books),
            "pyqs" => Some(ContentSection::Pyqs),
            "mock" => Some(ContentSection::Mock),
            _ => None,
        }
    }
}

impl Display for ContentSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
