//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// Coarse routing label for an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "IT")]
    It,
    Facilities,
    General,
}

impl Category {
    /// Convert to the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Facilities => "Facilities",
            Self::General => "General",
        }
    }
}

/// Urgency label derived from keyword presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Low,
}

impl Priority {
    /// Convert to the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }

    /// Sentiment carries no independent signal; it follows priority.
    pub fn sentiment(&self) -> Sentiment {
        match self {
            Self::High => Sentiment::Urgent,
            Self::Low => Sentiment::Neutral,
        }
    }
}

/// Cosmetic tone label, fully determined by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Urgent,
    Neutral,
}

impl Sentiment {
    /// Convert to the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Neutral => "Neutral",
        }
    }
}

/// A classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub suggested_category: Category,
    pub suggested_priority: Priority,
    pub sentiment: Sentiment,
}
