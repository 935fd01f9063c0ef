use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of activity as reported by the contributions API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContributionRecord {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
    pub level: u8,
}

impl ContributionRecord {
    pub fn new(date: impl Into<String>, count: u32, level: u8) -> Self {
        Self {
            date: date.into(),
            count,
            level,
        }
    }
}

/// Year -> total contributions. Keys are serialized as strings (`{"2024": 120}`).
pub type YearTotals = BTreeMap<i32, u64>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContributionData {
    #[serde(default)]
    pub total: YearTotals,
    #[serde(default)]
    pub contributions: Vec<ContributionRecord>,
}

impl ContributionData {
    pub fn is_empty(&self) -> bool {
        self.total.is_empty() && self.contributions.is_empty()
    }
}
