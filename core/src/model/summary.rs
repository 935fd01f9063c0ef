use chrono::NaiveDate;
use serde::Serialize;

/// Activity for one calendar month.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthActivitySummary {
    pub month: u32, // 1-12
    pub month_name: String,
    pub year: i32,
    pub total_count: u64,
    pub first_active: NaiveDate,
    pub last_active: NaiveDate,
    pub date_range_label: String,
}
