use serde::{Deserialize, Serialize};

use crate::model::calendar::{CalendarGrid, WeekCell};
use crate::time::{format_long, iso_string};

/// Flattened cell for renderers. Padding cells carry `-1` for both count
/// and level and have no tooltip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekCellDto {
    pub date: String, // YYYY-MM-DD
    pub count: i64,
    pub level: i16,
    pub tooltip: Option<String>,
}

impl WeekCellDto {
    pub fn from_entity(cell: &WeekCell) -> Self {
        match *cell {
            WeekCell::InRange { date, count, level } => Self {
                date: iso_string(date),
                count: i64::from(count),
                level: i16::from(level),
                tooltip: Some(format!(
                    "{} contribution{} on {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    format_long(date)
                )),
            },
            WeekCell::Padding { date } => Self {
                date: iso_string(date),
                count: -1,
                level: -1,
                tooltip: None,
            },
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.count < 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthLabelDto {
    pub month: String, // Jan, Feb...
    pub week_index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarGridDto {
    pub year: i32,
    pub total: u64,
    pub weeks: Vec<Vec<WeekCellDto>>,
    pub month_labels: Vec<MonthLabelDto>,
}

impl CalendarGridDto {
    pub fn from_entity(grid: &CalendarGrid) -> Self {
        Self {
            year: grid.year,
            total: grid.total(),
            weeks: grid
                .weeks
                .iter()
                .map(|w| w.cells.iter().map(WeekCellDto::from_entity).collect())
                .collect(),
            month_labels: grid
                .month_anchors
                .iter()
                .map(|a| MonthLabelDto {
                    month: a.label().to_string(),
                    week_index: a.week_index,
                })
                .collect(),
        }
    }
}
