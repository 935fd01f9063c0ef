use chrono::NaiveDate;
use serde::Serialize;

use crate::time::short_month_name;

/// A single day in the calendar grid.
///
/// Days outside the requested year are `Padding`: they only exist to fill
/// the first and last week and carry no count.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeekCell {
    InRange { date: NaiveDate, count: u32, level: u8 },
    Padding { date: NaiveDate },
}

impl WeekCell {
    pub fn date(&self) -> NaiveDate {
        match self {
            WeekCell::InRange { date, .. } | WeekCell::Padding { date } => *date,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, WeekCell::Padding { .. })
    }

    /// Contribution count, `None` for padding.
    pub fn count(&self) -> Option<u32> {
        match self {
            WeekCell::InRange { count, .. } => Some(*count),
            WeekCell::Padding { .. } => None,
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            WeekCell::InRange { level, .. } => Some(*level),
            WeekCell::Padding { .. } => None,
        }
    }
}

/// Seven consecutive days, Sunday first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub cells: [WeekCell; 7],
}

impl Week {
    pub fn first_day(&self) -> NaiveDate {
        self.cells[0].date()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().filter_map(|c| c.count()).map(u64::from).sum()
    }
}

/// Column at which a month's first in-year day appears.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthAnchor {
    pub month_index: u32, // 0 = January
    pub week_index: usize,
}

impl MonthAnchor {
    pub fn label(&self) -> &'static str {
        short_month_name(self.month_index)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub weeks: Vec<Week>,
    pub month_anchors: Vec<MonthAnchor>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &WeekCell> {
        self.weeks.iter().flat_map(|w| w.cells.iter())
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|w| w.cells[0].date())
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|w| w.cells[6].date())
    }

    /// Sum of all in-range cells.
    pub fn total(&self) -> u64 {
        self.weeks.iter().map(Week::total).sum()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&WeekCell> {
        let start = self.first_date()?;
        let offset = (date - start).num_days();
        if offset < 0 {
            return None;
        }
        let offset = offset as usize;
        self.weeks.get(offset / 7).map(|w| &w.cells[offset % 7])
    }
}
