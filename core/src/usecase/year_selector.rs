use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, Result};
use crate::model::contribution::YearTotals;
use crate::service::stats_service::available_years;

/// Years with data plus the one currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSelector {
    years: Vec<i32>,
    selected: i32,
}

impl YearSelector {
    /// Starts on the current year, even when it has no data yet.
    pub fn new(totals: &YearTotals, today: NaiveDate) -> Self {
        Self {
            years: available_years(totals, today),
            selected: today.year(),
        }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn select(&mut self, year: i32) -> Result<()> {
        if !self.years.contains(&year) {
            return Err(CoreError::YearUnavailable(year));
        }
        self.selected = year;
        Ok(())
    }

    /// Moves to `year` when it is listed; returns whether the selection changed.
    pub fn select_if_available(&mut self, year: i32) -> bool {
        if self.years.contains(&year) {
            self.selected = year;
            return true;
        }
        false
    }
}
