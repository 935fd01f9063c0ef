use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::Result;
use crate::model::calendar::CalendarGrid;
use crate::model::contribution::ContributionData;
use crate::model::summary::MonthActivitySummary;
use crate::repository::ContributionSource;
use crate::service::calendar_service::build_calendar;
use crate::service::dto::CalendarGridDto;
use crate::service::stats_service::{current_month_summary, total_contributions, year_total};
use crate::usecase::year_selector::YearSelector;

/// Loaded contribution data plus the selected year, with grids memoised
/// per `(data version, year)`.
pub struct ContributionDashboard {
    data: ContributionData,
    version: u64,
    today: NaiveDate,
    selector: YearSelector,
    grids: HashMap<(u64, i32), CalendarGrid>,
}

impl ContributionDashboard {
    pub fn new(data: ContributionData, today: NaiveDate) -> Self {
        let selector = YearSelector::new(&data.total, today);
        Self {
            data,
            version: 0,
            today,
            selector,
            grids: HashMap::new(),
        }
    }

    pub fn load<S: ContributionSource>(source: &S, username: &str, today: NaiveDate) -> Result<Self> {
        let data = source.contributions(username)?;
        debug!(
            username,
            records = data.contributions.len(),
            years = data.total.len(),
            "contributions loaded"
        );
        Ok(Self::new(data, today))
    }

    /// Swaps in fresh data. Cached grids are dropped; the selection survives
    /// when the new data still offers that year.
    pub fn replace_data(&mut self, data: ContributionData, today: NaiveDate) {
        let previous = self.selector.selected();
        let mut selector = YearSelector::new(&data.total, today);
        if !selector.select_if_available(previous) {
            debug!(year = previous, "selected year no longer listed");
        }

        self.data = data;
        self.today = today;
        self.selector = selector;
        self.version += 1;
        self.grids.clear();
    }

    pub fn data(&self) -> &ContributionData {
        &self.data
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn years(&self) -> &[i32] {
        self.selector.years()
    }

    pub fn selected_year(&self) -> i32 {
        self.selector.selected()
    }

    pub fn select_year(&mut self, year: i32) -> Result<()> {
        self.selector.select(year)
    }

    /// Grid for the selected year, built at most once per data version.
    pub fn calendar(&mut self) -> Result<&CalendarGrid> {
        let key = (self.version, self.selector.selected());
        if !self.grids.contains_key(&key) {
            let grid = build_calendar(&self.data.contributions, key.1)?;
            self.grids.insert(key, grid);
        }
        Ok(&self.grids[&key])
    }

    pub fn calendar_dto(&mut self) -> Result<CalendarGridDto> {
        self.calendar().map(CalendarGridDto::from_entity)
    }

    pub fn cached_grids(&self) -> usize {
        self.grids.len()
    }

    pub fn selected_year_total(&self) -> u64 {
        year_total(&self.data.total, self.selector.selected())
    }

    pub fn current_year_total(&self) -> u64 {
        year_total(&self.data.total, self.today.year())
    }

    pub fn all_time_total(&self) -> u64 {
        total_contributions(&self.data.total)
    }

    /// "1,234 contributions in 2024"
    pub fn headline(&self) -> String {
        format!(
            "{} contributions in {}",
            group_thousands(self.selected_year_total()),
            self.selector.selected()
        )
    }

    pub fn month_summary(&self) -> Result<Option<MonthActivitySummary>> {
        current_month_summary(&self.data.contributions, self.today)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
