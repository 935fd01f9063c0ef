use chrono::{Datelike, Duration, NaiveDate};

use crate::error::Result;
use crate::model::contribution::{ContributionRecord, YearTotals};
use crate::model::summary::MonthActivitySummary;
use crate::time::{format_short, month_bounds, month_name, parse_iso_date, today_utc};

pub fn year_total(totals: &YearTotals, year: i32) -> u64 {
    totals.get(&year).copied().unwrap_or(0)
}

pub fn total_contributions(totals: &YearTotals) -> u64 {
    totals.values().sum()
}

/// Years with data, most recent first. Falls back to the year of `today`
/// when nothing is known yet.
pub fn available_years(totals: &YearTotals, today: NaiveDate) -> Vec<i32> {
    if totals.is_empty() {
        return vec![today.year()];
    }
    totals.keys().rev().copied().collect()
}

pub fn available_years_now(totals: &YearTotals) -> Vec<i32> {
    available_years(totals, today_utc())
}

/// Sum of counts for records dated within `[start, end]`.
pub fn window_total(records: &[ContributionRecord], start: NaiveDate, end: NaiveDate) -> Result<u64> {
    let mut total = 0u64;
    for record in records {
        let date = parse_iso_date(&record.date)?;
        if date >= start && date <= end {
            total += u64::from(record.count);
        }
    }
    Ok(total)
}

/// Sum over the `days` days ending at `end`, inclusive.
pub fn trailing_total(records: &[ContributionRecord], end: NaiveDate, days: u32) -> Result<u64> {
    if days == 0 {
        return Ok(0);
    }
    let start = end
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    window_total(records, start, end)
}

/// Activity in `month` (1-12) of `year`.
///
/// `total_count` includes zero-count days; the date range only covers days
/// with at least one contribution. `None` when the month had no activity.
pub fn month_summary(
    records: &[ContributionRecord],
    year: i32,
    month: u32,
) -> Result<Option<MonthActivitySummary>> {
    let (start, end) = month_bounds(year, month)?;

    let mut total_count = 0u64;
    let mut active: Option<(NaiveDate, NaiveDate)> = None;
    for record in records {
        let date = parse_iso_date(&record.date)?;
        if date < start || date > end {
            continue;
        }
        total_count += u64::from(record.count);
        if record.count > 0 {
            active = Some(match active {
                Some((first, last)) => (first.min(date), last.max(date)),
                None => (date, date),
            });
        }
    }

    let Some((first_active, last_active)) = active else {
        return Ok(None);
    };

    Ok(Some(MonthActivitySummary {
        month,
        month_name: month_name(month),
        year,
        total_count,
        first_active,
        last_active,
        date_range_label: format!("{} \u{2013} {}", format_short(first_active), format_short(last_active)),
    }))
}

pub fn current_month_summary(
    records: &[ContributionRecord],
    today: NaiveDate,
) -> Result<Option<MonthActivitySummary>> {
    month_summary(records, today.year(), today.month())
}

pub fn current_month_summary_now(records: &[ContributionRecord]) -> Result<Option<MonthActivitySummary>> {
    current_month_summary(records, today_utc())
}
