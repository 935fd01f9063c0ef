use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::error::{CoreError, Result};

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Dates are naive: no time zone is applied, so "2024-01-01" is always
/// January 1st regardless of where the process runs. Only the zero-padded
/// ten-character form is accepted: "2024-1-5" and "+2024-01-05" are errors.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let parse_error = || CoreError::Parse {
        value: input.to_string(),
    };
    let trimmed = input.trim();
    if !is_iso_shape(trimmed.as_bytes()) {
        return Err(parse_error());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| parse_error())
}

fn is_iso_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn iso_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's calendar date, anchored to UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CoreError::InvalidYear(year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CoreError::InvalidYear(year))?;
    Ok((start, end))
}

/// First and last day of `month` (1-12) in `year`.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidMonth(month));
    }
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::InvalidYear(year))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .ok_or(CoreError::InvalidYear(year))?;
    Ok((start, end))
}

/// The Sunday on or before `date`, `None` past the start of the supported range.
pub fn sunday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
}

/// The Saturday on or after `date`, `None` past the end of the supported range.
pub fn saturday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(6 - date.weekday().num_days_from_sunday() as i64))
}

/// Three-letter month name for a zero-based month index.
pub fn short_month_name(month_index: u32) -> &'static str {
    SHORT_MONTHS[(month_index as usize) % 12]
}

/// "Jan 5"
pub fn format_short(date: NaiveDate) -> String {
    format!("{} {}", short_month_name(date.month0()), date.day())
}

/// "Monday, January 1, 2024"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}
