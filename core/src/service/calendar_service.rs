use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{CoreError, Result};
use crate::model::calendar::{CalendarGrid, MonthAnchor, Week, WeekCell};
use crate::model::contribution::ContributionRecord;
use crate::time::{parse_iso_date, saturday_on_or_after, sunday_on_or_before, year_bounds};

/// Lays out `records` as a Sunday-first week grid covering `year`.
///
/// The grid starts on the Sunday on or before January 1st and ends on the
/// Saturday on or after December 31st. Days outside the year become
/// `WeekCell::Padding`; in-year days without a record get a zero count.
///
/// Every record date is parsed before anything is built, so a malformed
/// date fails the whole call.
pub fn build_calendar(records: &[ContributionRecord], year: i32) -> Result<CalendarGrid> {
    let (year_start, year_end) = year_bounds(year)?;
    let by_date = index_year(records, year_start, year_end)?;

    let grid_start = sunday_on_or_before(year_start).ok_or(CoreError::InvalidYear(year))?;
    let grid_end = saturday_on_or_after(year_end).ok_or(CoreError::InvalidYear(year))?;
    let week_count = ((grid_end - grid_start).num_days() as usize + 1) / 7;

    let mut weeks = Vec::with_capacity(week_count);
    let mut month_anchors = Vec::with_capacity(12);
    let mut last_month: Option<u32> = None;

    for week_index in 0..week_count {
        let week_start = grid_start + Duration::days(7 * week_index as i64);
        let cells: [WeekCell; 7] = std::array::from_fn(|offset| {
            let date = week_start + Duration::days(offset as i64);
            if date < year_start || date > year_end {
                return WeekCell::Padding { date };
            }
            let (count, level) = by_date
                .get(&date)
                .map(|r| (r.count, r.level))
                .unwrap_or((0, 0));
            WeekCell::InRange { date, count, level }
        });

        for cell in cells.iter().filter(|c| !c.is_padding()) {
            let month = cell.date().month0();
            if last_month != Some(month) {
                month_anchors.push(MonthAnchor {
                    month_index: month,
                    week_index,
                });
                last_month = Some(month);
            }
        }

        weeks.push(Week { cells });
    }

    Ok(CalendarGrid {
        year,
        weeks,
        month_anchors,
    })
}

/// Parses every record date and keeps the ones inside `[start, end]`.
/// A later record for the same date replaces an earlier one.
fn index_year(
    records: &[ContributionRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<HashMap<NaiveDate, &ContributionRecord>> {
    let mut by_date = HashMap::new();
    for record in records {
        let date = parse_iso_date(&record.date)?;
        if date >= start && date <= end {
            by_date.insert(date, record);
        }
    }
    Ok(by_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(date: &str, count: u32, level: u8) -> ContributionRecord {
        ContributionRecord::new(date, count, level)
    }

    #[test]
    fn test_weeks_are_sunday_aligned_for_every_year() {
        for year in 1990..=2040 {
            let grid = build_calendar(&[], year).unwrap();
            for week in &grid.weeks {
                assert_eq!(week.first_day().weekday(), Weekday::Sun, "year {}", year);
                assert_eq!(week.cells[6].date().weekday(), Weekday::Sat, "year {}", year);
            }
            let first = grid.first_date().unwrap();
            let last = grid.last_date().unwrap();
            assert_eq!(((last - first).num_days() + 1) % 7, 0, "year {}", year);
            assert!(first <= ymd(year, 1, 1));
            assert!(last >= ymd(year, 12, 31));
            assert!(grid.weeks.len() == 53 || grid.weeks.len() == 54, "year {}", year);
        }
    }

    #[test]
    fn test_twelve_month_anchors_in_order() {
        for year in 1990..=2040 {
            let grid = build_calendar(&[], year).unwrap();
            assert_eq!(grid.month_anchors.len(), 12, "year {}", year);
            for (i, anchor) in grid.month_anchors.iter().enumerate() {
                assert_eq!(anchor.month_index, i as u32);
            }
            for pair in grid.month_anchors.windows(2) {
                assert!(pair[0].week_index < pair[1].week_index, "year {}", year);
            }
            assert_eq!(grid.month_anchors[0].week_index, 0);
        }
    }

    #[test]
    fn test_padding_iff_outside_year() {
        let grid = build_calendar(&[], 2024).unwrap();
        for cell in grid.cells() {
            let in_year = cell.date().year() == 2024;
            assert_eq!(cell.is_padding(), !in_year, "{}", cell.date());
        }
    }

    #[test]
    fn test_record_on_monday_new_year() {
        let records = vec![rec("2024-01-01", 3, 1)];
        let grid = build_calendar(&records, 2024).unwrap();
        let week0 = &grid.weeks[0];

        assert_eq!(week0.cells[0], WeekCell::Padding { date: ymd(2023, 12, 31) });
        assert_eq!(
            week0.cells[1],
            WeekCell::InRange { date: ymd(2024, 1, 1), count: 3, level: 1 }
        );
        assert_eq!(week0.cells.iter().filter(|c| c.is_padding()).count(), 1);
        assert_eq!(grid.total(), 3);
    }

    #[test]
    fn test_year_starting_on_sunday_has_no_leading_padding() {
        let grid = build_calendar(&[], 2023).unwrap();
        assert_eq!(grid.first_date(), Some(ymd(2023, 1, 1)));
        assert!(grid.weeks[0].cells.iter().all(|c| !c.is_padding()));
    }

    #[test]
    fn test_year_ending_on_saturday_has_no_trailing_padding() {
        let grid = build_calendar(&[], 2022).unwrap();
        assert_eq!(grid.last_date(), Some(ymd(2022, 12, 31)));
        assert!(grid.weeks.last().unwrap().cells.iter().all(|c| !c.is_padding()));
    }

    #[test]
    fn test_trailing_padding_comes_from_next_year() {
        let grid = build_calendar(&[], 2024).unwrap();
        // Dec 31 2024 is a Tuesday
        let last = grid.weeks.last().unwrap();
        assert_eq!(last.cells[2], WeekCell::InRange { date: ymd(2024, 12, 31), count: 0, level: 0 });
        assert_eq!(last.cells[3], WeekCell::Padding { date: ymd(2025, 1, 1) });
        assert_eq!(last.cells[6].date(), ymd(2025, 1, 4));
    }

    #[test]
    fn test_leap_day_is_an_ordinary_cell() {
        let records = vec![rec("2024-02-29", 7, 4)];
        let grid = build_calendar(&records, 2024).unwrap();
        assert_eq!(
            grid.cell(ymd(2024, 2, 29)),
            Some(&WeekCell::InRange { date: ymd(2024, 2, 29), count: 7, level: 4 })
        );
        assert_eq!(grid.cells().filter(|c| !c.is_padding()).count(), 366);
    }

    #[test]
    fn test_leap_year_starting_saturday_spans_54_weeks() {
        // 2000-01-01 is a Saturday and 2000-12-31 a Sunday
        let grid = build_calendar(&[], 2000).unwrap();
        assert_eq!(grid.weeks.len(), 54);
        assert_eq!(grid.month_anchors.last().unwrap().month_index, 11);
    }

    #[test]
    fn test_records_outside_year_are_ignored() {
        let records = vec![
            rec("2023-12-31", 9, 4),
            rec("2024-06-15", 2, 1),
            rec("2025-01-01", 9, 4),
        ];
        let grid = build_calendar(&records, 2024).unwrap();
        assert_eq!(grid.total(), 2);
        assert_eq!(grid.cell(ymd(2023, 12, 31)).unwrap().count(), None);
        assert_eq!(grid.cell(ymd(2025, 1, 1)).unwrap().level(), None);
    }

    #[test]
    fn test_days_without_record_are_zero() {
        let grid = build_calendar(&[], 2021).unwrap();
        assert!(grid
            .cells()
            .filter(|c| !c.is_padding())
            .all(|c| c.count() == Some(0) && c.level() == Some(0)));
    }

    #[test]
    fn test_level_is_propagated_not_recomputed() {
        let records = vec![rec("2024-03-10", 1, 4), rec("2024-03-11", 50, 1)];
        let grid = build_calendar(&records, 2024).unwrap();
        assert_eq!(grid.cell(ymd(2024, 3, 10)).unwrap().level(), Some(4));
        assert_eq!(grid.cell(ymd(2024, 3, 11)).unwrap().level(), Some(1));
    }

    #[test]
    fn test_duplicate_dates_keep_last_record() {
        let records = vec![rec("2024-05-05", 1, 1), rec("2024-05-05", 4, 2)];
        let grid = build_calendar(&records, 2024).unwrap();
        assert_eq!(grid.cell(ymd(2024, 5, 5)).unwrap().count(), Some(4));
    }

    #[test]
    fn test_malformed_date_fails_whole_build() {
        let records = vec![rec("2024-01-01", 3, 1), rec("2024-02-30", 1, 1)];
        let err = build_calendar(&records, 2024).unwrap_err();
        assert!(matches!(err, CoreError::Parse { value } if value == "2024-02-30"));
    }

    #[test]
    fn test_unpadded_or_signed_dates_are_rejected() {
        let err = build_calendar(&[rec("2024-1-5", 4, 2)], 2024).unwrap_err();
        assert!(matches!(err, CoreError::Parse { value } if value == "2024-1-5"));

        let err = build_calendar(&[rec("+2024-01-05", 4, 2)], 2024).unwrap_err();
        assert!(matches!(err, CoreError::Parse { value } if value == "+2024-01-05"));
    }

    #[test]
    fn test_malformed_date_outside_year_still_fails() {
        let records = vec![rec("not-a-date", 1, 1)];
        assert!(build_calendar(&records, 2024).is_err());
    }

    #[test]
    fn test_unsupported_year() {
        assert!(matches!(
            build_calendar(&[], i32::MAX),
            Err(CoreError::InvalidYear(y)) if y == i32::MAX
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = vec![rec("2024-01-01", 3, 1), rec("2024-07-04", 12, 3)];
        let a = build_calendar(&records, 2024).unwrap();
        let b = build_calendar(&records, 2024).unwrap();
        assert_eq!(a, b);
    }
}
