//! Calendar window helpers.
//!
//! The dashboard's weekly checks (weight logged this week, week-streak
//! banner) use a Sunday-based week. Dates are immutable `NaiveDate` values
//! throughout; there is no in-place date mutation and no reparsing of
//! partial date strings.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A Sunday-based calendar week, half-open: `start <= d < end`, 7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_sunday() as u64;
        // num_days_from_sunday is at most 6, well inside NaiveDate range
        // except at the calendar's lower bound; clamp there.
        let start = date
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN);
        let end = start.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_sunday() {
        // 2026-01-03 is a Saturday; its week starts Sunday 2025-12-28.
        let week = WeekWindow::containing(date(2026, 1, 3));
        assert_eq!(week.start, date(2025, 12, 28));
        assert_eq!(week.end, date(2026, 1, 4));
    }

    #[test]
    fn sunday_starts_its_own_week() {
        let week = WeekWindow::containing(date(2026, 1, 4));
        assert_eq!(week.start, date(2026, 1, 4));
    }

    #[test]
    fn contains_is_half_open() {
        let week = WeekWindow::containing(date(2026, 1, 3));
        assert!(week.contains(date(2025, 12, 28)));
        assert!(week.contains(date(2026, 1, 3)));
        assert!(!week.contains(date(2026, 1, 4)));
        assert!(!week.contains(date(2025, 12, 27)));
    }

    #[test]
    fn week_spans_year_boundary() {
        let week = WeekWindow::containing(date(2026, 1, 1));
        assert_eq!(week.start, date(2025, 12, 28));
        assert!(week.contains(date(2025, 12, 31)));
        assert!(week.contains(date(2026, 1, 2)));
    }
}
