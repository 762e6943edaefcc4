//! Medication adherence tracking and analytics.
//!
//! Each day is categorized by how much of the scheduled medication was
//! actually taken:
//! - **Met**: every scheduled dose taken (or nothing was due)
//! - **Partial**: some but not all doses taken
//! - **Unmet**: nothing taken

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Adherence status for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceStatus {
    Met,
    Partial,
    Unmet,
}

impl AdherenceStatus {
    /// Classify a day from taken vs scheduled dose counts.
    ///
    /// A day with nothing scheduled counts as Met: there was nothing to
    /// miss. Extra as-needed doses beyond the schedule still cap at Met.
    pub fn classify(taken: u32, scheduled: u32) -> Self {
        if scheduled == 0 || taken >= scheduled {
            AdherenceStatus::Met
        } else if taken == 0 {
            AdherenceStatus::Unmet
        } else {
            AdherenceStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdherenceStatus::Met => "met",
            AdherenceStatus::Partial => "partial",
            AdherenceStatus::Unmet => "unmet",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "met" => Some(AdherenceStatus::Met),
            "partial" => Some(AdherenceStatus::Partial),
            "unmet" => Some(AdherenceStatus::Unmet),
            _ => None,
        }
    }
}

/// One day of adherence history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceDay {
    pub date: NaiveDate,
    pub status: AdherenceStatus,
}

/// Aggregate adherence figures across a set of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdherenceReport {
    pub total_days: u32,
    pub met: u32,
    pub partial: u32,
    pub unmet: u32,
    /// Ratio of fully-met days (0.0 to 1.0).
    pub adherence_rate: f64,
}

/// Analyzer producing adherence reports from day histories.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdherenceAnalyzer;

impl AdherenceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Summarize an iterator of adherence days.
    pub fn analyze<I>(&self, days: I) -> AdherenceReport
    where
        I: IntoIterator<Item = AdherenceDay>,
    {
        let mut report = AdherenceReport::default();
        for day in days {
            report.total_days += 1;
            match day.status {
                AdherenceStatus::Met => report.met += 1,
                AdherenceStatus::Partial => report.partial += 1,
                AdherenceStatus::Unmet => report.unmet += 1,
            }
        }
        if report.total_days > 0 {
            report.adherence_rate = report.met as f64 / report.total_days as f64;
        }
        report
    }

    /// Adherence over a date window only, e.g. the "this week" percentage.
    pub fn window_rate<I>(&self, days: I, from: NaiveDate, to: NaiveDate) -> f64
    where
        I: IntoIterator<Item = AdherenceDay>,
    {
        self.analyze(
            days.into_iter()
                .filter(|day| day.date >= from && day.date < to),
        )
        .adherence_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32, status: AdherenceStatus) -> AdherenceDay {
        AdherenceDay {
            date: date(y, m, d),
            status,
        }
    }

    #[test]
    fn classify_all_taken_is_met() {
        assert_eq!(AdherenceStatus::classify(4, 4), AdherenceStatus::Met);
    }

    #[test]
    fn classify_some_taken_is_partial() {
        assert_eq!(AdherenceStatus::classify(2, 4), AdherenceStatus::Partial);
    }

    #[test]
    fn classify_none_taken_is_unmet() {
        assert_eq!(AdherenceStatus::classify(0, 4), AdherenceStatus::Unmet);
    }

    #[test]
    fn classify_nothing_scheduled_is_met() {
        assert_eq!(AdherenceStatus::classify(0, 0), AdherenceStatus::Met);
    }

    #[test]
    fn classify_extra_doses_cap_at_met() {
        assert_eq!(AdherenceStatus::classify(6, 4), AdherenceStatus::Met);
    }

    #[test]
    fn status_string_roundtrip() {
        for status in [
            AdherenceStatus::Met,
            AdherenceStatus::Partial,
            AdherenceStatus::Unmet,
        ] {
            assert_eq!(AdherenceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AdherenceStatus::parse("skipped"), None);
    }

    #[test]
    fn analyze_empty_days() {
        let report = AdherenceAnalyzer::new().analyze(std::iter::empty());
        assert_eq!(report.total_days, 0);
        assert_eq!(report.adherence_rate, 0.0);
    }

    #[test]
    fn analyze_counts_and_rate() {
        let days = vec![
            day(2026, 1, 1, AdherenceStatus::Met),
            day(2026, 1, 2, AdherenceStatus::Met),
            day(2026, 1, 3, AdherenceStatus::Partial),
            day(2026, 1, 4, AdherenceStatus::Unmet),
        ];
        let report = AdherenceAnalyzer::new().analyze(days);
        assert_eq!(report.total_days, 4);
        assert_eq!(report.met, 2);
        assert_eq!(report.partial, 1);
        assert_eq!(report.unmet, 1);
        assert_eq!(report.adherence_rate, 0.5);
    }

    #[test]
    fn window_rate_filters_dates() {
        let days = vec![
            day(2026, 1, 1, AdherenceStatus::Unmet), // before window
            day(2026, 1, 5, AdherenceStatus::Met),
            day(2026, 1, 6, AdherenceStatus::Met),
            day(2026, 1, 12, AdherenceStatus::Unmet), // at window end, excluded
        ];
        let rate =
            AdherenceAnalyzer::new().window_rate(days, date(2026, 1, 4), date(2026, 1, 12));
        assert_eq!(rate, 1.0);
    }
}
