//! Recurrence rules for tracked items.
//!
//! A tracked item (a course, a site to study, a medication) carries a
//! [`ScheduleRule`] saying which days it is expected: either every day, or
//! on a fixed set of weekdays. Weekday indices follow the original data
//! model: 0 = Sunday .. 6 = Saturday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

const DAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// When a recurring item is expected.
///
/// Immutable once created; an edit replaces the rule wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum ScheduleRule {
    /// Expected every day.
    Daily,
    /// Expected on the listed weekdays (0=Sunday .. 6=Saturday).
    Weekly { days: Vec<u8> },
}

impl ScheduleRule {
    /// Whether the rule fires on the given date's weekday.
    ///
    /// Pure predicate, no error conditions: a malformed rule is a caller
    /// contract violation (see [`ScheduleRule::validate`]).
    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        match self {
            ScheduleRule::Daily => true,
            ScheduleRule::Weekly { days } => {
                let weekday = date.weekday().num_days_from_sunday() as u8;
                days.contains(&weekday)
            }
        }
    }

    /// Check the rule is well-formed: weekly rules need at least one day
    /// and every index must be a valid weekday.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ScheduleRule::Daily => Ok(()),
            ScheduleRule::Weekly { days } => {
                if days.is_empty() {
                    return Err(ValidationError::EmptyWeeklySchedule);
                }
                if let Some(&bad) = days.iter().find(|&&d| d > 6) {
                    return Err(ValidationError::WeekdayOutOfRange(bad));
                }
                Ok(())
            }
        }
    }

    /// Display label: "Daily" or a "Mon/Wed/Fri" style abbreviation list.
    pub fn label(&self) -> String {
        match self {
            ScheduleRule::Daily => "Daily".to_string(),
            ScheduleRule::Weekly { days } => days
                .iter()
                .filter(|&&d| d <= 6)
                .map(|&d| DAY_ABBREVIATIONS[d as usize])
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

/// A recurring item tracked against its schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedItem {
    pub id: Uuid,
    pub name: String,
    pub url: Option<String>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub rule: ScheduleRule,
    pub added_on: NaiveDate,
    pub last_completed_on: Option<NaiveDate>,
    pub active: bool,
}

impl TrackedItem {
    /// Create an active item with a fresh id.
    pub fn new(name: impl Into<String>, rule: ScheduleRule, added_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            url: None,
            notes: None,
            rule,
            added_on,
            last_completed_on: None,
            active: true,
        }
    }

    /// Whether this item is expected on `date`.
    pub fn scheduled_on(&self, date: NaiveDate) -> bool {
        self.active && self.rule.is_scheduled_on(date)
    }

    /// Whether this item was completed on `date`.
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.last_completed_on == Some(date)
    }
}

/// Count of scheduled vs completed items for a date, the "2/3 done today"
/// figure the dashboard widgets render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLoad {
    pub scheduled: u32,
    pub completed: u32,
}

/// Tally how many items are expected on `date` and how many of those were
/// completed that day.
pub fn day_load<'a, I>(items: I, date: NaiveDate) -> DayLoad
where
    I: IntoIterator<Item = &'a TrackedItem>,
{
    let mut load = DayLoad::default();
    for item in items {
        if item.scheduled_on(date) {
            load.scheduled += 1;
            if item.completed_on(date) {
                load.completed += 1;
            }
        }
    }
    load
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_fires_every_day() {
        let rule = ScheduleRule::Daily;
        // A full week starting Sunday 2026-01-04.
        for offset in 0..7 {
            let d = date(2026, 1, 4) + chrono::Days::new(offset);
            assert!(rule.is_scheduled_on(d));
        }
    }

    #[test]
    fn weekly_fires_only_on_listed_days() {
        // Mon/Wed/Fri
        let rule = ScheduleRule::Weekly { days: vec![1, 3, 5] };
        assert!(!rule.is_scheduled_on(date(2026, 1, 4))); // Sunday
        assert!(rule.is_scheduled_on(date(2026, 1, 5))); // Monday
        assert!(!rule.is_scheduled_on(date(2026, 1, 6))); // Tuesday
        assert!(rule.is_scheduled_on(date(2026, 1, 7))); // Wednesday
        assert!(!rule.is_scheduled_on(date(2026, 1, 8))); // Thursday
        assert!(rule.is_scheduled_on(date(2026, 1, 9))); // Friday
        assert!(!rule.is_scheduled_on(date(2026, 1, 10))); // Saturday
    }

    #[test]
    fn weekly_requires_at_least_one_day() {
        let rule = ScheduleRule::Weekly { days: vec![] };
        assert!(matches!(
            rule.validate(),
            Err(ValidationError::EmptyWeeklySchedule)
        ));
    }

    #[test]
    fn weekday_index_out_of_range_rejected() {
        let rule = ScheduleRule::Weekly { days: vec![1, 7] };
        assert!(matches!(
            rule.validate(),
            Err(ValidationError::WeekdayOutOfRange(7))
        ));
    }

    #[test]
    fn label_formats() {
        assert_eq!(ScheduleRule::Daily.label(), "Daily");
        let rule = ScheduleRule::Weekly { days: vec![1, 3, 5] };
        assert_eq!(rule.label(), "Mon/Wed/Fri");
        let rule = ScheduleRule::Weekly { days: vec![2, 4] };
        assert_eq!(rule.label(), "Tue/Thu");
    }

    #[test]
    fn rule_serialization() {
        let rule = ScheduleRule::Weekly { days: vec![2, 4] };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"frequency\":\"weekly\""));
        let decoded: ScheduleRule = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, rule);

        let daily: ScheduleRule = serde_json::from_str(r#"{"frequency":"daily"}"#).unwrap();
        assert_eq!(daily, ScheduleRule::Daily);
    }

    #[test]
    fn inactive_items_are_never_scheduled() {
        let mut item = TrackedItem::new("Rust Book", ScheduleRule::Daily, date(2026, 1, 1));
        assert!(item.scheduled_on(date(2026, 1, 2)));
        item.active = false;
        assert!(!item.scheduled_on(date(2026, 1, 2)));
    }

    #[test]
    fn day_load_counts_scheduled_and_completed() {
        let today = date(2026, 1, 9); // Friday
        let mut daily = TrackedItem::new("Daily course", ScheduleRule::Daily, date(2026, 1, 1));
        daily.last_completed_on = Some(today);
        let mwf = TrackedItem::new(
            "MWF course",
            ScheduleRule::Weekly { days: vec![1, 3, 5] },
            date(2026, 1, 1),
        );
        let tt = TrackedItem::new(
            "TT course",
            ScheduleRule::Weekly { days: vec![2, 4] },
            date(2026, 1, 1),
        );

        let items = [daily, mwf, tt];
        let load = day_load(&items, today);
        assert_eq!(load.scheduled, 2); // daily + MWF, not TT
        assert_eq!(load.completed, 1); // only the daily one was done today
    }
}
