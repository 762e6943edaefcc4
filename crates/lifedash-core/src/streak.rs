//! Consecutive-day streak calculation.
//!
//! A streak is the number of consecutive qualifying days ending at a
//! reference date. A day qualifies when its completion ratio
//! (completed / total) meets the threshold, 0.8 by default. The scan walks
//! strictly backward from the reference date and tolerates no gaps: the
//! first missing or sub-threshold day ends the streak.
//!
//! All inputs are materialized values; the functions are pure and never
//! fail. Missing or inconsistent data degrades to a lower count.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default qualifying ratio: at least 80% completion counts as a streak day.
pub const DEFAULT_STREAK_THRESHOLD: f64 = 0.8;

/// One historical day of completion tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionDayRecord {
    pub date: NaiveDate,
    pub completed_count: u32,
    pub total_count: u32,
}

impl CompletionDayRecord {
    pub fn new(date: NaiveDate, completed_count: u32, total_count: u32) -> Self {
        Self {
            date,
            completed_count,
            total_count,
        }
    }

    /// Completed fraction for the day. A day with nothing scheduled
    /// (`total_count == 0`) is treated as ratio 0 and so never qualifies.
    pub fn completion_ratio(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.completed_count as f64 / self.total_count as f64
    }
}

/// Per-day completion records keyed by date. Insertion order is irrelevant;
/// later inserts for the same date replace earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionHistory {
    days: BTreeMap<NaiveDate, CompletionDayRecord>,
}

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, record: CompletionDayRecord) {
        self.days.insert(record.date, record);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&CompletionDayRecord> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &CompletionDayRecord> {
        self.days.values()
    }
}

impl FromIterator<CompletionDayRecord> for CompletionHistory {
    fn from_iter<I: IntoIterator<Item = CompletionDayRecord>>(iter: I) -> Self {
        let mut history = Self::new();
        for record in iter {
            history.upsert(record);
        }
        history
    }
}

/// Display tier for a streak length, from the dashboard's badge ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    /// No active streak.
    None,
    /// 1-2 days.
    Spark,
    /// 3-6 days.
    Building,
    /// 7-13 days.
    Strong,
    /// 14 days or more.
    Elite,
}

impl StreakTier {
    pub fn from_days(days: u32) -> Self {
        match days {
            0 => StreakTier::None,
            1..=2 => StreakTier::Spark,
            3..=6 => StreakTier::Building,
            7..=13 => StreakTier::Strong,
            _ => StreakTier::Elite,
        }
    }

    /// Number of flame marks the widgets render for this tier.
    pub fn flame_count(&self) -> u32 {
        match self {
            StreakTier::None => 0,
            StreakTier::Spark => 1,
            StreakTier::Building => 2,
            StreakTier::Strong => 3,
            StreakTier::Elite => 4,
        }
    }
}

/// Derived streak figures for one history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakReport {
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
    pub tier: StreakTier,
}

/// Streak calculator with a configurable qualifying threshold.
#[derive(Debug, Clone, Copy)]
pub struct StreakAnalyzer {
    /// Minimum completion ratio for a day to count (ties qualify).
    pub threshold: f64,
}

impl Default for StreakAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STREAK_THRESHOLD,
        }
    }
}

impl StreakAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Length of the consecutive qualifying run ending at `as_of`.
    ///
    /// Scans backward one day at a time. A date missing from the history is
    /// a gap and ends the scan, so an empty history or a missing `as_of`
    /// yields 0. This finds only the streak anchored at `as_of`, not the
    /// maximal streak anywhere in history.
    pub fn current_streak(&self, history: &CompletionHistory, as_of: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut expected = as_of;
        loop {
            let Some(record) = history.get(expected) else {
                break;
            };
            if record.completion_ratio() < self.threshold {
                break;
            }
            streak += 1;
            match expected.pred_opt() {
                Some(prev) => expected = prev,
                None => break,
            }
        }
        streak
    }

    /// Longest run of qualifying consecutive days anywhere in the history.
    pub fn longest_streak(&self, history: &CompletionHistory) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut prev_date: Option<NaiveDate> = None;

        for record in history.iter() {
            let contiguous = prev_date
                .and_then(|d| d.succ_opt())
                .is_some_and(|next| next == record.date);
            if record.completion_ratio() >= self.threshold {
                run = if contiguous { run + 1 } else { 1 };
            } else {
                run = 0;
            }
            longest = longest.max(run);
            prev_date = Some(record.date);
        }
        longest
    }

    /// Current and longest streak plus display tier, as the widgets need.
    pub fn report(&self, history: &CompletionHistory, as_of: NaiveDate) -> StreakReport {
        let current = self.current_streak(history, as_of);
        StreakReport {
            current_streak_days: current,
            longest_streak_days: self.longest_streak(history).max(current),
            tier: StreakTier::from_days(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, completed: u32, total: u32) -> CompletionDayRecord {
        CompletionDayRecord::new(date(y, m, d), completed, total)
    }

    #[test]
    fn empty_history_is_zero() {
        let analyzer = StreakAnalyzer::new();
        let history = CompletionHistory::new();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 0);
        assert_eq!(analyzer.longest_streak(&history), 0);
    }

    #[test]
    fn missing_as_of_day_is_zero() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [record(2026, 1, 2, 6, 6)].into_iter().collect();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 0);
    }

    #[test]
    fn five_day_run_counts_five() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 5, 6),
            record(2026, 1, 1, 6, 6),
            record(2025, 12, 31, 6, 6),
            record(2025, 12, 30, 5, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 5);
    }

    #[test]
    fn gap_stops_scan_even_with_older_data() {
        let analyzer = StreakAnalyzer::new();
        // 2025-12-29 missing; 12-28 exists but must not be reached.
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 5, 6),
            record(2026, 1, 1, 6, 6),
            record(2025, 12, 31, 6, 6),
            record(2025, 12, 30, 5, 6),
            record(2025, 12, 28, 6, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 5);
    }

    #[test]
    fn sub_threshold_day_breaks_streak() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 3, 6), // 0.5 < 0.8
            record(2026, 1, 1, 6, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 1);
    }

    #[test]
    fn exact_threshold_qualifies() {
        let analyzer = StreakAnalyzer::with_threshold(0.8);
        let history: CompletionHistory = [record(2026, 1, 3, 4, 5)].into_iter().collect();
        // 4/5 == 0.8 exactly; ties count.
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 1);
    }

    #[test]
    fn zero_total_day_breaks_streak() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 0, 0),
            record(2026, 1, 1, 6, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.current_streak(&history, date(2026, 1, 3)), 1);
    }

    #[test]
    fn longest_streak_finds_older_run() {
        let analyzer = StreakAnalyzer::new();
        // Current run of 1, older run of 3.
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 2, 6),
            record(2026, 1, 1, 6, 6),
            record(2025, 12, 31, 5, 6),
            record(2025, 12, 30, 6, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.longest_streak(&history), 3);
    }

    #[test]
    fn longest_streak_resets_on_gap() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [
            record(2026, 1, 5, 6, 6),
            record(2026, 1, 4, 6, 6),
            // 1/3 missing
            record(2026, 1, 2, 6, 6),
            record(2026, 1, 1, 6, 6),
            record(2025, 12, 31, 6, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(analyzer.longest_streak(&history), 3);
    }

    #[test]
    fn report_tier_ladder() {
        assert_eq!(StreakTier::from_days(0), StreakTier::None);
        assert_eq!(StreakTier::from_days(1), StreakTier::Spark);
        assert_eq!(StreakTier::from_days(2), StreakTier::Spark);
        assert_eq!(StreakTier::from_days(3), StreakTier::Building);
        assert_eq!(StreakTier::from_days(6), StreakTier::Building);
        assert_eq!(StreakTier::from_days(7), StreakTier::Strong);
        assert_eq!(StreakTier::from_days(13), StreakTier::Strong);
        assert_eq!(StreakTier::from_days(14), StreakTier::Elite);
        assert_eq!(StreakTier::from_days(90), StreakTier::Elite);
    }

    #[test]
    fn flame_count_grows_with_tier() {
        assert_eq!(StreakTier::None.flame_count(), 0);
        assert_eq!(StreakTier::Spark.flame_count(), 1);
        assert_eq!(StreakTier::Building.flame_count(), 2);
        assert_eq!(StreakTier::Strong.flame_count(), 3);
        assert_eq!(StreakTier::Elite.flame_count(), 4);
        // Longer streaks never render fewer flames.
        let mut prev = 0;
        for days in 0..30 {
            let flames = StreakTier::from_days(days).flame_count();
            assert!(flames >= prev);
            prev = flames;
        }
    }

    #[test]
    fn report_longest_never_below_current() {
        let analyzer = StreakAnalyzer::new();
        let history: CompletionHistory = [
            record(2026, 1, 3, 6, 6),
            record(2026, 1, 2, 6, 6),
        ]
        .into_iter()
        .collect();
        let report = analyzer.report(&history, date(2026, 1, 3));
        assert_eq!(report.current_streak_days, 2);
        assert_eq!(report.longest_streak_days, 2);
        assert_eq!(report.tier, StreakTier::Spark);
    }

    #[test]
    fn upsert_replaces_same_date() {
        let mut history = CompletionHistory::new();
        history.upsert(record(2026, 1, 3, 2, 6));
        history.upsert(record(2026, 1, 3, 6, 6));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(date(2026, 1, 3)).unwrap().completed_count, 6);
    }
}
