//! Daily health checklist.
//!
//! Builds the six-item daily checklist the health widget renders (water,
//! weight, exercise, sleep, medications, nutrition) from a snapshot of the
//! day's tracking data, and converts it into a [`CompletionDayRecord`] for
//! the streak engine.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::WeekWindow;
use crate::streak::CompletionDayRecord;

/// A logged meal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealLog {
    pub date: NaiveDate,
    pub meal_type: String,
}

/// Snapshot of one day's health tracking, assembled by the caller from
/// whatever the tracking surfaces recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthDayInput {
    pub water_glasses: u32,
    pub water_goal: u32,
    /// Dates of weight log entries; any entry within the day's week counts.
    pub weight_log_dates: Vec<NaiveDate>,
    /// Completion flags for the day's planned exercises.
    pub exercises: Vec<bool>,
    /// Dates of sleep log entries; an entry on the day itself counts.
    pub sleep_log_dates: Vec<NaiveDate>,
    pub medication_doses_taken: u32,
    pub medication_doses_scheduled: u32,
    pub meals: Vec<MealLog>,
    /// Distinct meal types required for the nutrition item.
    pub min_meal_types: u32,
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub done: bool,
}

/// The assembled checklist for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChecklist {
    pub date: NaiveDate,
    pub items: Vec<ChecklistItem>,
}

impl DailyChecklist {
    /// Evaluate the checklist for `date` from the day's snapshot.
    pub fn build(date: NaiveDate, input: &HealthDayInput) -> Self {
        let week = WeekWindow::containing(date);

        let water_done = input.water_goal > 0 && input.water_glasses >= input.water_goal;
        let weight_done = input.weight_log_dates.iter().any(|&d| week.contains(d));
        let exercise_done = !input.exercises.is_empty() && input.exercises.iter().all(|&done| done);
        let sleep_done = input.sleep_log_dates.contains(&date);
        let meds_done = input.medication_doses_taken >= input.medication_doses_scheduled;
        let meal_types: BTreeSet<String> = input
            .meals
            .iter()
            .filter(|meal| meal.date == date)
            .map(|meal| meal.meal_type.to_lowercase())
            .collect();
        let nutrition_done = meal_types.len() as u32 >= input.min_meal_types;

        Self {
            date,
            items: vec![
                ChecklistItem { name: "Water intake".into(), done: water_done },
                ChecklistItem { name: "Weight log".into(), done: weight_done },
                ChecklistItem { name: "Exercise".into(), done: exercise_done },
                ChecklistItem { name: "Sleep tracking".into(), done: sleep_done },
                ChecklistItem { name: "Medications".into(), done: meds_done },
                ChecklistItem { name: "Nutrition log".into(), done: nutrition_done },
            ],
        }
    }

    pub fn completed(&self) -> u32 {
        self.items.iter().filter(|item| item.done).count() as u32
    }

    pub fn total(&self) -> u32 {
        self.items.len() as u32
    }

    /// The day record this checklist contributes to the streak history.
    pub fn to_day_record(&self) -> CompletionDayRecord {
        CompletionDayRecord::new(self.date, self.completed(), self.total())
    }
}
