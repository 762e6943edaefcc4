use clap::Subcommand;
use lifedash_core::error::{CoreError, Result};
use lifedash_core::ScheduleRule;
use serde::Serialize;

use super::parse_date_or_today;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Check whether a rule fires on a date
    Check {
        /// Rule kind: daily or weekly
        #[arg(long)]
        rule: String,
        /// Weekday indices for weekly rules, e.g. 1,3,5 (0=Sun..6=Sat)
        #[arg(long)]
        days: Option<String>,
        /// Date to check (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Serialize)]
struct CheckResult {
    date: chrono::NaiveDate,
    scheduled: bool,
    label: String,
}

fn parse_rule(kind: &str, days: Option<&str>) -> Result<ScheduleRule> {
    let rule = match kind {
        "daily" => ScheduleRule::Daily,
        "weekly" => {
            let days =
                days.ok_or_else(|| CoreError::Custom("weekly rules require --days".into()))?;
            let days = days
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CoreError::Custom(format!("invalid --days list: {e}")))?;
            ScheduleRule::Weekly { days }
        }
        other => {
            return Err(CoreError::Custom(format!(
                "unknown rule '{other}' (expected daily or weekly)"
            )))
        }
    };
    rule.validate()?;
    Ok(rule)
}

pub fn run(action: ScheduleAction) -> Result<()> {
    match action {
        ScheduleAction::Check { rule, days, date } => {
            let rule = parse_rule(&rule, days.as_deref())?;
            let date = parse_date_or_today(date.as_deref())?;
            let result = CheckResult {
                date,
                scheduled: rule.is_scheduled_on(date),
                label: rule.label(),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
