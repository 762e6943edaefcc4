use clap::Subcommand;
use lifedash_core::error::{CoreError, Result};
use lifedash_core::{CompletionDayRecord, Config, Database, Domain, StreakAnalyzer};

use super::parse_date_or_today;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show the streak report for a domain
    Show {
        /// Tracking domain: tasks, health, or education
        #[arg(long)]
        domain: String,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
        /// Override the qualifying threshold from config
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Record one day's completion counts for a domain
    Log {
        #[arg(long)]
        domain: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        completed: u32,
        #[arg(long)]
        total: u32,
    },
}

fn parse_domain(s: &str) -> Result<Domain> {
    Domain::parse(s).ok_or_else(|| {
        CoreError::Custom(format!(
            "unknown domain '{s}' (expected tasks, health, or education)"
        ))
    })
}

pub fn run(action: StreakAction) -> Result<()> {
    let db = Database::open()?;

    match action {
        StreakAction::Show {
            domain,
            as_of,
            threshold,
        } => {
            let domain = parse_domain(&domain)?;
            let as_of = parse_date_or_today(as_of.as_deref())?;
            let threshold =
                threshold.unwrap_or_else(|| Config::load_or_default().streak.threshold);

            let history = db.history(domain)?;
            tracing::debug!(domain = domain.as_str(), days = history.len(), "loaded history");
            let report = StreakAnalyzer::with_threshold(threshold).report(&history, as_of);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StreakAction::Log {
            domain,
            date,
            completed,
            total,
        } => {
            let domain = parse_domain(&domain)?;
            let date = parse_date_or_today(date.as_deref())?;
            if completed > total {
                return Err(CoreError::Custom(format!(
                    "completed ({completed}) cannot exceed total ({total})"
                )));
            }
            db.record_day(domain, CompletionDayRecord::new(date, completed, total))?;
            println!("logged {} {date}: {completed}/{total}", domain.as_str());
        }
    }
    Ok(())
}
