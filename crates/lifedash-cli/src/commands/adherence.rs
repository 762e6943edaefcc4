use clap::Subcommand;
use lifedash_core::error::Result;
use lifedash_core::{AdherenceAnalyzer, AdherenceDay, AdherenceStatus, Database};

use super::parse_date_or_today;

#[derive(Subcommand)]
pub enum AdherenceAction {
    /// Record one day's dose counts
    Log {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Doses taken
        #[arg(long)]
        taken: u32,
        /// Doses scheduled
        #[arg(long)]
        scheduled: u32,
    },
    /// Adherence report over stored days
    Report {
        /// Earliest date to include (YYYY-MM-DD); defaults to 30 days back
        #[arg(long)]
        since: Option<String>,
    },
}

pub fn run(action: AdherenceAction) -> Result<()> {
    let db = Database::open()?;

    match action {
        AdherenceAction::Log {
            date,
            taken,
            scheduled,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let status = AdherenceStatus::classify(taken, scheduled);
            db.record_adherence(AdherenceDay { date, status })?;
            println!("logged {date}: {}", status.as_str());
        }
        AdherenceAction::Report { since } => {
            let since = match since.as_deref() {
                Some(s) => parse_date_or_today(Some(s))?,
                None => chrono::Local::now().date_naive() - chrono::Days::new(30),
            };
            let days = db.adherence_since(since)?;
            tracing::debug!(days = days.len(), "loaded adherence days");
            let report = AdherenceAnalyzer::new().analyze(days);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
