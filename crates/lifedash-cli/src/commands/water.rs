use clap::Subcommand;
use lifedash_core::error::Result;
use lifedash_core::{Config, Database};
use serde::Serialize;

use super::parse_date_or_today;

#[derive(Subcommand)]
pub enum WaterAction {
    /// Log one glass of water
    Log {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show today's count against the goal
    Status {
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Serialize)]
struct WaterStatus {
    date: chrono::NaiveDate,
    glasses: u32,
    goal: u32,
    complete: bool,
}

pub fn run(action: WaterAction) -> Result<()> {
    let db = Database::open()?;
    let goal = Config::load_or_default().goals.daily_water_glasses;

    match action {
        WaterAction::Log { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let glasses = db.log_water(date)?;
            println!("{glasses}/{goal} glasses");
        }
        WaterAction::Status { date } => {
            let date = parse_date_or_today(date.as_deref())?;
            let glasses = db.water_count(date)?;
            let status = WaterStatus {
                date,
                glasses,
                goal,
                complete: glasses >= goal,
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
