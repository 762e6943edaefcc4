pub mod adherence;
pub mod config;
pub mod schedule;
pub mod streak;
pub mod water;

use chrono::NaiveDate;
use lifedash_core::error::{CoreError, Result};

/// Parse a `YYYY-MM-DD` date argument, defaulting to today.
pub fn parse_date_or_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| CoreError::Custom(format!("invalid date '{s}': {e}"))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
