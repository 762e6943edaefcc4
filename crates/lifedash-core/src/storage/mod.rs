mod config;
pub mod database;

pub use config::Config;
pub use database::{Database, Domain};

use std::path::PathBuf;

/// Returns `~/.config/lifedash[-dev]/` based on LIFEDASH_ENV.
///
/// Set LIFEDASH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEDASH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifedash-dev")
    } else {
        base_dir.join("lifedash")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
