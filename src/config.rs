//! Configuration for the mediascan database path.
//!
//! Resolution order (highest priority first):
//! 1. The `--db` CLI flag
//! 2. The `MEDIASCAN_DB` environment variable
//! 3. Default: `~/.mediascan/store.db`

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the database location
pub const DB_ENV_VAR: &str = "MEDIASCAN_DB";

/// Resolve the database path from the CLI flag, environment and default
pub fn db_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    resolve(flag, std::env::var_os(DB_ENV_VAR))
}

fn resolve(flag: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Some(path) = env {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".mediascan").join("store.db"))
}
