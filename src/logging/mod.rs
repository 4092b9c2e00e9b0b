//! Diagnostic logging to disk.
//!
//! The TUI owns the terminal, so `tracing` output is written to a daily file
//! named `spinguard_<date>.log` in the configured log directory (default:
//! `~/.local/share/spinguard/logs/`). `RUST_LOG` overrides the configured
//! level when set.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path on success.
///
/// Logging is best effort: if the directory or file cannot be created the
/// demo runs without a subscriber.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let dir = expand_home(&config.log_dir);
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}

fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("spinguard_{}.log", date.format("%Y-%m-%d"))
}

/// Expand a leading `~` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some(rest) => rest.trim_start_matches(['/', '\\']),
        None => return PathBuf::from(dir),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => Path::new(".").join(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "spinguard_2024-03-09.log");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/x"), PathBuf::from("/var/log/x"));
        assert_eq!(expand_home("relative/logs"), PathBuf::from("relative/logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
            assert_eq!(expand_home("~"), home.join(""));
        }
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert_eq!(init(&cfg), None);
    }
}
