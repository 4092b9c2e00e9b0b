//! Loading and saving `config.toml`.
//!
//! The file lives at `<config_dir>/spinguard/config.toml` unless the
//! `SPINGUARD_CONFIG` environment variable points somewhere else.

pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, DemoConfig, ErrorPolicy, LoggingConfig, SpinnerConfig};

const CONFIG_ENV: &str = "SPINGUARD_CONFIG";

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spinguard")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Read a config file, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    if config.spinner.frames.is_empty() {
        anyhow::bail!("{}: spinner.frames must not be empty", path.display());
    }
    Ok(config)
}

/// Write `config` to the default location and return the path used.
pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("spinguard-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let cfg = load_config_from(&scratch_path("absent.toml")).unwrap();
        assert_eq!(cfg.demo.latency_ms, 1200);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved/config.toml");
        let mut cfg = AppConfig::default();
        cfg.demo.failure_message = "out of dough".into();
        cfg.demo.error_policy = ErrorPolicy::Propagate;
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.demo.failure_message, "out of dough");
        assert_eq!(loaded.demo.error_policy, ErrorPolicy::Propagate);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_empty_frames() {
        let path = scratch_path("empty-frames.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[spinner]\nframes = []\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("spinner.frames"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_malformed_file() {
        let path = scratch_path("broken.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[demo\nlatency_ms = ").unwrap();

        assert!(load_config_from(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
