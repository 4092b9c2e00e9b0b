//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the demo runs without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub spinner: SpinnerConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Spinner animation shown in the status bar while an action is busy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinnerConfig {
    #[serde(default = "default_frames")]
    pub frames: Vec<String>,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// What the status handler does with a failed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the error and resolve the action with the fallback label.
    #[default]
    Swallow,
    /// Report the error and hand it back to the caller.
    Propagate,
}

/// Behaviour of the simulated pizza-shop actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_message: default_failure_message(),
            error_policy: ErrorPolicy::default(),
            fallback_label: default_fallback_label(),
        }
    }
}

/// Diagnostic log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_frames() -> Vec<String> {
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_tick_ms() -> u64 {
    80
}
fn default_latency_ms() -> u64 {
    1200
}
fn default_failure_message() -> String {
    "oven is on fire".to_string()
}
fn default_fallback_label() -> String {
    "handled".to_string()
}
fn default_true() -> bool {
    true
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/spinguard/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.spinner.tick_ms, 80);
        assert_eq!(cfg.spinner.frames.len(), 10);
        assert_eq!(cfg.demo.error_policy, ErrorPolicy::Swallow);
        assert_eq!(cfg.demo.fallback_label, "handled");
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [spinner]
            frames = ["-", "\\", "|", "/"]

            [demo]
            error_policy = "propagate"
            latency_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.spinner.frames, vec!["-", "\\", "|", "/"]);
        assert_eq!(cfg.spinner.tick_ms, 80);
        assert_eq!(cfg.demo.error_policy, ErrorPolicy::Propagate);
        assert_eq!(cfg.demo.latency_ms, 10);
        assert_eq!(cfg.demo.failure_message, "oven is on fire");
    }

    #[test]
    fn test_serialize_roundtrips_policy() {
        let mut cfg = AppConfig::default();
        cfg.demo.error_policy = ErrorPolicy::Propagate;
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("error_policy = \"propagate\""));
    }
}
