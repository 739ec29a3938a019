use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::canvas::session::SelectionPolicy;

/// Distinguishes runtime behavior for different stages of the embedding
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an embedding application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub session: SessionSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CANVAS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("CANVAS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let snapshot_path = env::var("CANVAS_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("decision-canvas-session.json"));

        let minimum_selected = match env::var("CANVAS_MIN_ARCHETYPES") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMinimumSelection { value: raw })?,
            Err(_) => SelectionPolicy::default().minimum,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            session: SessionSettings {
                snapshot_path,
                selection_policy: SelectionPolicy {
                    minimum: minimum_selected,
                },
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the session snapshot lives and how many archetypes must stay
/// selected.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub snapshot_path: PathBuf,
    pub selection_policy: SelectionPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinimumSelection { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinimumSelection { value } => {
                write!(
                    f,
                    "CANVAS_MIN_ARCHETYPES must be a non-negative integer, got '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("CANVAS_ENV");
        env::remove_var("CANVAS_LOG_LEVEL");
        env::remove_var("CANVAS_SNAPSHOT_PATH");
        env::remove_var("CANVAS_MIN_ARCHETYPES");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.session.snapshot_path,
            PathBuf::from("decision-canvas-session.json")
        );
        assert_eq!(config.session.selection_policy.minimum, 1);
    }

    #[test]
    fn rejects_non_numeric_selection_minimum() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CANVAS_MIN_ARCHETYPES", "lots");
        let result = AppConfig::load();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidMinimumSelection { .. })
        ));
        reset_env();
    }

    #[test]
    fn reads_selection_minimum_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CANVAS_MIN_ARCHETYPES", "2");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.session.selection_policy.minimum, 2);
        reset_env();
    }
}
