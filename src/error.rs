use std::fmt;

use crate::canvas::session::SessionError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Top-level error for embedding applications that wire the whole crate
/// together.
#[derive(Debug)]
pub enum CanvasError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Session(SessionError),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Config(err) => write!(f, "configuration error: {}", err),
            CanvasError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            CanvasError::Session(err) => write!(f, "session error: {}", err),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Config(err) => Some(err),
            CanvasError::Telemetry(err) => Some(err),
            CanvasError::Session(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CanvasError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for CanvasError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<SessionError> for CanvasError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}
