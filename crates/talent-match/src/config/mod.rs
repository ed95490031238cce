use std::env;
use std::fmt;

use crate::scoring::{ScoringWeights, WeightsError, DEFAULT_WEIGHTS};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let weights = ScoringWeights::new(
            weight_from_env("MATCH_WEIGHT_SKILLS", DEFAULT_WEIGHTS.skills())?,
            weight_from_env("MATCH_WEIGHT_EXPERIENCE", DEFAULT_WEIGHTS.experience())?,
            weight_from_env("MATCH_WEIGHT_EDUCATION", DEFAULT_WEIGHTS.education())?,
            weight_from_env("MATCH_WEIGHT_LOCATION", DEFAULT_WEIGHTS.location())?,
        )
        .map_err(ConfigError::Weights)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig { weights },
        })
    }
}

fn weight_from_env(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidWeight { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Category weights handed to the match scorer.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { var: &'static str, value: String },
    Weights(WeightsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { var, value } => {
                write!(f, "{var} must be a decimal number (found '{value}')")
            }
            ConfigError::Weights(err) => write!(f, "invalid scoring weights: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidWeight { .. } => None,
            ConfigError::Weights(err) => Some(err),
        }
    }
}
