//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Weight of each scorer in the recommendation score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_proximity_weight")]
    pub proximity: f64,

    #[serde(default = "default_participant_similarity_weight")]
    pub participant_similarity: f64,

    #[serde(default = "default_format_familiarity_weight")]
    pub format_familiarity: f64,

    #[serde(default = "default_frequency_compatibility_weight")]
    pub frequency_compatibility: f64,

    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

fn default_proximity_weight() -> f64 {
    0.3
}

fn default_participant_similarity_weight() -> f64 {
    0.3
}

fn default_format_familiarity_weight() -> f64 {
    0.2
}

fn default_frequency_compatibility_weight() -> f64 {
    0.1
}

fn default_availability_weight() -> f64 {
    0.1
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            proximity: default_proximity_weight(),
            participant_similarity: default_participant_similarity_weight(),
            format_familiarity: default_format_familiarity_weight(),
            frequency_compatibility: default_frequency_compatibility_weight(),
            availability: default_availability_weight(),
        }
    }
}

impl ScoringWeights {
    fn as_array(&self) -> [f64; 5] {
        [
            self.proximity,
            self.participant_similarity,
            self.format_familiarity,
            self.frequency_compatibility,
            self.availability,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Validate that every weight is non-negative and the total is 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::ValidationError(
                "Scoring weights must be non-negative".to_string(),
            ));
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(ConfigError::ValidationError(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                sum
            )));
        }

        Ok(())
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Number of recommendations returned when the caller gives no limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    #[serde(default)]
    pub weights: ScoringWeights,
}

fn default_limit() -> usize {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_limit: default_limit(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            scoring: ScoringConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or use defaults if it doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.weights.validate()?;

        if self.scoring.default_limit == 0 {
            return Err(ConfigError::ValidationError(
                "Default limit must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
