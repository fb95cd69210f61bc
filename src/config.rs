use crate::models::{ScoringWeights, TierThresholds};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSettings {
    /// Fixed jitter seed; every request replays the same sequence when set
    pub seed: Option<u64>,
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_over_budget_penalty")]
    pub over_budget_penalty: f64,
    #[serde(default = "default_above_midpoint_penalty")]
    pub above_midpoint_penalty: f64,
    #[serde(default = "default_identity_bonus")]
    pub identity_bonus: f64,
    #[serde(default = "default_purpose_bonus")]
    pub purpose_bonus: f64,
    #[serde(default = "default_quick_meal_bonus")]
    pub quick_meal_bonus: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            over_budget_penalty: default_over_budget_penalty(),
            above_midpoint_penalty: default_above_midpoint_penalty(),
            identity_bonus: default_identity_bonus(),
            purpose_bonus: default_purpose_bonus(),
            quick_meal_bonus: default_quick_meal_bonus(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            over_budget_penalty: config.over_budget_penalty,
            above_midpoint_penalty: config.above_midpoint_penalty,
            identity_bonus: config.identity_bonus,
            purpose_bonus: config.purpose_bonus,
            quick_meal_bonus: config.quick_meal_bonus,
        }
    }
}

fn default_over_budget_penalty() -> f64 { 1.5 }
fn default_above_midpoint_penalty() -> f64 { 0.5 }
fn default_identity_bonus() -> f64 { 1.0 }
fn default_purpose_bonus() -> f64 { 1.0 }
fn default_quick_meal_bonus() -> f64 { 0.8 }

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_recommended_score")]
    pub recommended_score: f64,
    #[serde(default = "default_strong_score")]
    pub strong_score: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            recommended_score: default_recommended_score(),
            strong_score: default_strong_score(),
        }
    }
}

impl From<&ThresholdsConfig> for TierThresholds {
    fn from(config: &ThresholdsConfig) -> Self {
        Self {
            recommended_score: config.recommended_score,
            strong_score: config.strong_score,
        }
    }
}

fn default_recommended_score() -> f64 { 6.5 }
fn default_strong_score() -> f64 { 8.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// TOML file replacing the builtin halls
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CANTEEN__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CANTEEN__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CANTEEN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = TierThresholds::from(&ThresholdsConfig::default());
        assert_eq!(thresholds.recommended_score, 6.5);
        assert_eq!(thresholds.strong_score, 8.0);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_file() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[logging]\nformat = \"pretty\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.format, LogFormat::Pretty);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let result = Config::builder()
            .add_source(File::from_str(
                "[logging]\nformat = \"xml\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Settings>();

        assert!(result.is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[engine]\nseed = 42\n[engine.weights]\nidentity_bonus = 2.0\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.engine.seed, Some(42));
        assert_eq!(settings.engine.weights.identity_bonus, 2.0);
        assert_eq!(settings.engine.weights.quick_meal_bonus, 0.8);
        assert_eq!(settings.server.port, 8080);
        assert!(settings.catalog.path.is_none());
    }
}
