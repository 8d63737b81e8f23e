use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::str::FromStr;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/providers.json".to_string()
}

/// Per-dimension preference weights. Kept in configuration so priorities can
/// change without a redeploy.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub religion: i32,
    #[serde(default = "default_weight")]
    pub ethnicity: i32,
    #[serde(default = "default_weight")]
    pub gender: i32,
    #[serde(default = "default_weight")]
    pub language: i32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            religion: default_weight(),
            ethnicity: default_weight(),
            gender: default_weight(),
            language: default_weight(),
        }
    }
}

fn default_weight() -> i32 {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Matches scoring below this are dropped; 0 disables the floor.
    #[serde(default)]
    pub min_score: i32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with THERAPAIR_)
    ///
    /// A malformed numeric environment value is logged and ignored in favor
    /// of the configured (or default) value; a bad override never fails a
    /// request.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.apply_env_overrides();

        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        override_from_env("THERAPAIR_WEIGHT_RELIGION", &mut self.weights.religion);
        override_from_env("THERAPAIR_WEIGHT_ETHNICITY", &mut self.weights.ethnicity);
        override_from_env("THERAPAIR_WEIGHT_GENDER", &mut self.weights.gender);
        override_from_env("THERAPAIR_WEIGHT_LANGUAGE", &mut self.weights.language);
        override_from_env("THERAPAIR_MIN_SCORE", &mut self.matching.min_score);
        override_from_env("THERAPAIR_MAX_RESULTS", &mut self.matching.max_results);

        if let Ok(path) = std::env::var("THERAPAIR_DATASET_PATH") {
            if !path.is_empty() {
                self.dataset.path = path;
            }
        }
    }
}

/// Overwrite `target` with a parsed environment value, keeping the current
/// value (with a warning) when the variable is set but malformed.
fn override_from_env<T: FromStr + Copy>(name: &str, target: &mut T) {
    let Ok(raw) = std::env::var(name) else {
        return;
    };

    match raw.parse::<T>() {
        Ok(value) => *target = value,
        Err(_) => warn!(
            var = name,
            value = %raw,
            "ignoring malformed numeric override, keeping default"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.religion, 3);
        assert_eq!(weights.ethnicity, 3);
        assert_eq!(weights.gender, 3);
        assert_eq!(weights.language, 3);
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.min_score, 0);
        assert_eq!(matching.max_results, 20);
    }

    #[test]
    fn test_default_dataset_path() {
        let settings = Settings::default();
        assert_eq!(settings.dataset.path, "data/providers.json");
    }

    #[test]
    fn test_malformed_override_keeps_value() {
        let mut value = 3;
        std::env::set_var("THERAPAIR_TEST_BAD_WEIGHT", "not-a-number");
        override_from_env("THERAPAIR_TEST_BAD_WEIGHT", &mut value);
        std::env::remove_var("THERAPAIR_TEST_BAD_WEIGHT");
        assert_eq!(value, 3);
    }

    #[test]
    fn test_valid_override_applies() {
        let mut value = 3;
        std::env::set_var("THERAPAIR_TEST_GOOD_WEIGHT", "7");
        override_from_env("THERAPAIR_TEST_GOOD_WEIGHT", &mut value);
        std::env::remove_var("THERAPAIR_TEST_GOOD_WEIGHT");
        assert_eq!(value, 7);
    }
}
