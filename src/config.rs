use crate::models::SocialCategory;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where the snapshot of candidates and internships comes from. With no
/// path configured the built-in sample dataset is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_top_k")]
    pub max_top_k: u16,
    /// Social categories granted the +0.2 affirmative-action component
    #[serde(default = "default_preferred_categories")]
    pub preferred_categories: Vec<SocialCategory>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_top_k: default_max_top_k(),
            preferred_categories: default_preferred_categories(),
        }
    }
}

fn default_max_top_k() -> u16 { 100 }

fn default_preferred_categories() -> Vec<SocialCategory> {
    vec![
        SocialCategory::Obc,
        SocialCategory::Sc,
        SocialCategory::St,
        SocialCategory::Ews,
    ]
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_sector_weight")]
    pub sector: f64,
    #[serde(default = "default_eligibility_weight")]
    pub eligibility: f64,
    #[serde(default = "default_boost_weight")]
    pub boost: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            location: default_location_weight(),
            sector: default_sector_weight(),
            eligibility: default_eligibility_weight(),
            boost: default_boost_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 0.30 }
fn default_location_weight() -> f64 { 0.20 }
fn default_sector_weight() -> f64 { 0.20 }
fn default_eligibility_weight() -> f64 { 0.20 }
fn default_boost_weight() -> f64 { 0.10 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERN_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERN_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("INTERN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("INTERN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skill, 0.30);
        assert_eq!(weights.location, 0.20);
        assert_eq!(weights.sector, 0.20);
        assert_eq!(weights.eligibility, 0.20);
        assert_eq!(weights.boost, 0.10);
    }

    #[test]
    fn test_default_matching_settings() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.max_top_k, 100);
        assert_eq!(matching.preferred_categories.len(), 4);
        assert!(!matching
            .preferred_categories
            .contains(&SocialCategory::General));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
