//! Configuration management for the resume profiler

use crate::error::{Result, ResumeProfilerError};
use crate::processing::scoring;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub report: ReportConfig,
}

/// Blend weights for the composite score. The shipped defaults
/// (0.6/0.2/0.2) are the engine's fixed policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub coverage_weight: f64,
    pub diversity_weight: f64,
    pub keyword_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of top roles given the detailed fit explanation.
    pub top_roles: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Text,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                coverage_weight: scoring::DEFAULT_COVERAGE_WEIGHT,
                diversity_weight: scoring::DEFAULT_DIVERSITY_WEIGHT,
                keyword_weight: scoring::DEFAULT_KEYWORD_WEIGHT,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
            report: ReportConfig { top_roles: 3 },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeProfilerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeProfilerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-profiler")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_engine_policy() {
        let config = Config::default();
        assert_eq!(config.scoring.coverage_weight, 0.6);
        assert_eq!(config.scoring.diversity_weight, 0.2);
        assert_eq!(config.scoring.keyword_weight, 0.2);
        assert_eq!(config.report.top_roles, 3);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring.coverage_weight, config.scoring.coverage_weight);
        assert_eq!(parsed.output.format, config.output.format);
    }
}
