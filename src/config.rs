use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::error::{validate_min_confidence, validate_min_support};
use crate::types::MiningError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] MiningError),
}

/// Which itemsets association rules are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// Every multi-item frequent itemset found at any level.
    #[default]
    AllFrequent,
    /// Only the multi-item itemsets of the last productive level.
    LastLevel,
}

// Serializable, comparable, explicit defaults.
// Thresholds arrive here already parsed; `validate` decides whether they
// are usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    pub min_support_count: usize,
    pub min_confidence: f64,
    #[serde(default)]
    pub rule_source: RuleSource,
}

impl MiningConfig {
    pub fn new(min_support_count: usize, min_confidence: f64) -> Self {
        Self {
            min_support_count,
            min_confidence,
            rule_source: RuleSource::default(),
        }
    }

    pub fn v0() -> Self {
        Self::new(2, 0.5)
    }

    pub fn with_rule_source(mut self, rule_source: RuleSource) -> Self {
        self.rule_source = rule_source;
        self
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        validate_min_support(self.min_support_count)?;
        validate_min_confidence(self.min_confidence)?;
        Ok(())
    }

    /// Parse and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: MiningConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self::v0()
    }
}
