//! Engine configuration.
//!
//! A small JSON document supplying the reference data the classifier and
//! importer need:
//!
//! ```json
//! {
//!   "as_of": "2025-12-12",
//!   "submitted_units": ["1559/379", "1559/454"],
//!   "header_synonyms": { "unitNo": ["room no"] }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{Classifier, Rule};
use crate::codec::{CsvField, HeaderSynonyms};
use crate::models::SubmissionRegistry;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reference data for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// "Today" for vaccine expiry comparisons
    pub as_of: NaiveDate,
    /// Units with submitted paperwork
    #[serde(default)]
    pub submitted_units: Vec<String>,
    /// Extra header spellings, merged over the built-in table
    #[serde(default)]
    pub header_synonyms: HashMap<CsvField, Vec<String>>,
    /// Replacement rule cascade; the standard rules when absent
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
}

impl EngineConfig {
    /// Minimal config with no submissions and the standard rules.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            submitted_units: Vec::new(),
            header_synonyms: HashMap::new(),
            rules: None,
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::info!(
            as_of = %config.as_of,
            submitted_units = config.submitted_units.len(),
            custom_rules = config.rules.is_some(),
            "loaded engine config"
        );
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(rules) = &self.rules {
            if rules.is_empty() {
                return Err(ConfigError::Invalid(
                    "rules must not be empty; omit the key for the standard cascade".into(),
                ));
            }
        }
        if let Some(unit) = self.submitted_units.iter().find(|u| u.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "blank submitted unit: {unit:?}"
            )));
        }
        Ok(())
    }

    pub fn classifier(&self) -> Classifier {
        match &self.rules {
            Some(rules) => Classifier::with_rules(self.as_of, rules.clone()),
            None => Classifier::new(self.as_of),
        }
    }

    pub fn submission_registry(&self) -> SubmissionRegistry {
        self.submitted_units.iter().cloned().collect()
    }

    pub fn header_synonyms(&self) -> HeaderSynonyms {
        let mut synonyms = HeaderSynonyms::new();
        synonyms.extend(&self.header_synonyms);
        synonyms
    }
}
