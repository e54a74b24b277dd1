//! Sequencing engine configuration.
//!
//! # Responsibility
//! - Describe the tunable placement policy and extra area aliases.
//! - Load and validate JSON configuration files.
//!
//! # Invariants
//! - Every field has a default; `{}` yields the built-in configuration.
//! - A validated config never produces an out-of-range placement index.

use crate::sequencing::position::{
    default_keyword_rules, KeywordRule, RangeScaling, DEFAULT_LOW_CONFIDENCE_THRESHOLD,
    DEFAULT_REFERENCE_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Errors from loading or validating [`EngineConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    ThresholdOutOfRange(f64),
    EmptyKeywordRule { index: usize },
    InvertedRange { index: usize, start: usize, end: usize },
    ZeroReferenceLength,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid engine config: {err}"),
            Self::ThresholdOutOfRange(value) => write!(
                f,
                "low_confidence_threshold must be within [0, 1], got {value}"
            ),
            Self::EmptyKeywordRule { index } => {
                write!(f, "keyword rule #{index} has no non-blank terms")
            }
            Self::InvertedRange { index, start, end } => write!(
                f,
                "keyword rule #{index} has inverted range [{start}, {end})"
            ),
            Self::ZeroReferenceLength => write!(f, "reference_length must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Extra `label -> key` aliases layered over the built-in table.
    pub area_aliases: BTreeMap<String, String>,
    /// Ordered keyword fallback table.
    pub keyword_rules: Vec<KeywordRule>,
    pub low_confidence_threshold: f64,
    pub range_scaling: RangeScaling,
    /// Curriculum length the keyword ranges assume under proportional scaling.
    pub reference_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            area_aliases: BTreeMap::new(),
            keyword_rules: default_keyword_rules(),
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            range_scaling: RangeScaling::Fixed,
            reference_length: DEFAULT_REFERENCE_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(
                self.low_confidence_threshold,
            ));
        }
        if self.reference_length == 0 {
            return Err(ConfigError::ZeroReferenceLength);
        }
        for (index, rule) in self.keyword_rules.iter().enumerate() {
            if rule.terms.iter().all(|term| term.trim().is_empty()) {
                return Err(ConfigError::EmptyKeywordRule { index });
            }
            let (start, end) = rule.range;
            if start > end {
                return Err(ConfigError::InvertedRange { index, start, end });
            }
        }
        Ok(())
    }
}
