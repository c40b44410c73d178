//! Induction configuration
//!
//! All options are optional; an empty YAML document yields the defaults.
//!
//! ```yaml
//! tie_break: match_size     # or column_order
//! min_support: 1
//! parallel: true
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deterministic order used to settle descriptors with equal positive hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Larger match set first, then attribute name, then value ordering
    #[default]
    MatchSize,
    /// Larger match set first, then column position, then first-seen value
    ColumnOrder,
}

/// Options recognized by the induction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Induction Config")]
pub struct InductionConfig {
    /// Ordering applied between equally scored descriptors
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Minimum number of uncovered class objects a descriptor must admit
    #[serde(default = "default_min_support")]
    pub min_support: usize,

    /// Fan out tables, classes and descriptor scoring on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_min_support() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for InductionConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            min_support: default_min_support(),
            parallel: true,
        }
    }
}

impl InductionConfig {
    /// Parse a config from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        let config: InductionConfig = if yaml.trim().is_empty() {
            InductionConfig::default()
        } else {
            serde_norway::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => Error::Config(format!("{}: {}", path.display(), other)),
        })
    }

    /// Reject settings the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(Error::Config("min_support must be at least 1".into()));
        }
        Ok(())
    }

    /// Same settings, sequential execution
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
