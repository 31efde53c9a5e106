//! TOML-based extractor configuration.
//!
//! ```toml
//! min_gap_units = 900
//! validate = true
//! ```
//!
//! Every key is optional; an empty document yields the defaults, which
//! reproduce the plain [`crate::gaps`] behaviour.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gap extractor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapConfig {
    /// Drop gaps shorter than this many minimal units.
    #[serde(default)]
    pub min_gap_units: u64,
    /// Reject intervals whose start lies after their end.
    #[serde(default)]
    pub validate: bool,
}

impl GapConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
