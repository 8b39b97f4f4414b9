// peruse/src/config.rs

//! Scanner configuration injected into every cursor at construction.

use crate::numeric::Alternation;
use serde::{Deserialize, Serialize};

/// Numeric literal formats a [`Cursor`](crate::Cursor) recognizes.
///
/// The default holds the standard alternations, which are `const` values, so
/// every cursor built with `ScanConfig::default()` shares them without any
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_integer")]
    pub integer: Alternation,
    #[serde(default = "default_float")]
    pub float: Alternation,
}

fn default_integer() -> Alternation {
    Alternation::INTEGER
}

fn default_float() -> Alternation {
    Alternation::FLOAT
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            integer: Alternation::INTEGER,
            float: Alternation::FLOAT,
        }
    }
}

impl ScanConfig {
    /// Replace the integer alternation.
    pub fn with_integer(mut self, integer: impl Into<Alternation>) -> Self {
        self.integer = integer.into();
        self
    }

    /// Replace the float alternation.
    pub fn with_float(mut self, float: impl Into<Alternation>) -> Self {
        self.float = float.into();
        self
    }

    /// Parse a configuration from JSON. Missing fields take the defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
