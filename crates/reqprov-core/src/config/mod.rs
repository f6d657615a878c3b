//! Comparator configuration loaded from TOML.
//!
//! Every key is optional and defaults to the RPM conventions:
//!
//! ```toml
//! set-prefix = "set:"
//!
//! [evr]
//! epoch-separator = ":"
//! release-separator = "-"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ReqProvError, ReqProvResult};

/// Settings shared by all comparisons of one comparator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CompareConfig {
    /// Marker that introduces a set-valued version
    pub set_prefix: String,

    /// Separators used to split point versions
    pub evr: EvrSyntax,
}

/// Separators of an `epoch:version-release` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EvrSyntax {
    pub epoch_separator: char,
    pub release_separator: char,
}

impl CompareConfig {
    pub const DEFAULT_SET_PREFIX: &'static str = "set:";

    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> ReqProvResult<Self> {
        let config: CompareConfig = toml::from_str(input).map_err(|e| ReqProvError::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> ReqProvResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReqProvError::io(format!("Failed to read {}", path.display()), e))?;
        Self::from_toml_str(&content)
    }

    /// The payload of a set-valued version, or `None` for a point version
    pub fn set_payload<'a>(&self, version: &'a str) -> Option<&'a str> {
        version.strip_prefix(self.set_prefix.as_str())
    }

    /// Check values the comparator cannot work with
    pub fn validate(&self) -> ReqProvResult<()> {
        if self.set_prefix.is_empty() {
            return Err(ReqProvError::ConfigValidation {
                field: "set-prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.evr.validate()
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            set_prefix: Self::DEFAULT_SET_PREFIX.to_string(),
            evr: EvrSyntax::default(),
        }
    }
}

impl EvrSyntax {
    fn validate(&self) -> ReqProvResult<()> {
        for (field, sep) in [
            ("evr.epoch-separator", self.epoch_separator),
            ("evr.release-separator", self.release_separator),
        ] {
            if sep.is_ascii_alphanumeric() {
                return Err(ReqProvError::ConfigValidation {
                    field: field.to_string(),
                    reason: format!("'{}' would split inside version segments", sep),
                });
            }
        }
        if self.epoch_separator == self.release_separator {
            return Err(ReqProvError::ConfigValidation {
                field: "evr".to_string(),
                reason: "epoch and release separators must differ".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EvrSyntax {
    fn default() -> Self {
        Self {
            epoch_separator: ':',
            release_separator: '-',
        }
    }
}
