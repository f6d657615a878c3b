//! Validated `sense + version` dependency expression.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Sense;
use crate::config::CompareConfig;
use crate::error::{ReqProvError, ReqProvResult};

/// Version half of a dependency expression (`>= 1:2.0-3`, or nothing)
///
/// The sense is `Any` if and only if the version is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RequirementRepr", into = "RequirementRepr")]
pub struct Requirement {
    sense: Sense,
    version: String,
}

#[derive(Serialize, Deserialize)]
struct RequirementRepr {
    #[serde(default)]
    sense: Sense,
    #[serde(default)]
    version: String,
}

/// Check that a sense and a version string agree on being constrained
pub fn check_pair(sense: Sense, version: &str) -> ReqProvResult<()> {
    if sense.is_any() == version.is_empty() {
        Ok(())
    } else {
        Err(ReqProvError::SenseVersionMismatch {
            sense,
            version: version.to_string(),
        })
    }
}

impl Requirement {
    /// Create a new requirement, validating the sense/version pairing
    pub fn new(sense: Sense, version: impl Into<String>) -> ReqProvResult<Self> {
        let version = version.into();
        check_pair(sense, &version)?;
        Ok(Self { sense, version })
    }

    /// The unconstrained expression
    pub fn any() -> Self {
        Self {
            sense: Sense::Any,
            version: String::new(),
        }
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_any(&self) -> bool {
        self.sense.is_any()
    }

    /// Check if the version is a set expression under the configured marker
    pub fn is_set(&self, config: &CompareConfig) -> bool {
        config.set_payload(&self.version).is_some()
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::any()
    }
}

impl FromStr for Requirement {
    type Err = ReqProvError;

    /// Parse `"<op> <version>"`, e.g. `">= 1.0-1"` or `"=2:3.1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let op_len = input
            .find(|c: char| !matches!(c, '<' | '=' | '>'))
            .unwrap_or(input.len());
        let (op, version) = input.split_at(op_len);
        let version = version.trim();
        // `> = 1.0` splits into two operator tokens
        if version.starts_with(|c: char| matches!(c, '<' | '=' | '>')) {
            let stray = version.split_whitespace().next().unwrap_or(version);
            return Err(ReqProvError::InvalidSenseToken {
                token: format!("{} {}", op, stray),
            });
        }
        Requirement::new(Sense::from_str(op)?, version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return Ok(());
        }
        write!(f, "{} {}", self.sense, self.version)
    }
}

impl TryFrom<RequirementRepr> for Requirement {
    type Error = ReqProvError;

    fn try_from(repr: RequirementRepr) -> Result<Self, Self::Error> {
        Requirement::new(repr.sense, repr.version)
    }
}

impl From<Requirement> for RequirementRepr {
    fn from(req: Requirement) -> Self {
        Self {
            sense: req.sense,
            version: req.version,
        }
    }
}
