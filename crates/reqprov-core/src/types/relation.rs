//! Relation kinds a dependency expression can appear in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Verdict;
use crate::error::{ReqProvError, ReqProvResult};

/// Kind of dependency relation being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Require,
    Provide,
    Conflict,
    Obsolete,
}

/// Direction in which a more specific expression counts as stronger
///
/// A narrower requirement is a stronger demand. A narrower provide is a
/// weaker offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Require,
    Provide,
}

impl RelationKind {
    /// RPM header tag of require versions
    pub const TAG_REQUIRE_VERSION: i32 = 1050;
    /// RPM header tag of conflict versions
    pub const TAG_CONFLICT_VERSION: i32 = 1055;
    /// RPM header tag of provide versions
    pub const TAG_PROVIDE_VERSION: i32 = 1113;
    /// RPM header tag of obsolete versions
    pub const TAG_OBSOLETE_VERSION: i32 = 1115;

    /// Map an RPM header tag to a relation kind
    pub fn from_tag(tag: i32) -> ReqProvResult<Self> {
        match tag {
            Self::TAG_REQUIRE_VERSION => Ok(RelationKind::Require),
            Self::TAG_PROVIDE_VERSION => Ok(RelationKind::Provide),
            Self::TAG_CONFLICT_VERSION => Ok(RelationKind::Conflict),
            Self::TAG_OBSOLETE_VERSION => Ok(RelationKind::Obsolete),
            _ => Err(ReqProvError::UnknownRelationTag { tag }),
        }
    }

    /// Get the RPM header tag for this relation kind
    pub fn tag(self) -> i32 {
        match self {
            RelationKind::Require => Self::TAG_REQUIRE_VERSION,
            RelationKind::Provide => Self::TAG_PROVIDE_VERSION,
            RelationKind::Conflict => Self::TAG_CONFLICT_VERSION,
            RelationKind::Obsolete => Self::TAG_OBSOLETE_VERSION,
        }
    }

    /// Polarity the sense resolver runs with for this kind
    pub fn polarity(self) -> Polarity {
        match self {
            RelationKind::Provide => Polarity::Provide,
            RelationKind::Require | RelationKind::Conflict | RelationKind::Obsolete => {
                Polarity::Require
            },
        }
    }

    /// Check if this kind excludes versions instead of demanding them
    ///
    /// The strongest exclusion covers the widest range, so verdicts for these
    /// kinds are the negation of the require verdict.
    pub fn is_exclusion(self) -> bool {
        matches!(self, RelationKind::Conflict | RelationKind::Obsolete)
    }

    /// Get the plural header name ("requires", "provides", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Require => "requires",
            RelationKind::Provide => "provides",
            RelationKind::Conflict => "conflicts",
            RelationKind::Obsolete => "obsoletes",
        }
    }
}

impl FromStr for RelationKind {
    type Err = ReqProvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requires" | "require" => Ok(RelationKind::Require),
            "provides" | "provide" => Ok(RelationKind::Provide),
            "conflicts" | "conflict" => Ok(RelationKind::Conflict),
            "obsoletes" | "obsolete" => Ok(RelationKind::Obsolete),
            _ => Err(ReqProvError::UnknownRelationKind { name: s.to_string() }),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Polarity {
    /// Orient a verdict computed in require terms for this polarity
    pub fn orient(self, verdict: Verdict) -> Verdict {
        match self {
            Polarity::Require => verdict,
            Polarity::Provide => -verdict,
        }
    }
}
