//! Relational sense attached to a dependency version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReqProvError, ReqProvResult};

/// Comparison sense of a dependency expression
///
/// `Any` is the unconstrained expression and is always paired with an empty
/// version. The other five variants are the only meaningful combinations of
/// the less/equal/greater relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sense {
    #[default]
    Any,
    Less,
    LessEq,
    Equal,
    GreaterEq,
    Greater,
}

impl Sense {
    /// RPM flag bit for "less than"
    pub const FLAG_LESS: u32 = 1 << 1;
    /// RPM flag bit for "greater than"
    pub const FLAG_GREATER: u32 = 1 << 2;
    /// RPM flag bit for "equal"
    pub const FLAG_EQUAL: u32 = 1 << 3;
    /// Bits of an RPM flag word that carry the sense
    pub const FLAG_MASK: u32 = 0x0f;

    /// All constrained senses
    pub const CONSTRAINED: [Sense; 5] = [
        Sense::Less,
        Sense::LessEq,
        Sense::Equal,
        Sense::GreaterEq,
        Sense::Greater,
    ];

    /// Check if this is the unconstrained sense
    pub fn is_any(self) -> bool {
        self == Sense::Any
    }

    pub fn includes_less(self) -> bool {
        matches!(self, Sense::Less | Sense::LessEq)
    }

    pub fn includes_equal(self) -> bool {
        matches!(self, Sense::LessEq | Sense::Equal | Sense::GreaterEq)
    }

    pub fn includes_greater(self) -> bool {
        matches!(self, Sense::Greater | Sense::GreaterEq)
    }

    /// Check if `self` is a strict narrowing of `other`
    ///
    /// `=` narrows both `<=` and `>=`; `<` narrows `<=` and `>` narrows `>=`.
    pub fn narrows(self, other: Sense) -> bool {
        matches!(
            (self, other),
            (Sense::Equal, Sense::LessEq)
                | (Sense::Equal, Sense::GreaterEq)
                | (Sense::Less, Sense::LessEq)
                | (Sense::Greater, Sense::GreaterEq)
        )
    }

    /// Decode the sense bits of an RPM dependency flag word
    pub fn from_flags(flags: u32) -> ReqProvResult<Self> {
        const LE: u32 = Sense::FLAG_LESS | Sense::FLAG_EQUAL;
        const GE: u32 = Sense::FLAG_GREATER | Sense::FLAG_EQUAL;

        match flags & Self::FLAG_MASK {
            0 => Ok(Sense::Any),
            Self::FLAG_LESS => Ok(Sense::Less),
            LE => Ok(Sense::LessEq),
            Self::FLAG_EQUAL => Ok(Sense::Equal),
            GE => Ok(Sense::GreaterEq),
            Self::FLAG_GREATER => Ok(Sense::Greater),
            _ => Err(ReqProvError::InvalidSenseFlags { flags }),
        }
    }

    /// Encode as RPM sense flag bits
    pub fn flags(self) -> u32 {
        match self {
            Sense::Any => 0,
            Sense::Less => Self::FLAG_LESS,
            Sense::LessEq => Self::FLAG_LESS | Self::FLAG_EQUAL,
            Sense::Equal => Self::FLAG_EQUAL,
            Sense::GreaterEq => Self::FLAG_GREATER | Self::FLAG_EQUAL,
            Sense::Greater => Self::FLAG_GREATER,
        }
    }

    /// Get the canonical operator token
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Any => "",
            Sense::Less => "<",
            Sense::LessEq => "<=",
            Sense::Equal => "=",
            Sense::GreaterEq => ">=",
            Sense::Greater => ">",
        }
    }
}

impl FromStr for Sense {
    type Err = ReqProvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Sense::Any),
            "<=" | "=<" => Ok(Sense::LessEq),
            "<" => Ok(Sense::Less),
            "==" | "=" => Ok(Sense::Equal),
            ">=" | "=>" => Ok(Sense::GreaterEq),
            ">" => Ok(Sense::Greater),
            other => Err(ReqProvError::InvalidSenseToken {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
