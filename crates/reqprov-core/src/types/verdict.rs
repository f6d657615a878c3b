//! Four-way outcome of comparing two dependency expressions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Result of comparing dependency expression 1 against expression 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Expression 1 implies expression 2; expression 2 can be dropped
    FirstStronger,
    /// Both expressions are equivalent
    Equal,
    /// Expression 2 implies expression 1; expression 1 can be dropped
    SecondStronger,
    /// No safe ordering exists; keep both
    Incomparable,
}

impl Verdict {
    /// Legacy integer code: +1, 0, -1, or -2 for incomparable
    pub fn code(self) -> i32 {
        match self {
            Verdict::FirstStronger => 1,
            Verdict::Equal => 0,
            Verdict::SecondStronger => -1,
            Verdict::Incomparable => -2,
        }
    }

    /// Inverse of [`Verdict::code`]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Verdict::FirstStronger),
            0 => Some(Verdict::Equal),
            -1 => Some(Verdict::SecondStronger),
            -2 => Some(Verdict::Incomparable),
            _ => None,
        }
    }

    pub fn is_comparable(self) -> bool {
        self != Verdict::Incomparable
    }
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::FirstStronger,
            Ordering::Equal => Verdict::Equal,
            Ordering::Less => Verdict::SecondStronger,
        }
    }
}

impl Neg for Verdict {
    type Output = Verdict;

    fn neg(self) -> Verdict {
        match self {
            Verdict::FirstStronger => Verdict::SecondStronger,
            Verdict::SecondStronger => Verdict::FirstStronger,
            other => other,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::FirstStronger => "first-stronger",
            Verdict::Equal => "equal",
            Verdict::SecondStronger => "second-stronger",
            Verdict::Incomparable => "incomparable",
        };
        f.write_str(s)
    }
}
