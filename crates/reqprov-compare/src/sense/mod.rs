//! Sense subsumption
//!
//! Combines a version ordering with the sense of each expression. A require
//! expression is a demand the installed version must meet, so the narrower
//! one is stronger. A provide expression is an offer, so the wider one is
//! stronger. [`Polarity::orient`] applies that flip wherever it matters.

use std::cmp::Ordering;

use reqprov_core::types::{Polarity, Sense, Verdict};

use crate::evr::VersionComparison;

/// Decide which of two expressions subsumes the other
pub fn resolve(polarity: Polarity, cmp: VersionComparison, sense1: Sense, sense2: Sense) -> Verdict {
    match cmp.primary {
        Ordering::Equal => resolve_same(polarity, cmp.release, sense1, sense2),
        Ordering::Greater => resolve_above(polarity, sense1, sense2),
        Ordering::Less => -resolve_above(polarity, sense2, sense1),
    }
}

/// Both expressions name the same version, up to a one-sided release
fn resolve_same(polarity: Polarity, release: Ordering, sense1: Sense, sense2: Sense) -> Verdict {
    if sense1 == sense2 {
        // foo = 1.0-1 is narrower than foo = 1.0 for requires and provides alike
        if sense1.includes_equal() {
            return Verdict::from(release);
        }
        // foo > 1.0 excludes all of 1.0, foo > 1.0-1 admits 1.0-2
        return polarity.orient(-Verdict::from(release));
    }

    if sense1.narrows(sense2) {
        if sense1 == Sense::Equal {
            return match polarity {
                Polarity::Require if release != Ordering::Less => Verdict::FirstStronger,
                Polarity::Provide if release != Ordering::Greater => Verdict::SecondStronger,
                _ => Verdict::Incomparable,
            };
        }
        return polarity.orient(Verdict::FirstStronger);
    }

    if sense2.narrows(sense1) {
        if sense2 == Sense::Equal {
            return match polarity {
                Polarity::Require if release != Ordering::Greater => Verdict::SecondStronger,
                Polarity::Provide if release != Ordering::Less => Verdict::FirstStronger,
                _ => Verdict::Incomparable,
            };
        }
        return polarity.orient(Verdict::SecondStronger);
    }

    Verdict::Incomparable
}

/// Expression 1 names a strictly higher version than expression 2
fn resolve_above(polarity: Polarity, sense1: Sense, sense2: Sense) -> Verdict {
    // foo = 2.0 is stronger than a bare foo
    if sense2.is_any() {
        return Verdict::FirstStronger;
    }

    // expression 2 reaches up to expression 1's version: foo = 2.0 vs foo >= 1.0
    if !sense1.includes_less() && sense2.includes_greater() {
        return polarity.orient(Verdict::FirstStronger);
    }

    // expression 1 reaches down to expression 2's version: foo <= 2.0 vs foo = 1.0
    if !sense2.includes_greater() && sense1.includes_less() {
        return polarity.orient(Verdict::SecondStronger);
    }

    Verdict::Incomparable
}
