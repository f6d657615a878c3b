//! EVR triple comparison
//!
//! Orders two point versions by epoch, version and release, reporting a
//! release that is present on only one side as a separate tie-break instead
//! of folding it into the main ordering.

use std::cmp::Ordering;

use reqprov_core::config::EvrSyntax;
use reqprov_core::order::VersionOrder;
use reqprov_core::types::Evr;
use tracing::trace;

/// Outcome of ordering two version expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionComparison {
    /// Ordering of expression 1 relative to expression 2
    pub primary: Ordering,
    /// When `primary` is `Equal`, which side alone carries a release
    ///
    /// `Greater` if only expression 1 names a release, `Less` if only
    /// expression 2 does. Always `Equal` otherwise.
    pub release: Ordering,
}

impl VersionComparison {
    pub const fn new(primary: Ordering, release: Ordering) -> Self {
        Self { primary, release }
    }

    /// A comparison without release tie-break
    pub const fn primary(primary: Ordering) -> Self {
        Self::new(primary, Ordering::Equal)
    }

    /// The same comparison seen from the other side
    pub fn reverse(self) -> Self {
        Self::new(self.primary.reverse(), self.release.reverse())
    }
}

/// Compare two point versions `[epoch:]version[-release]`
///
/// Returns `None` when the two cannot be ordered: an epoch on one side only,
/// or a version ordering that disagrees with a non-equal epoch ordering.
pub fn compare_evr<V>(order: &V, syntax: &EvrSyntax, evr1: &str, evr2: &str) -> Option<VersionComparison>
where
    V: VersionOrder + ?Sized,
{
    let first = Evr::parse_with(evr1, syntax);
    let second = Evr::parse_with(evr2, syntax);

    let epoch = match (first.epoch(), second.epoch()) {
        (Some(e1), Some(e2)) => order.compare(e1, e2),
        (None, None) => Ordering::Equal,
        _ => {
            trace!(%evr1, %evr2, "epoch present on one side only");
            return None;
        },
    };

    let mut primary = order.compare(first.version(), second.version());
    if epoch != Ordering::Equal && primary != epoch {
        trace!(%evr1, %evr2, ?epoch, ?primary, "version order contradicts epoch order");
        return None;
    }

    let mut release = Ordering::Equal;
    if primary == Ordering::Equal {
        match (first.release(), second.release()) {
            (Some(r1), Some(r2)) => primary = order.compare(r1, r2),
            (Some(_), None) => release = Ordering::Greater,
            (None, Some(_)) => release = Ordering::Less,
            (None, None) => {},
        }
    }

    Some(VersionComparison::new(primary, release))
}
