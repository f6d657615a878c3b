//! Ordering primitives the comparator is built on.
//!
//! - [`VersionOrder`] orders single version, epoch or release strings.
//! - [`SetOrder`] orders set-valued versions by inclusion.
//!
//! Both are implemented for plain closures so callers can plug in their own
//! orderings without a wrapper type.

mod vercmp;

use std::cmp::Ordering;

pub use vercmp::RpmVersionOrder;

/// Total order over version, epoch and release strings
pub trait VersionOrder: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Inclusion order over set-valued version payloads (marker already stripped)
///
/// `Greater` means `a` covers everything `b` does and more. `None` reports
/// payloads that cannot be compared, including malformed input.
pub trait SetOrder: Send + Sync {
    fn compare_sets(&self, a: &str, b: &str) -> Option<Ordering>;
}

impl<F> VersionOrder for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

impl<F> SetOrder for F
where
    F: Fn(&str, &str) -> Option<Ordering> + Send + Sync,
{
    fn compare_sets(&self, a: &str, b: &str) -> Option<Ordering> {
        self(a, b)
    }
}

/// Set ordering for builds without a set codec: nothing is comparable
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSetSupport;

impl SetOrder for NoSetSupport {
    fn compare_sets(&self, _a: &str, _b: &str) -> Option<Ordering> {
        None
    }
}
