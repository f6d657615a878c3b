//! Requirement comparator
//!
//! Entry point used by dependency graph simplifiers. Validates the
//! sense/version pairing of each side, orders the two versions (point or
//! set-valued) and interprets the ordering for the relation kind at hand.

use std::cmp::Ordering;

use reqprov_core::config::CompareConfig;
use reqprov_core::error::ReqProvResult;
use reqprov_core::order::{NoSetSupport, RpmVersionOrder, SetOrder, VersionOrder};
use reqprov_core::types::requirement::check_pair;
use reqprov_core::types::{RelationKind, Requirement, Sense, Verdict};
use tracing::{debug, trace};

use crate::evr::{compare_evr, VersionComparison};
use crate::sense::resolve;

/// Compares dependency expressions of the same package
///
/// Holds the version and set ordering primitives plus the configuration.
/// Comparisons never mutate the comparator, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RequirementComparator<V = RpmVersionOrder, S = NoSetSupport> {
    versions: V,
    sets: S,
    config: CompareConfig,
}

impl RequirementComparator {
    /// Create a comparator with RPM version ordering and no set support
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: VersionOrder, S: SetOrder> RequirementComparator<V, S> {
    /// Create a comparator from explicit primitives and a validated configuration
    pub fn with_parts(versions: V, sets: S, config: CompareConfig) -> ReqProvResult<Self> {
        config.validate()?;
        Ok(Self {
            versions,
            sets,
            config,
        })
    }

    /// Replace the version ordering primitive
    pub fn with_version_order<V2: VersionOrder>(self, versions: V2) -> RequirementComparator<V2, S> {
        RequirementComparator {
            versions,
            sets: self.sets,
            config: self.config,
        }
    }

    /// Replace the set ordering primitive
    pub fn with_set_order<S2: SetOrder>(self, sets: S2) -> RequirementComparator<V, S2> {
        RequirementComparator {
            versions: self.versions,
            sets,
            config: self.config,
        }
    }

    /// Replace the configuration, rejecting values the comparator cannot work with
    pub fn with_config(mut self, config: CompareConfig) -> ReqProvResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two `(version, sense)` pairs for the given relation kind
    ///
    /// A sense must come with a non-empty version and an empty version with
    /// `Sense::Any`; anything else is a caller bug and is returned as an
    /// error rather than folded into a verdict.
    pub fn compare(
        &self,
        kind: RelationKind,
        version1: &str,
        sense1: Sense,
        version2: &str,
        sense2: Sense,
    ) -> ReqProvResult<Verdict> {
        if let Err(err) = check_pair(sense1, version1).and_then(|()| check_pair(sense2, version2)) {
            debug!(%kind, %err, "rejected dependency expression");
            return Err(err);
        }
        Ok(self.compare_unchecked(kind, version1, sense1, version2, sense2))
    }

    /// Compare two already validated requirements
    pub fn compare_requirements(&self, kind: RelationKind, first: &Requirement, second: &Requirement) -> Verdict {
        self.compare_unchecked(
            kind,
            first.version(),
            first.sense(),
            second.version(),
            second.sense(),
        )
    }

    /// Compare using RPM header tag and dependency flag words
    pub fn compare_tagged(
        &self,
        tag: i32,
        version1: &str,
        flags1: u32,
        version2: &str,
        flags2: u32,
    ) -> ReqProvResult<Verdict> {
        let kind = RelationKind::from_tag(tag)?;
        let sense1 = Sense::from_flags(flags1)?;
        let sense2 = Sense::from_flags(flags2)?;
        self.compare(kind, version1, sense1, version2, sense2)
    }

    fn compare_unchecked(
        &self,
        kind: RelationKind,
        version1: &str,
        sense1: Sense,
        version2: &str,
        sense2: Sense,
    ) -> Verdict {
        let cmp = match (sense1.is_any(), sense2.is_any()) {
            (false, false) => match self.order_versions(version1, version2) {
                Some(cmp) => cmp,
                None => return Verdict::Incomparable,
            },
            // a versioned expression outranks a bare one
            (false, true) => VersionComparison::primary(Ordering::Greater),
            (true, false) => VersionComparison::primary(Ordering::Less),
            (true, true) => VersionComparison::primary(Ordering::Equal),
        };

        let verdict = resolve(kind.polarity(), cmp, sense1, sense2);
        if kind.is_exclusion() {
            -verdict
        } else {
            verdict
        }
    }

    fn order_versions(&self, version1: &str, version2: &str) -> Option<VersionComparison> {
        match (self.config.set_payload(version1), self.config.set_payload(version2)) {
            (Some(set1), Some(set2)) => self.sets.compare_sets(set1, set2).map(VersionComparison::primary),
            (None, None) => compare_evr(&self.versions, &self.config.evr, version1, version2),
            _ => {
                trace!(%version1, %version2, "set-valued and point versions never compare");
                None
            },
        }
    }
}

/// Compare two `(version, sense)` pairs with the default comparator
pub fn compare_version_requirement(
    kind: RelationKind,
    version1: &str,
    sense1: Sense,
    version2: &str,
    sense2: Sense,
) -> ReqProvResult<Verdict> {
    RequirementComparator::new().compare(kind, version1, sense1, version2, sense2)
}
