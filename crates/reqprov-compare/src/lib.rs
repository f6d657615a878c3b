//! Version requirement comparison for dependency graph simplification
//!
//! This crate decides whether one versioned dependency expression implies
//! another for the same package, so that redundant require, provide,
//! conflict and obsolete edges can be dropped without changing resolution.

pub mod evr;
pub mod requirement;
pub mod sense;

// Re-export main types
pub use evr::{compare_evr, VersionComparison};
pub use requirement::{compare_version_requirement, RequirementComparator};
pub use sense::resolve;

pub use reqprov_core::{
    CompareConfig, Polarity, RelationKind, ReqProvError, ReqProvResult, Requirement, Sense,
    Verdict,
};
