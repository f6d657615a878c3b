//! Core data types for dependency expression comparison.
//!
//! This module provides the fundamental types used throughout reqprov:
//! - Sense of a versioned dependency (`<`, `<=`, `=`, `>=`, `>`)
//! - Relation kinds and their require/provide polarity
//! - Validated dependency expressions and EVR triples
//! - The four-way comparison verdict

pub mod evr;
pub mod relation;
pub mod requirement;
pub mod sense;
pub mod verdict;

// Re-export all public types
pub use evr::Evr;
pub use relation::{Polarity, RelationKind};
pub use requirement::Requirement;
pub use sense::Sense;
pub use verdict::Verdict;
