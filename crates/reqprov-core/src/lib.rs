//! # reqprov-core
//!
//! Core types and primitives shared by the reqprov crates.
//!
//! This crate provides:
//! - Sense, RelationKind, Requirement and Verdict types for dependency expressions
//! - The Evr triple parsed from `epoch:version-release` strings
//! - The RPM version ordering primitive and the set ordering contract
//! - ReqProvError enum for unified error handling
//! - CompareConfig loaded from TOML
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Sense, Requirement, Verdict, etc.)
//! - `order`: Version and set ordering primitives
//! - `config`: Comparator configuration
//! - `error`: Error types and result aliases

pub mod config;
pub mod error;
pub mod order;
pub mod types;

// Re-export commonly used types
pub use config::{CompareConfig, EvrSyntax};
pub use error::{ReqProvError, ReqProvResult};
pub use order::{NoSetSupport, RpmVersionOrder, SetOrder, VersionOrder};
pub use types::{Evr, Polarity, RelationKind, Requirement, Sense, Verdict};
