//! reqprov benchmarking suite
//!
//! Benchmarks for version ordering and requirement comparison, plus the
//! shared criterion configuration and input generators.

pub mod common;

pub use common::*;
