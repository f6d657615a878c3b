//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use reqprov_core::types::{Requirement, Sense};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Build `count` version strings mixing epochs, releases and alpha segments
pub fn version_strings(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let base = format!("{}.{}.{}", i % 7, i % 13, i % 5);
            match i % 4 {
                0 => base,
                1 => format!("{}-alt{}", base, i % 3),
                2 => format!("{}:{}-{}", i % 2, base, i % 9),
                _ => format!("{}rc{}", base, i % 4),
            }
        })
        .collect()
}

/// Build `count` requirements cycling through every sense
pub fn requirements(count: usize) -> Vec<Requirement> {
    const SENSES: [Sense; 6] = [
        Sense::Any,
        Sense::Less,
        Sense::LessEq,
        Sense::Equal,
        Sense::GreaterEq,
        Sense::Greater,
    ];

    version_strings(count)
        .into_iter()
        .enumerate()
        .map(|(i, version)| match SENSES[i % SENSES.len()] {
            Sense::Any => Requirement::any(),
            sense => Requirement::new(sense, version).expect("generated version is never empty"),
        })
        .collect()
}
