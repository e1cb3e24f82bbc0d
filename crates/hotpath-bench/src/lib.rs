//! Benchmark profiles and utilities for the hotpath toolkit.
//!
//! Provides pre-built [`HarnessConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: the full-scale run (1M cheap calls, 100
//!   expensive calls of 1M mixing rounds each)
//! - [`quick_profile`]: the same shape at a fraction of the scale, for
//!   smoke runs and CI

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hotpath_harness::HarnessConfig;

/// Build the reference profile: 1,000,000 cheap calls and 100 expensive
/// calls of 1,000,000 mixing rounds, after 10,000 warmup rounds per
/// workload.
pub fn reference_profile() -> HarnessConfig {
    HarnessConfig::default()
}

/// Build a quick profile: the reference shape scaled down to finish in
/// well under a second.
///
/// Keeps the fast/slow asymmetry (the slow path still does thousands of
/// mixing rounds per call) so report output stays representative.
pub fn quick_profile() -> HarnessConfig {
    HarnessConfig {
        warmup_rounds: 1_000,
        fast_calls: 100_000,
        slow_calls: 10,
        slow_inner_iterations: 100_000,
        warmup_inner_iterations: 1_000,
    }
}
