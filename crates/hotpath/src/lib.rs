//! hotpath: native call-overhead microbenchmarks.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the hotpath sub-crates. For most users, adding `hotpath` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hotpath::prelude::*;
//!
//! // Scaled-down counts so this doctest stays fast; the defaults are
//! // the full-scale reference profile.
//! let config = HarnessConfig {
//!     warmup_rounds: 10,
//!     fast_calls: 1_000,
//!     slow_calls: 4,
//!     slow_inner_iterations: 100,
//!     warmup_inner_iterations: 10,
//! };
//!
//! let harness = Harness::reference(config).unwrap();
//! let report = harness.run();
//!
//! assert_eq!(report.measurements().len(), 2);
//! assert_eq!(report.measurements()[0].label, "fast_sum8");
//! assert_eq!(report.measurements()[0].calls, 1_000);
//! println!("{report}");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hotpath-core` | Workload functions, `Sink`, error types |
//! | [`harness`] | `hotpath-harness` | Config, workload trait, harness, report |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Workload functions, sink, and error types (`hotpath-core`).
pub use hotpath_core as types;

/// Configuration, the workload trait, the harness, and report
/// rendering (`hotpath-harness`).
pub use hotpath_harness as harness;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use hotpath_core::{fast_sum8, mix64, slow_compute, Sink, WorkloadError};
    pub use hotpath_harness::{
        FastSum, Harness, HarnessConfig, Measurement, PerCallUnit, Report, SlowMix, Workload,
    };
}
