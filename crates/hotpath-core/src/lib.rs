//! Workload functions and result sink for the hotpath benchmark toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the two reference workloads ([`fast_sum8`] and [`slow_compute`]),
//! the [`Sink`] accumulator that keeps their results live, and the
//! error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod sink;
pub mod workload;

pub use error::WorkloadError;
pub use sink::Sink;
pub use workload::{fast_sum8, mix64, slow_compute};
