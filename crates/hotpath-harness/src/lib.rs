//! Warmup, timing, and reporting harness for the hotpath benchmark toolkit.
//!
//! A [`Harness`] owns an ordered registry of [`Workload`]s. Running it
//! warms every workload up, then times each one over its fixed call
//! count with a monotonic clock and returns a [`Report`] of
//! [`Measurement`]s. Scheduler preemption and clock jitter are accepted
//! measurement noise, not error conditions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod measure;
pub mod report;
pub mod runner;
pub mod workloads;

pub use hotpath_core::{Sink, WorkloadError};

pub use config::HarnessConfig;
pub use measure::{Measurement, PerCallUnit};
pub use report::Report;
pub use runner::Harness;
pub use workloads::{FastSum, SlowMix, Workload};
