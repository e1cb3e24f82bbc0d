//! Error types for the hotpath benchmark toolkit.
//!
//! The workload functions themselves are total and cannot fail; errors
//! only arise when assembling a harness from a configuration.

use std::error::Error;
use std::fmt;

/// Errors detected while configuring or registering workloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkloadError {
    /// A workload was configured with a call count of zero.
    ///
    /// Per-call time is total elapsed divided by the call count, so a
    /// zero count has no defined measurement.
    ZeroCalls {
        /// Label of the offending workload.
        label: String,
    },
    /// A workload with the same label is already registered.
    DuplicateWorkload {
        /// The label that collided.
        label: String,
    },
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCalls { label } => {
                write!(f, "workload '{label}' has a call count of zero")
            }
            Self::DuplicateWorkload { label } => {
                write!(f, "workload '{label}' is already registered")
            }
        }
    }
}

impl Error for WorkloadError {}
