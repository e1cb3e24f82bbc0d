//! Timing measurements for a single workload phase.

use std::time::Duration;

/// Unit a workload's per-call figure is reported in.
///
/// Fixed per workload rather than auto-scaled: the cheap path is
/// meaningful in nanoseconds, the expensive path in milliseconds, and a
/// run that drifts across a unit boundary should be visible as an
/// outlying number, not silently rescaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerCallUnit {
    /// Report per-call time in nanoseconds.
    Nanos,
    /// Report per-call time in milliseconds.
    Millis,
}

impl PerCallUnit {
    /// Unit suffix used by the report renderer.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Millis => "ms",
        }
    }
}

/// Timing of one completed workload phase.
///
/// Built by the harness after each timed loop; the denominator is the
/// configured call count, never the warmup count.
#[derive(Clone, Debug)]
pub struct Measurement {
    /// Workload label, e.g. `fast_sum8`.
    pub label: String,
    /// Wall-clock time for the whole timed loop.
    pub total: Duration,
    /// Number of calls the timed loop executed.
    pub calls: u64,
    /// Unit for the per-call figure.
    pub unit: PerCallUnit,
}

impl Measurement {
    /// Total elapsed time in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }

    /// Per-call time in this measurement's [`PerCallUnit`].
    pub fn per_call(&self) -> f64 {
        match self.unit {
            PerCallUnit::Nanos => self.total.as_nanos() as f64 / self.calls as f64,
            PerCallUnit::Millis => self.total_ms() / self.calls as f64,
        }
    }
}
