//! The [`Workload`] trait and the two reference workloads.
//!
//! A workload knows its label, its fixed call count, its reporting
//! unit, and how to execute its warmup and timed loops against a
//! [`Sink`]. The harness stays generic over the trait; anything with a
//! callable hot path can be registered alongside the built-ins.

use std::hint::black_box;

use hotpath_core::{fast_sum8, slow_compute, Sink};

use crate::config::HarnessConfig;
use crate::measure::PerCallUnit;

/// A timed unit of work.
///
/// Implementations must execute exactly [`calls()`](Workload::calls)
/// calls in [`run()`](Workload::run) and push every result into the
/// sink; the harness divides elapsed time by `calls()` to get the
/// per-call figure.
pub trait Workload {
    /// Label used for registration and in the report.
    fn label(&self) -> &str;

    /// Number of calls the timed loop executes.
    fn calls(&self) -> u64;

    /// Unit the per-call figure is reported in.
    fn unit(&self) -> PerCallUnit;

    /// Execute `rounds` untimed calls to reach steady state.
    fn warmup(&self, rounds: u32, sink: &mut Sink);

    /// Execute the timed loop: exactly `calls()` calls, results pushed
    /// into `sink`.
    fn run(&self, sink: &mut Sink);
}

/// The cheap workload: [`fast_sum8`] over the fixed inputs `1..=8`.
///
/// Each call is seven additions, so the measurement is dominated by
/// call overhead. Inputs and results are routed through `black_box`
/// so the loop cannot be folded to a constant.
#[derive(Clone, Debug)]
pub struct FastSum {
    calls: u64,
}

impl FastSum {
    /// Cheap workload with an explicit call count.
    pub fn new(calls: u64) -> Self {
        Self { calls }
    }

    /// Cheap workload with the call count from `config`.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.fast_calls)
    }
}

impl Workload for FastSum {
    fn label(&self) -> &str {
        "fast_sum8"
    }

    fn calls(&self) -> u64 {
        self.calls
    }

    fn unit(&self) -> PerCallUnit {
        PerCallUnit::Nanos
    }

    fn warmup(&self, rounds: u32, sink: &mut Sink) {
        for _ in 0..rounds {
            sink.push(black_box(fast_sum8(
                black_box(1),
                black_box(2),
                black_box(3),
                black_box(4),
                black_box(5),
                black_box(6),
                black_box(7),
                black_box(8),
            )));
        }
    }

    fn run(&self, sink: &mut Sink) {
        for _ in 0..self.calls {
            sink.push(black_box(fast_sum8(
                black_box(1),
                black_box(2),
                black_box(3),
                black_box(4),
                black_box(5),
                black_box(6),
                black_box(7),
                black_box(8),
            )));
        }
    }
}

/// The expensive workload: [`slow_compute`] with seed = call index.
///
/// Warmup uses a separate, much smaller inner iteration count so the
/// untimed phase settles branch predictors and clocks without rivaling
/// the timed phase.
#[derive(Clone, Debug)]
pub struct SlowMix {
    calls: u64,
    inner_iterations: u32,
    warmup_inner_iterations: u32,
}

impl SlowMix {
    /// Expensive workload with explicit counts.
    pub fn new(calls: u64, inner_iterations: u32, warmup_inner_iterations: u32) -> Self {
        Self {
            calls,
            inner_iterations,
            warmup_inner_iterations,
        }
    }

    /// Expensive workload with the counts from `config`.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(
            config.slow_calls,
            config.slow_inner_iterations,
            config.warmup_inner_iterations,
        )
    }
}

impl Workload for SlowMix {
    fn label(&self) -> &str {
        "slow_compute"
    }

    fn calls(&self) -> u64 {
        self.calls
    }

    fn unit(&self) -> PerCallUnit {
        PerCallUnit::Millis
    }

    fn warmup(&self, rounds: u32, sink: &mut Sink) {
        for round in 0..rounds {
            sink.push(black_box(slow_compute(
                black_box(round as i64),
                black_box(self.warmup_inner_iterations),
            )));
        }
    }

    fn run(&self, sink: &mut Sink) {
        for i in 0..self.calls {
            sink.push(black_box(slow_compute(
                black_box(i as i64),
                black_box(self.inner_iterations),
            )));
        }
    }
}
