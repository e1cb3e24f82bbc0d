//! The harness: an ordered workload registry plus the run loop.

use std::time::Instant;

use indexmap::IndexMap;
use smallvec::SmallVec;

use hotpath_core::{Sink, WorkloadError};

use crate::config::HarnessConfig;
use crate::measure::Measurement;
use crate::report::Report;
use crate::workloads::{FastSum, SlowMix, Workload};

/// Runs registered workloads and produces a [`Report`].
///
/// Workloads are keyed by label and measured in registration order.
/// A run is two passes: every workload is warmed up first, then each
/// is timed over exactly its configured call count. Warmup time never
/// enters a [`Measurement`].
pub struct Harness {
    config: HarnessConfig,
    workloads: IndexMap<String, Box<dyn Workload>>,
}

impl Harness {
    /// Create an empty harness from a validated configuration.
    pub fn new(config: HarnessConfig) -> Result<Self, WorkloadError> {
        config.validate()?;
        Ok(Self {
            config,
            workloads: IndexMap::new(),
        })
    }

    /// Create the reference harness: [`FastSum`] then [`SlowMix`],
    /// parameterised from `config`.
    pub fn reference(config: HarnessConfig) -> Result<Self, WorkloadError> {
        let mut harness = Self::new(config)?;
        let fast = FastSum::from_config(&harness.config);
        let slow = SlowMix::from_config(&harness.config);
        harness.register(Box::new(fast))?;
        harness.register(Box::new(slow))?;
        Ok(harness)
    }

    /// Register a workload, rejecting zero call counts and duplicate
    /// labels.
    pub fn register(&mut self, workload: Box<dyn Workload>) -> Result<(), WorkloadError> {
        let label = workload.label().to_string();
        if workload.calls() == 0 {
            return Err(WorkloadError::ZeroCalls { label });
        }
        if self.workloads.contains_key(&label) {
            return Err(WorkloadError::DuplicateWorkload { label });
        }
        self.workloads.insert(label, workload);
        Ok(())
    }

    /// Number of registered workloads.
    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    /// Whether no workloads are registered.
    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    /// Warm up and time every registered workload.
    ///
    /// An empty harness yields an empty report with a zero checksum.
    pub fn run(&self) -> Report {
        let mut sink = Sink::new();

        for workload in self.workloads.values() {
            workload.warmup(self.config.warmup_rounds, &mut sink);
        }

        let mut measurements: SmallVec<[Measurement; 4]> = SmallVec::new();
        for workload in self.workloads.values() {
            let start = Instant::now();
            workload.run(&mut sink);
            let total = start.elapsed();

            measurements.push(Measurement {
                label: workload.label().to_string(),
                total,
                calls: workload.calls(),
                unit: workload.unit(),
            });
        }

        Report::new(measurements, sink.finish())
    }
}
