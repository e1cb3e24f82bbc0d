//! Harness configuration and validation.
//!
//! [`HarnessConfig`] fixes the iteration counts for a run.
//! [`validate()`](HarnessConfig::validate) checks the counts up front;
//! the workloads themselves are total functions with no failure modes.

use hotpath_core::WorkloadError;

/// Iteration counts for a harness run.
///
/// The defaults are the reference profile: one million cheap calls,
/// one hundred expensive calls of one million mixing rounds each, and
/// ten thousand warmup rounds per workload.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Warmup rounds executed per workload before timing. Default: 10_000.
    pub warmup_rounds: u32,
    /// Timed calls of the cheap workload. Default: 1_000_000.
    pub fast_calls: u64,
    /// Timed calls of the expensive workload. Default: 100.
    pub slow_calls: u64,
    /// Mixing rounds inside each timed expensive call. Default: 1_000_000.
    pub slow_inner_iterations: u32,
    /// Mixing rounds inside each warmup call of the expensive workload.
    /// Kept small so warmup stays a fraction of the timed phase. Default: 1_000.
    pub warmup_inner_iterations: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_rounds: 10_000,
            fast_calls: 1_000_000,
            slow_calls: 100,
            slow_inner_iterations: 1_000_000,
            warmup_inner_iterations: 1_000,
        }
    }
}

impl HarnessConfig {
    /// Check that every timed phase has a positive call count.
    ///
    /// Per-call time divides by the call count, so zero-call phases are
    /// rejected here rather than producing an undefined measurement.
    /// Zero `warmup_rounds` is allowed: warmup is skippable, only the
    /// timed denominators are load-bearing.
    pub fn validate(&self) -> Result<(), WorkloadError> {
        if self.fast_calls == 0 {
            return Err(WorkloadError::ZeroCalls {
                label: "fast_sum8".into(),
            });
        }
        if self.slow_calls == 0 {
            return Err(WorkloadError::ZeroCalls {
                label: "slow_compute".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = HarnessConfig::default();
        config.validate().unwrap();
        assert_eq!(config.fast_calls, 1_000_000);
        assert_eq!(config.slow_calls, 100);
        assert_eq!(config.slow_inner_iterations, 1_000_000);
        assert_eq!(config.warmup_rounds, 10_000);
        assert_eq!(config.warmup_inner_iterations, 1_000);
    }

    #[test]
    fn zero_fast_calls_rejected() {
        let config = HarnessConfig {
            fast_calls: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(WorkloadError::ZeroCalls {
                label: "fast_sum8".into()
            })
        );
    }

    #[test]
    fn zero_slow_calls_rejected() {
        let config = HarnessConfig {
            slow_calls: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(WorkloadError::ZeroCalls {
                label: "slow_compute".into()
            })
        );
    }

    #[test]
    fn zero_warmup_is_allowed() {
        let config = HarnessConfig {
            warmup_rounds: 0,
            ..Default::default()
        };
        config.validate().unwrap();
    }
}
