//! Rendering of a completed harness run.

use std::fmt;

use smallvec::SmallVec;

use crate::measure::Measurement;

/// Measurements from one harness run, in registration order, plus the
/// folded sink value.
///
/// The `Display` impl produces one block per measurement (label, call
/// count, total time in milliseconds, per-call time in the workload's
/// unit, two decimal places throughout) and a final checksum line.
/// Rendering the checksum is what keeps every sink write live.
#[derive(Clone, Debug)]
pub struct Report {
    measurements: SmallVec<[Measurement; 4]>,
    checksum: u64,
}

impl Report {
    /// Assemble a report from measurements and the folded sink value.
    pub fn new(measurements: SmallVec<[Measurement; 4]>, checksum: u64) -> Self {
        Self {
            measurements,
            checksum,
        }
    }

    /// Measurements in registration order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// The folded sink value.
    pub fn checksum(&self) -> u64 {
        self.checksum
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.measurements {
            writeln!(f, "{} ({} calls):", m.label, m.calls)?;
            writeln!(f, "  Total time: {:>10.2} ms", m.total_ms())?;
            writeln!(f, "  Per call:   {:>10.2} {}", m.per_call(), m.unit.suffix())?;
            writeln!(f)?;
        }
        writeln!(f, "checksum: {:#018x}", self.checksum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::PerCallUnit;
    use smallvec::smallvec;
    use std::time::Duration;

    fn sample_report() -> Report {
        let measurements: SmallVec<[Measurement; 4]> = smallvec![
            Measurement {
                label: "fast_sum8".into(),
                total: Duration::from_millis(250),
                calls: 1_000_000,
                unit: PerCallUnit::Nanos,
            },
            Measurement {
                label: "slow_compute".into(),
                total: Duration::from_secs(3),
                calls: 100,
                unit: PerCallUnit::Millis,
            },
        ];
        Report::new(measurements, 0xfeed)
    }

    #[test]
    fn renders_one_block_per_measurement() {
        let text = sample_report().to_string();
        assert!(text.contains("fast_sum8 (1000000 calls):"));
        assert!(text.contains("slow_compute (100 calls):"));
        assert_eq!(text.matches("Total time:").count(), 2);
        assert_eq!(text.matches("Per call:").count(), 2);
    }

    #[test]
    fn renders_units_and_two_decimals() {
        let text = sample_report().to_string();
        // 250ms over 1M calls is 250.00ns per call.
        assert!(text.contains("250.00 ms"));
        assert!(text.contains("250.00 ns"));
        // 3000ms over 100 calls is 30.00ms per call.
        assert!(text.contains("3000.00 ms"));
        assert!(text.contains("30.00 ms"));
    }

    #[test]
    fn renders_checksum_line() {
        let text = sample_report().to_string();
        assert!(text.ends_with("checksum: 0x000000000000feed\n"));
    }

    #[test]
    fn empty_report_is_checksum_only() {
        let report = Report::new(SmallVec::new(), 0);
        assert_eq!(report.to_string(), "checksum: 0x0000000000000000\n");
    }
}
