//! A result sink that keeps timed computation observable.
//!
//! Optimisers delete loops whose results are never used. The harness
//! routes every workload result through a [`Sink`], which folds them
//! into one running value that is rendered at the end of the report.
//! The fold is a wrapping add: order-insensitive, cheap enough to
//! disappear into the call overhead being measured, and impossible to
//! elide because the final value is printed.

use std::fmt;

/// Accumulator for workload results.
///
/// Written on every call, warmup and measured alike; read exactly once,
/// when the report renders the checksum line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sink(u64);

impl Sink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self(0)
    }

    /// Fold a workload result into the running value.
    #[inline]
    pub fn push(&mut self, value: i64) {
        self.0 = self.0.wrapping_add(value as u64);
    }

    /// Consume the sink, yielding the folded value for the report.
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sink_is_zero() {
        assert_eq!(Sink::new().finish(), 0);
    }

    #[test]
    fn push_accumulates() {
        let mut sink = Sink::new();
        sink.push(1);
        sink.push(2);
        sink.push(3);
        assert_eq!(sink.finish(), 6);
    }

    #[test]
    fn push_wraps_on_negative_values() {
        let mut sink = Sink::new();
        sink.push(-1);
        assert_eq!(sink.finish(), u64::MAX);
        sink.push(1);
        assert_eq!(sink.finish(), 0);
    }

    #[test]
    fn display_is_fixed_width_hex() {
        let mut sink = Sink::new();
        sink.push(0xbeef);
        assert_eq!(sink.to_string(), "0x000000000000beef");
    }
}
