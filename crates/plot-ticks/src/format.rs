// File: crates/plot-ticks/src/format.rs
// Summary: Value-to-label formatters used before label compaction.

use chrono::{DateTime, Utc};

use crate::step::precision;

/// Turns a tick value into its label text.
pub trait TickFormat {
    fn format(&self, value: f64) -> String;
}

impl<F: Fn(f64) -> String> TickFormat for F {
    fn format(&self, value: f64) -> String { self(value) }
}

/// Fixed number of decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FixedFormat {
    pub precision: usize,
}

impl FixedFormat {
    pub const fn new(precision: usize) -> Self { Self { precision } }

    /// Just enough digits to tell apart multiples of `step`.
    pub fn for_step(step: f64) -> Self { Self::new(precision(step)) }
}

impl TickFormat for FixedFormat {
    fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

/// Milliseconds since the Unix epoch as `YYYY-MM-DD HH:MM:SS.mmmZ` (UTC).
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcTimeFormat;

impl UtcTimeFormat {
    pub const PATTERN: &'static str = "%Y-%m-%d %H:%M:%S%.3fZ";
}

impl TickFormat for UtcTimeFormat {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        match DateTime::<Utc>::from_timestamp_millis(value.round() as i64) {
            Some(t) => t.format(Self::PATTERN).to_string(),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_digits() {
        assert_eq!(FixedFormat::new(2).format(1.5), "1.50");
        assert_eq!(FixedFormat::for_step(0.05).format(0.1), "0.10");
        assert_eq!(FixedFormat::for_step(10.0).format(40.0), "40");
    }

    #[test]
    fn closures_are_formats() {
        let f = |v: f64| format!("{v} V");
        assert_eq!(f.format(3.0), "3 V");
    }

    #[test]
    fn utc_time() {
        assert_eq!(UtcTimeFormat.format(0.0), "1970-01-01 00:00:00.000Z");
        assert_eq!(UtcTimeFormat.format(1_700_000_000_123.0), "2023-11-14 22:13:20.123Z");
        assert_eq!(UtcTimeFormat.format(f64::NAN), "NaN");
    }
}
