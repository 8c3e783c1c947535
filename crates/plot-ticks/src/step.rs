// File: crates/plot-ticks/src/step.rs
// Summary: "Nice" step selection and decimal precision helpers for axis ticks.

use crate::error::{Result, TickError};
use crate::types::MAX_PRECISION;

// Error thresholds between the 1, 2, 5 and 10 step multipliers.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Pick a step of 1, 2, 5 or 10 times a power of ten that splits
/// `[start, stop]` into roughly `count` intervals.
/// The step is negative when `stop < start`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Result<f64> {
    if count == 0 {
        return Err(TickError::InvalidTickCount);
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(TickError::NonFiniteBound { start, stop });
    }
    if start == stop {
        return Err(TickError::EmptyDomain);
    }

    let span = (stop - start).abs();
    if !span.is_finite() {
        return Err(TickError::SpanOverflow { start, stop });
    }
    let raw = span / count as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    if step == 0.0 {
        // range narrower than the smallest representable power of ten
        return Err(TickError::EmptyDomain);
    }
    let error = raw / step;
    if error >= E10 {
        step *= 10.0;
    } else if error >= E5 {
        step *= 5.0;
    } else if error >= E2 {
        step *= 2.0;
    }

    Ok(if stop < start { -step } else { step })
}

/// Number of decimals needed to represent multiples of `step` exactly.
/// Reads the exponent of the shortest scientific form of the step, so
/// `0.01 -> 2`, `2.5e-3 -> 3` and anything `>= 1` gives 0. Capped at 20.
pub fn precision(step: f64) -> usize {
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let sci = format!("{:e}", step.abs());
    let exponent = sci
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    if exponent >= 0 {
        0
    } else {
        (exponent.unsigned_abs() as usize).min(MAX_PRECISION)
    }
}

/// Round `value` to `precision` decimal digits, matching what a fixed-point
/// decimal formatter would print.
pub fn round_to(value: f64, precision: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", precision, value).parse::<f64>().unwrap_or(value)
}
