// File: crates/plot-ticks/src/scale.rs
// Summary: Tick generators for linear and base-10 logarithmic axes.

use crate::error::{Result, TickError};
use crate::ticks::ticks;

/// Start value substituted when a log axis begins at or below zero.
pub const LOG_FLOOR: f64 = 0.1;

/// Produces tick positions for a numeric domain.
pub trait TickGenerator: Send + Sync {
    fn id(&self) -> &'static str;
    /// Ticks covering `[start, stop]`, ordered in the direction of the range.
    fn generate(&self, start: f64, stop: f64, count: usize) -> Result<Vec<f64>>;
}

/// Evenly spaced 1/2/5 ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearTicks;

impl TickGenerator for LinearTicks {
    fn id(&self) -> &'static str { "linear" }

    fn generate(&self, start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
        ticks(start, stop, count)
    }
}

/// Decade-aligned ticks for a base-10 log axis, falling back to linear
/// ticks when the domain is too narrow to hold any.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTicks;

impl TickGenerator for LogTicks {
    fn id(&self) -> &'static str { "log10" }

    fn generate(&self, start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(TickError::InvalidTickCount);
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(TickError::NonFiniteBound { start, stop });
        }
        let start = if start <= 0.0 {
            log::debug!("log axis start {start} clamped to {LOG_FLOOR}");
            LOG_FLOOR
        } else {
            start
        };
        if stop <= 0.0 {
            log::debug!("log axis [{start}, {stop}] has no logarithm; using linear ticks");
            return ticks(start, stop, count);
        }

        let out = log_ticks(start, stop, count)?;
        if out.is_empty() {
            log::debug!("no log ticks for [{start}, {stop}]; using linear ticks");
            return ticks(start, stop, count);
        }
        Ok(out)
    }
}

/// `k * 10^e`, dividing for negative exponents so 0.3 stays 0.3.
#[inline]
fn decade_multiple(k: u32, e: i32) -> f64 {
    if e < 0 {
        f64::from(k) / 10f64.powi(-e)
    } else {
        f64::from(k) * 10f64.powi(e)
    }
}

// Both bounds must be positive.
fn log_ticks(start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let (i, j) = (lo.log10(), hi.log10());

    let mut out = Vec::new();
    if j - i < count as f64 {
        // few decades: every 1..9 multiple inside the domain
        'decades: for e in (i.floor() as i32)..=(j.ceil() as i32) {
            for k in 1..10 {
                let t = decade_multiple(k, e);
                if t < lo { continue; }
                if t > hi { break 'decades; }
                out.push(t);
            }
        }
        if out.len() * 2 < count {
            out = ticks(lo, hi, count)?;
        }
    } else {
        out = ticks(i, j, count)?.into_iter().map(|t| 10f64.powf(t)).collect();
    }

    if reversed { out.reverse(); }
    Ok(out)
}
