// File: crates/plot-ticks/src/ticks.rs
// Summary: Linear tick sequence generation over a (possibly reversed) range.

use std::iter::FusedIterator;

use crate::error::{Result, TickError};
use crate::step::{precision, round_to, tick_step};
use crate::types::MAX_TICKS;

/// Finite sequence of rounded multiples of a nice step spanning a range.
/// Ascending for `start < stop`, descending for reversed ranges.
#[derive(Clone, Debug)]
pub struct TickRange {
    first: f64,
    step: f64,
    precision: usize,
    front: usize,
    back: usize,
}

impl TickRange {
    pub fn new(start: f64, stop: f64, count: usize) -> Result<Self> {
        let step = tick_step(start, stop, count)?;
        let precision = precision(step);
        let first = (start / step).ceil() * step;
        // half a step past the last multiple keeps it inclusive
        let end = (stop / step).floor() * step + step / 2.0;
        let span = ((end - first) / step).ceil();
        if span > MAX_TICKS as f64 {
            return Err(TickError::TooManyTicks { len: span, max: MAX_TICKS });
        }
        let len = if span > 0.0 { span as usize } else { 0 };
        log::trace!("ticks [{start}, {stop}] count={count}: step={step} precision={precision} len={len}");
        Ok(Self { first, step, precision, front: 0, back: len })
    }

    /// Signed spacing between consecutive ticks.
    pub fn step(&self) -> f64 { self.step }

    /// Decimal digits each tick is rounded to.
    pub fn precision(&self) -> usize { self.precision }

    #[inline]
    fn value_at(&self, i: usize) -> f64 {
        round_to(self.first + self.step * i as f64, self.precision)
    }
}

impl Iterator for TickRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back { return None; }
        let v = self.value_at(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for TickRange {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back { return None; }
        self.back -= 1;
        Some(self.value_at(self.back))
    }
}

impl ExactSizeIterator for TickRange {}
impl FusedIterator for TickRange {}

/// Nicely spaced ticks covering `[start, stop]`, rounded to the step's precision.
///
/// A zero `count` is an error. When `start == stop` the single tick `[start]`
/// is returned, since there is no interval to subdivide.
pub fn ticks(start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(TickError::InvalidTickCount);
    }
    if start == stop && start.is_finite() {
        return Ok(vec![start]);
    }
    Ok(TickRange::new(start, stop, count)?.collect())
}
