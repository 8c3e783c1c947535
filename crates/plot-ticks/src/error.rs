// File: crates/plot-ticks/src/error.rs
// Summary: Error type shared by the tick helpers.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TickError {
    /// A tick count of zero leaves nothing to divide the range into.
    #[error("invalid tick count: must be greater than zero")]
    InvalidTickCount,
    #[error("non-finite axis bound: [{start}, {stop}]")]
    NonFiniteBound { start: f64, stop: f64 },
    /// Start and stop coincide, so there is no spacing to choose.
    #[error("empty domain: start equals stop")]
    EmptyDomain,
    /// Both bounds are finite but their distance is not representable.
    #[error("axis span overflows: [{start}, {stop}]")]
    SpanOverflow { start: f64, stop: f64 },
    #[error("too many ticks: {len} exceeds the limit of {max}")]
    TooManyTicks { len: f64, max: usize },
}

pub type Result<T> = std::result::Result<T, TickError>;
