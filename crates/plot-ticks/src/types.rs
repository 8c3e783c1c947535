// File: crates/plot-ticks/src/types.rs
// Summary: Shared constants and tick layout options.

/// Tick count used when the caller has no better hint.
pub const DEFAULT_TICK_COUNT: usize = 10;
/// Upper bound on decimal digits kept when rounding tick values.
pub const MAX_PRECISION: usize = 20;
/// Longest tick sequence a single range may produce.
pub const MAX_TICKS: usize = 100_000;

/// Options for laying out the ticks of one axis.
/// Contract: `count` is a hint and must be non-zero to produce ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOptions {
    pub count: usize,
    /// Strip the prefix/suffix shared by every label.
    pub compact: bool,
}

impl TickOptions {
    pub const fn new(count: usize) -> Self {
        Self { count, compact: true }
    }
    pub const fn with_count(mut self, count: usize) -> Self { self.count = count; self }
    pub const fn with_compact(mut self, compact: bool) -> Self { self.compact = compact; self }
}

impl Default for TickOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_COUNT)
    }
}
