// File: crates/plot-ticks/src/axis.rs
// Summary: Axis model with labels, ranges and scale kind; produces labeled ticks.

use crate::error::Result;
use crate::format::TickFormat;
use crate::labels::{compact_labels, Tick};
use crate::scale::{LinearTicks, LogTicks, TickGenerator};
use crate::types::TickOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    /// Tick generator for this kind of scale.
    pub fn generator(self) -> &'static dyn TickGenerator {
        match self {
            ScaleKind::Linear => &LinearTicks,
            ScaleKind::Log10 => &LogTicks,
        }
    }
}

/// An axis spanning `min..max`; `max < min` draws it reversed.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Tick positions for roughly `count` intervals.
    pub fn ticks(&self, count: usize) -> Result<Vec<f64>> {
        self.kind.generator().generate(self.min, self.max, count)
    }

    /// Ticks with label text, compacted unless `opts.compact` is off.
    pub fn labeled_ticks<F: TickFormat + ?Sized>(&self, opts: &TickOptions, format: &F) -> Result<Vec<Tick>> {
        let values = self.ticks(opts.count)?;
        let ticks: Vec<Tick> = values.into_iter().map(|v| Tick::new(v, format.format(v))).collect();
        Ok(if opts.compact { compact_labels(ticks) } else { ticks })
    }
}
