// File: crates/plot-ticks/src/lib.rs
// Summary: Core library entry point; exports tick generation, formatting and label compaction.

pub mod error;
pub mod types;
pub mod step;
pub mod ticks;
pub mod scale;
pub mod labels;
pub mod format;
pub mod axis;

pub use error::{Result, TickError};
pub use types::{TickOptions, DEFAULT_TICK_COUNT, MAX_PRECISION, MAX_TICKS};
pub use step::{precision, round_to, tick_step};
pub use ticks::{ticks, TickRange};
pub use scale::{LinearTicks, LogTicks, TickGenerator};
pub use labels::{common_prefix, common_suffix, compact_labels, format_ticks, Tick};
pub use format::{FixedFormat, TickFormat, UtcTimeFormat};
pub use axis::{Axis, ScaleKind};
