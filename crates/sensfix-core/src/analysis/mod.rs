//! Aim error analysis.
//!
//! This module contains the measurement core:
//! - `matcher` - hit-event extraction (target -> replay frame)
//! - `measure` - scalar and directional error per hit
//! - `stats` - mean/median/P95 and overshoot bias
//! - `aggregate` - grouping by sensitivity and the recommendation
//! - `pipeline` - replay discovery and per-file orchestration

mod aggregate;
mod matcher;
mod measure;
mod pipeline;
mod stats;

pub use aggregate::*;
pub use matcher::*;
pub use measure::*;
pub use pipeline::*;
pub use stats::*;
