//! bbs-timer: time ranges to tick-indexed timer keyframes.
//!
//! Converts a start and end time, each given as hours/minutes/seconds with
//! any field individually disabled, into a [`TimerDocument`]: one string
//! keyframe per elapsed second, spaced [`TICK_STEP`] ticks apart.
//!
//! # Pipeline
//!
//! ```text
//! TimeRange ──► validate ──► generate ──► TimerDocument ──► JSON
//!                  │
//!                  └──► ValidationError (first failure only)
//! ```
//!
//! # Example
//!
//! ```
//! use bbs_timer::prelude::*;
//!
//! let range = TimeRange::new("00:01:00".parse()?, "00:00:00".parse()?);
//! let timer = build_timer(&range)?;
//! assert_eq!(timer.len(), 61);
//! assert_eq!(timer.keyframes()[0].value, "00:01:00");
//! assert_eq!(timer.keyframes()[60].tick, 1200);
//! # Ok::<(), bbs_timer::TimerError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod export;
pub mod generate;
pub mod time;
pub mod validate;

pub use document::{Interpolation, Keyframe, TextTrack, TimerDocument, TrackType};
pub use error::{ParseError, Result, TimerError, ValidationError};
pub use export::export_filename;
pub use generate::{build_timer, format_timestamp, generate, keyframes, TICK_STEP};
pub use time::{Direction, Endpoint, Field, FieldKind, TimeRange, TimeSpec};
pub use validate::validate;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::document::{Keyframe, TimerDocument};
    pub use crate::error::{ParseError, TimerError, ValidationError};
    pub use crate::export::export_filename;
    pub use crate::generate::{build_timer, format_timestamp, generate, keyframes, TICK_STEP};
    pub use crate::time::{Direction, Endpoint, Field, FieldKind, TimeRange, TimeSpec};
    pub use crate::validate::validate;
}
