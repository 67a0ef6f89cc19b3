//! Output document schema.
//!
//! The JSON shape is read by an existing animation consumer and must stay
//! stable:
//!
//! ```json
//! {
//!   "text": {
//!     "keyframes": [
//!       { "duration": 0, "interp": "linear", "tick": 0, "value": "00:01:00" }
//!     ],
//!     "type": "string"
//!   }
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};

/// Interpolation between keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// The only mode the consumer is fed
    #[default]
    Linear,
}

/// One sample of the timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Hold time in seconds; always zero
    #[serde(rename = "duration", serialize_with = "serialize_seconds")]
    pub duration_seconds: f64,
    /// Interpolation mode
    #[serde(rename = "interp")]
    pub interpolation: Interpolation,
    /// Consumer tick at which this sample applies
    pub tick: u64,
    /// Rendered timestamp
    pub value: String,
}

impl Keyframe {
    /// Create a zero-duration linear keyframe.
    #[must_use]
    pub fn new(tick: u64, value: impl Into<String>) -> Self {
        Self {
            duration_seconds: 0.0,
            interpolation: Interpolation::Linear,
            tick,
            value: value.into(),
        }
    }
}

/// Value type of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// Keyframe values are strings
    #[default]
    String,
}

/// The `text` track of a timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextTrack {
    /// Samples in increasing tick order
    pub keyframes: Vec<Keyframe>,
    /// Track value type
    #[serde(rename = "type")]
    pub track_type: TrackType,
}

/// A generated timer, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerDocument {
    /// The single text track
    pub text: TextTrack,
}

impl TimerDocument {
    /// Wrap keyframes into a document.
    #[must_use]
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        Self {
            text: TextTrack {
                keyframes,
                track_type: TrackType::String,
            },
        }
    }

    /// Keyframes in tick order.
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.text.keyframes
    }

    /// Number of keyframes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.keyframes.len()
    }

    /// True when there are no keyframes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.keyframes.is_empty()
    }

    /// Compact JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON with two-space indentation, as the consumer's files are written.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a document back from JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a timer document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write whole seconds as integers (`0` rather than `0.0`).
fn serialize_seconds<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
