//! Time range data model.
//!
//! A [`TimeRange`] is a pair of [`TimeSpec`] endpoints. Each endpoint holds
//! three [`Field`]s, any of which may be [`Field::Disabled`]. A disabled
//! field contributes zero to the elapsed-seconds value of its endpoint but,
//! on the start endpoint, also removes that component from every rendered
//! keyframe. The two concerns are independent.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u32 = 3600;
/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// One time component: a magnitude or the `Disabled` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// An enabled component. Bounds are checked by the validator, not here.
    Magnitude(u8),
    /// Contributes zero seconds and is not displayed.
    Disabled,
}

impl Field {
    /// Label used by raw inputs and export file names.
    pub const DISABLED_LABEL: &'static str = "-";

    /// Parse raw field text.
    ///
    /// `-` is disabled, an empty string is zero, and anything else must be
    /// a decimal number that fits in a byte.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidField`] for anything else.
    pub fn parse(field: FieldKind, raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed == Self::DISABLED_LABEL {
            return Ok(Self::Disabled);
        }
        if trimmed.is_empty() {
            return Ok(Self::Magnitude(0));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidField {
                field,
                raw: raw.to_string(),
            });
        }
        trimmed
            .parse::<u8>()
            .map(Self::Magnitude)
            .map_err(|_| ParseError::InvalidField {
                field,
                raw: raw.to_string(),
            })
    }

    /// Check if this field is disabled
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// The magnitude, if enabled.
    #[must_use]
    pub const fn magnitude(self) -> Option<u8> {
        match self {
            Self::Magnitude(v) => Some(v),
            Self::Disabled => None,
        }
    }

    /// Numeric contribution: the magnitude, or zero when disabled.
    #[must_use]
    pub const fn value_or_zero(self) -> u32 {
        match self {
            Self::Magnitude(v) => v as u32,
            Self::Disabled => 0,
        }
    }

    /// Two-digit label, or `-` when disabled.
    #[must_use]
    pub fn raw_label(self) -> String {
        match self {
            Self::Magnitude(v) => format!("{v:02}"),
            Self::Disabled => Self::DISABLED_LABEL.to_string(),
        }
    }
}

impl From<u8> for Field {
    fn from(value: u8) -> Self {
        Self::Magnitude(value)
    }
}

/// Which component of a [`TimeSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Hours, 0..=99
    Hours,
    /// Minutes, 0..=59
    Minutes,
    /// Seconds, 0..=59
    Seconds,
}

impl FieldKind {
    /// All kinds in display order.
    pub const ALL: [Self; 3] = [Self::Hours, Self::Minutes, Self::Seconds];

    /// Largest accepted input magnitude.
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Self::Hours => 99,
            Self::Minutes | Self::Seconds => 59,
        }
    }

    /// Seconds represented by one unit of this field.
    #[must_use]
    pub const fn unit_seconds(self) -> u32 {
        match self {
            Self::Hours => SECONDS_PER_HOUR,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Seconds => 1,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Start or end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Where the timer begins
    Start,
    /// Where the timer stops
    End,
}

impl Endpoint {
    /// Capitalized name, for messages that begin with the endpoint.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// One endpoint of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSpec {
    /// Hours component
    pub hours: Field,
    /// Minutes component
    pub minutes: Field,
    /// Seconds component
    pub seconds: Field,
}

impl TimeSpec {
    /// Create a spec from three fields.
    #[must_use]
    pub const fn new(hours: Field, minutes: Field, seconds: Field) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Create a spec with every field enabled.
    #[must_use]
    pub const fn hms(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self::new(
            Field::Magnitude(hours),
            Field::Magnitude(minutes),
            Field::Magnitude(seconds),
        )
    }

    /// Get a field by kind.
    #[must_use]
    pub const fn field(&self, kind: FieldKind) -> Field {
        match kind {
            FieldKind::Hours => self.hours,
            FieldKind::Minutes => self.minutes,
            FieldKind::Seconds => self.seconds,
        }
    }

    /// Fields paired with their kind, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, Field)> + '_ {
        FieldKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.field(kind)))
    }

    /// True when no field is enabled.
    #[must_use]
    pub fn is_fully_disabled(&self) -> bool {
        self.fields().all(|(_, field)| field.is_disabled())
    }

    /// True when both hours and minutes are disabled.
    #[must_use]
    pub const fn lacks_hours_and_minutes(&self) -> bool {
        self.hours.is_disabled() && self.minutes.is_disabled()
    }

    /// Absolute elapsed seconds, with disabled fields counting as zero.
    #[must_use]
    pub fn to_seconds(&self) -> u32 {
        self.fields()
            .map(|(kind, field)| field.value_or_zero() * kind.unit_seconds())
            .sum()
    }
}

impl FromStr for TimeSpec {
    type Err = ParseError;

    /// Parse `HH:MM:SS`, where any component may be `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [h, m, sec] = parts.as_slice() else {
            return Err(ParseError::ComponentCount { raw: s.to_string() });
        };
        Ok(Self::new(
            Field::parse(FieldKind::Hours, h)?,
            Field::parse(FieldKind::Minutes, m)?,
            Field::parse(FieldKind::Seconds, sec)?,
        ))
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.hours.raw_label(),
            self.minutes.raw_label(),
            self.seconds.raw_label()
        )
    }
}

/// Counting direction of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Start is at or before end
    Up,
    /// Start is after end
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "counting up",
            Self::Down => "counting down",
        })
    }
}

/// The two endpoints of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Start endpoint; its disabled flags drive display
    pub start: TimeSpec,
    /// End endpoint; only its numeric value matters
    pub end: TimeSpec,
}

impl TimeRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(start: TimeSpec, end: TimeSpec) -> Self {
        Self { start, end }
    }

    /// Get an endpoint.
    #[must_use]
    pub const fn endpoint(&self, endpoint: Endpoint) -> &TimeSpec {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::End => &self.end,
        }
    }

    /// Seconds between the endpoints, ignoring direction.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.start.to_seconds().abs_diff(self.end.to_seconds())
    }

    /// `Down` only when start is strictly later than end.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.start.to_seconds() > self.end.to_seconds() {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Number of keyframes generation will emit.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.duration() as usize + 1
    }
}
