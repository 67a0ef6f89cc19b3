//! Keyframe generation.
//!
//! One keyframe per elapsed second between the endpoints, inclusive, spaced
//! [`TICK_STEP`] ticks apart. Which components appear in each rendered value
//! is decided by the *start* endpoint's disabled flags alone; the end
//! endpoint's flags never affect display. Downstream consumers rely on this
//! asymmetry.
//!
//! Hours are not wrapped or clamped when rendered, so a value can carry
//! more than two hour digits.

use crate::document::{Keyframe, TimerDocument};
use crate::error::ValidationError;
use crate::time::{
    Direction, FieldKind, TimeRange, TimeSpec, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::validate::validate;
use tracing::{debug, trace};

/// Ticks between successive keyframes.
pub const TICK_STEP: u64 = 20;

/// Separator between rendered components.
pub const SEPARATOR: &str = ":";

/// Generate the timer document for a validated range.
///
/// The range must already have passed [`validate`]; this is not re-checked.
/// Use [`build_timer`] to do both.
#[must_use]
pub fn generate(range: &TimeRange) -> TimerDocument {
    debug_assert!(
        !range.start.is_fully_disabled(),
        "generate called with a fully disabled start endpoint"
    );
    debug!(
        start = range.start.to_seconds(),
        end = range.end.to_seconds(),
        duration = range.duration(),
        direction = %range.direction(),
        "generating timer keyframes"
    );

    let mut frames = Vec::with_capacity(range.sample_count());
    frames.extend(keyframes(*range));
    let document = TimerDocument::new(frames);

    trace!(
        keyframes = document.len(),
        first = document.keyframes().first().map(|k| k.value.as_str()),
        last = document.keyframes().last().map(|k| k.value.as_str()),
        "timer document ready"
    );
    document
}

/// Validate, then generate.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn build_timer(range: &TimeRange) -> Result<TimerDocument, ValidationError> {
    validate(range)?;
    Ok(generate(range))
}

/// Lazily yield the keyframes of a validated range, in tick order.
pub fn keyframes(range: TimeRange) -> impl Iterator<Item = Keyframe> {
    let start = range.start.to_seconds();
    let direction = range.direction();
    let display = range.start;

    (0..=range.duration()).map(move |i| {
        let current = match direction {
            Direction::Up => start + i,
            Direction::Down => start - i,
        };
        Keyframe::new(
            u64::from(i) * TICK_STEP,
            format_timestamp(current, &display),
        )
    })
}

/// Render elapsed seconds using only the fields enabled in `display`.
///
/// Each component is zero-padded to at least two digits.
#[must_use]
pub fn format_timestamp(seconds: u32, display: &TimeSpec) -> String {
    let parts = [
        (FieldKind::Hours, seconds / SECONDS_PER_HOUR),
        (
            FieldKind::Minutes,
            (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        ),
        (FieldKind::Seconds, seconds % SECONDS_PER_MINUTE),
    ];

    parts
        .iter()
        .filter(|(kind, _)| !display.field(*kind).is_disabled())
        .map(|(_, value)| format!("{value:02}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
