//! Range validation.
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! 1. Every enabled field is within its bound ([`FieldKind::max`]).
//! 2. Neither endpoint is fully disabled.
//! 3. [`hour_minute_rule`]: the endpoints may not both lack hours and minutes.
//!
//! Rule 3 is a usability policy rather than an arithmetic constraint, so it
//! lives in its own function.

use crate::error::ValidationError;
use crate::time::{Endpoint, TimeRange};

const ENDPOINTS: [Endpoint; 2] = [Endpoint::Start, Endpoint::End];

/// Validate a range before generation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(range: &TimeRange) -> Result<(), ValidationError> {
    bounds_rule(range)?;
    fully_disabled_rule(range)?;
    hour_minute_rule(range)
}

/// Every enabled field must be within its bound.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] for the first offending field,
/// checking the start endpoint before the end.
pub fn bounds_rule(range: &TimeRange) -> Result<(), ValidationError> {
    for endpoint in ENDPOINTS {
        for (field, value) in range.endpoint(endpoint).fields() {
            if let Some(value) = value.magnitude() {
                if value > field.max() {
                    return Err(ValidationError::OutOfRange {
                        endpoint,
                        field,
                        value,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Each endpoint needs at least one enabled field.
///
/// # Errors
///
/// Returns [`ValidationError::EndpointFullyDisabled`].
pub fn fully_disabled_rule(range: &TimeRange) -> Result<(), ValidationError> {
    match ENDPOINTS
        .into_iter()
        .find(|&endpoint| range.endpoint(endpoint).is_fully_disabled())
    {
        Some(endpoint) => Err(ValidationError::EndpointFullyDisabled { endpoint }),
        None => Ok(()),
    }
}

/// A seconds-only timer on both ends carries no higher-order time at all.
///
/// # Errors
///
/// Returns [`ValidationError::BothRangesHourMinuteDisabled`].
pub fn hour_minute_rule(range: &TimeRange) -> Result<(), ValidationError> {
    if range.start.lacks_hours_and_minutes() && range.end.lacks_hours_and_minutes() {
        return Err(ValidationError::BothRangesHourMinuteDisabled);
    }
    Ok(())
}
