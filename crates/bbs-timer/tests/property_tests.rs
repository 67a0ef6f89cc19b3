//! Property-based tests for bbs-timer.
//!
//! Uses proptest to verify generation invariants over arbitrary valid ranges.

#![allow(clippy::unwrap_used)]

use bbs_timer::prelude::*;
use proptest::prelude::*;

// === Strategies ===

fn field(max: u8) -> impl Strategy<Value = Field> {
    prop_oneof![
        1 => Just(Field::Disabled),
        3 => (0..=max).prop_map(Field::Magnitude),
    ]
}

fn time_spec() -> impl Strategy<Value = TimeSpec> {
    time_spec_up_to(FieldKind::Hours.max())
}

fn time_spec_up_to(max_hours: u8) -> impl Strategy<Value = TimeSpec> {
    (
        field(max_hours),
        field(FieldKind::Minutes.max()),
        field(FieldKind::Seconds.max()),
    )
        .prop_map(|(h, m, s)| TimeSpec::new(h, m, s))
}

/// Valid ranges within the first two hours, so generating them stays cheap.
fn valid_range() -> impl Strategy<Value = TimeRange> {
    (time_spec_up_to(1), time_spec_up_to(1))
        .prop_map(|(start, end)| TimeRange::new(start, end))
        .prop_filter("range must validate", |range| validate(range).is_ok())
}

/// Decode a rendered value back to (h, m, s), `None` for hidden parts.
fn decode(value: &str, display: &TimeSpec) -> [Option<u32>; 3] {
    let mut parts = value.split(':');
    let mut out = [None; 3];
    for (slot, kind) in out.iter_mut().zip(FieldKind::ALL) {
        if !display.field(kind).is_disabled() {
            *slot = parts.next().map(|p| p.parse().unwrap());
        }
    }
    assert!(parts.next().is_none(), "extra components in {value}");
    out
}

/// Seconds visible in a decoded value, for ordering checks.
fn visible_seconds(decoded: [Option<u32>; 3]) -> u32 {
    decoded
        .iter()
        .zip(FieldKind::ALL)
        .map(|(v, kind)| v.unwrap_or(0) * kind.unit_seconds())
        .sum()
}

// === Generation Property Tests ===

proptest! {
    /// Keyframe count is the duration plus one.
    #[test]
    fn prop_keyframe_count(range in valid_range()) {
        let timer = generate(&range);
        let expected = range.start.to_seconds().abs_diff(range.end.to_seconds()) as usize + 1;
        prop_assert_eq!(timer.len(), expected);
    }

    /// Ticks form 0, 20, 40, ...
    #[test]
    fn prop_ticks_arithmetic(range in valid_range()) {
        let timer = generate(&range);
        for (i, frame) in timer.keyframes().iter().enumerate() {
            prop_assert_eq!(frame.tick, i as u64 * TICK_STEP);
            prop_assert_eq!(frame.duration_seconds, 0.0);
        }
    }

    /// Every value shows exactly the fields enabled on start.
    #[test]
    fn prop_display_follows_start(range in valid_range()) {
        let enabled = range.start.fields().filter(|(_, f)| !f.is_disabled()).count();
        for frame in generate(&range).keyframes() {
            prop_assert_eq!(frame.value.split(':').count(), enabled);
            prop_assert!(frame.value.split(':').all(|p| p.len() >= 2));
        }
    }

    /// Swapping end's disabled flags never changes the output if seconds match.
    #[test]
    fn prop_end_flags_ignored(range in valid_range()) {
        let end = range.end;
        let explicit = TimeRange::new(
            range.start,
            TimeSpec::new(
                Field::Magnitude((end.to_seconds() / 3600) as u8),
                Field::Magnitude(((end.to_seconds() % 3600) / 60) as u8),
                Field::Magnitude((end.to_seconds() % 60) as u8),
            ),
        );
        prop_assert_eq!(generate(&range), generate(&explicit));
    }

    /// First keyframe reproduces start's enabled fields.
    #[test]
    fn prop_first_value_is_start(range in valid_range()) {
        let timer = generate(&range);
        let first = &timer.keyframes()[0].value;
        let expected: Vec<String> = range
            .start
            .fields()
            .filter_map(|(_, f)| f.magnitude())
            .map(|v| format!("{v:02}"))
            .collect();
        prop_assert_eq!(first, &expected.join(":"));
    }

    /// Successive elapsed seconds move one step in the inferred direction.
    #[test]
    fn prop_direction(range in valid_range()) {
        let timer = generate(&range);
        let start = range.start.to_seconds();
        let frames = timer.keyframes();

        for (i, frame) in frames.iter().enumerate() {
            let i = i as u32;
            let expected = match range.direction() {
                Direction::Up => start + i,
                Direction::Down => start - i,
            };
            prop_assert_eq!(&frame.value, &format_timestamp(expected, &range.start));
        }

        let last = frames.last().unwrap();
        prop_assert_eq!(
            &last.value,
            &format_timestamp(range.end.to_seconds(), &range.start)
        );
    }

    /// With every field shown, decoded values are strictly monotonic.
    #[test]
    fn prop_monotonic_when_fully_shown(
        range in valid_range().prop_filter("all fields shown", |r| {
            r.start.fields().all(|(_, f)| !f.is_disabled())
        })
    ) {
        let timer = generate(&range);
        let seconds: Vec<u32> = timer
            .keyframes()
            .iter()
            .map(|k| visible_seconds(decode(&k.value, &range.start)))
            .collect();
        for pair in seconds.windows(2) {
            match range.direction() {
                Direction::Up => prop_assert!(pair[0] < pair[1]),
                Direction::Down => prop_assert!(pair[0] > pair[1]),
            }
        }
    }
}

// === Validation Property Tests ===

proptest! {
    /// Hours above 99 are rejected on either endpoint.
    #[test]
    fn prop_hours_out_of_range(
        hours in 100u8..=255,
        on_end in any::<bool>(),
        other in time_spec()
    ) {
        let bad = TimeSpec::new(Field::Magnitude(hours), other.minutes, other.seconds);
        let range = if on_end {
            TimeRange::new(TimeSpec::hms(0, 0, 0), bad)
        } else {
            TimeRange::new(bad, TimeSpec::hms(0, 0, 0))
        };
        let is_out_of_range = matches!(
            validate(&range),
            Err(ValidationError::OutOfRange { field: FieldKind::Hours, .. })
        );
        prop_assert!(is_out_of_range);
    }

    /// Fully disabled endpoints are rejected whatever the other side holds.
    #[test]
    fn prop_fully_disabled_rejected(other in time_spec(), on_end in any::<bool>()) {
        let off = TimeSpec::new(Field::Disabled, Field::Disabled, Field::Disabled);
        let range = if on_end {
            TimeRange::new(other, off)
        } else {
            TimeRange::new(off, other)
        };
        prop_assert!(validate(&range).is_err());
    }

    /// Seconds-only on both endpoints is always rejected.
    #[test]
    fn prop_seconds_only_both_rejected(a in 0u8..=59, b in 0u8..=59) {
        let range = TimeRange::new(
            TimeSpec::new(Field::Disabled, Field::Disabled, Field::Magnitude(a)),
            TimeSpec::new(Field::Disabled, Field::Disabled, Field::Magnitude(b)),
        );
        prop_assert_eq!(
            validate(&range),
            Err(ValidationError::BothRangesHourMinuteDisabled)
        );
    }

    /// Specs survive a Display/FromStr round trip.
    #[test]
    fn prop_time_spec_text_roundtrip(spec in time_spec()) {
        prop_assert_eq!(spec.to_string().parse::<TimeSpec>(), Ok(spec));
    }
}
