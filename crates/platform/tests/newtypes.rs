//! Type system enforcement tests for the buzzer domain newtypes.
//! These newtypes keep durations, rests and audible tones apart at compile time.
#![allow(clippy::expect_used)]

// ── Ticks ────────────────────────────────────────────────────────────────────

#[test]
fn ticks_zero_is_zero() {
    use platform::Ticks;
    assert!(Ticks::ZERO.is_zero());
    assert!(!Ticks::new(1).is_zero());
}

#[test]
fn ticks_is_u32_sized() {
    use platform::Ticks;
    assert_eq!(core::mem::size_of::<Ticks>(), 4);
}

#[test]
fn ticks_order_by_length() {
    use platform::Ticks;
    assert!(Ticks::new(125) < Ticks::new(250));
}

// ── Frequency ────────────────────────────────────────────────────────────────

#[test]
fn frequency_zero_is_rest() {
    use platform::Frequency;
    assert!(Frequency::new(0).is_rest());
    assert_eq!(Frequency::new(0), Frequency::REST);
}

#[test]
fn frequency_from_tone_keeps_hz() {
    use platform::{Frequency, ToneHz};
    let tone = ToneHz::new(93).expect("93 Hz is audible");
    assert_eq!(Frequency::from(tone).get(), 93);
}

// ── ToneHz ───────────────────────────────────────────────────────────────────

#[test]
fn tone_hz_accepts_one() {
    use platform::ToneHz;
    assert!(ToneHz::new(1).is_ok());
}

#[test]
fn tone_hz_rejects_zero_with_range() {
    use platform::ToneHz;
    let err = ToneHz::new(0).expect_err("0 Hz is not a tone");
    assert_eq!((err.value, err.min, err.max), (0, 1, u32::MAX));
}

#[test]
fn option_tone_hz_has_niche() {
    use platform::ToneHz;
    // NonZeroU32 niche: a rest costs no extra space in a channel's state.
    assert_eq!(
        core::mem::size_of::<Option<ToneHz>>(),
        core::mem::size_of::<u32>()
    );
}

#[test]
fn out_of_range_error_displays_bounds() {
    use platform::ToneHz;
    let err = ToneHz::new(0).expect_err("0 Hz is not a tone");
    assert_eq!(err.to_string(), "value 0 outside 1..=4294967295");
}
