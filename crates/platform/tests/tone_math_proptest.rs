//! Property-based tests for buzzer timer math.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.
#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use platform::clock_config::{prescaler_for, tone_reload, TONE_TIMER_HZ};
use platform::{Frequency, ToneHz};

proptest::proptest! {
    /// tone_reload never returns 0 (a zero ARR would halt the tone timer).
    #[test]
    fn tone_reload_never_zero(hz in 1u32..=u32::MAX, clock in 0u32..=u32::MAX) {
        let tone = ToneHz::new(hz).unwrap();
        assert!(tone_reload(clock, tone) >= 1);
    }

    /// Higher pitch → shorter or equal half-period (monotone inverse relationship).
    #[test]
    fn tone_reload_is_monotone_inverse(a in 1u32..=20_000u32, b in 1u32..=20_000u32) {
        let ra = tone_reload(TONE_TIMER_HZ, ToneHz::new(a).unwrap());
        let rb = tone_reload(TONE_TIMER_HZ, ToneHz::new(b).unwrap());
        if a > b {
            assert!(ra <= rb, "{} Hz → {} should be <= {} Hz → {}", a, ra, b, rb);
        } else if a < b {
            assert!(ra >= rb, "{} Hz → {} should be >= {} Hz → {}", a, ra, b, rb);
        }
    }

    /// Within the audible range the programmed half-period is exact to one count.
    #[test]
    fn tone_reload_matches_half_period(hz in 20u32..=10_000u32) {
        let reload = tone_reload(TONE_TIMER_HZ, ToneHz::new(hz).unwrap());
        let produced = reload * 2 * hz;
        assert!(produced <= TONE_TIMER_HZ);
        assert!(TONE_TIMER_HZ - produced < 2 * hz);
    }

    /// Frequency::tone is None exactly for 0 Hz.
    #[test]
    fn frequency_tone_is_some_iff_nonzero(hz in 0u32..=u32::MAX) {
        assert_eq!(Frequency::new(hz).tone().is_some(), hz != 0);
    }

    /// A reachable prescaler never counts slower than requested.
    #[test]
    fn prescaler_never_undershoots(count in 245u32..=16_000_000u32) {
        let input = 16_000_000u32;
        let psc = prescaler_for(input, count).unwrap();
        let produced = input / (u32::from(psc) + 1);
        assert!(produced >= count, "psc {} gives {} Hz < {} Hz", psc, produced, count);
    }
}
