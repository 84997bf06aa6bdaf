//! Timer clock configuration for the two buzzer channels on STM32F446.
//!
//! Each buzzer is driven by a pair of general-purpose timers:
//!
//! - a **tone timer** in output-compare toggle mode; its auto-reload value sets
//!   the half-period of the square wave on the buzzer pin, so
//!   `reload = tone_clock / (2 * f)`;
//! - a **duration timer** counting at 1 kHz; its auto-reload value is the
//!   note length in ticks and its update event is the channel's "expiry".
//!
//! # Timer assignment
//!
//! | Buzzer | Duration timer | Tone timer | Pin |
//! |--------|----------------|------------|-----|
//! | A      | TIM2 (32-bit)  | TIM3 CH1   | PA6 |
//! | B      | TIM5 (32-bit)  | TIM4 CH1   | PB6 |
//!
//! TIM2..TIM5 are therefore unavailable to embassy; the time driver runs on TIM12.
//!
//! # Sources
//!
//! - STM32F446 Reference Manual (RM0390): §18 (TIM2..TIM5), §18.3.8 (output compare toggle)

use crate::audio_types::ToneHz;
use crate::tone::Channel;

/// Count rate of the duration timers. One tick is one millisecond.
pub const DURATION_TIMER_HZ: u32 = 1_000;

/// Count rate of the tone timers.
pub const TONE_TIMER_HZ: u32 = 40_000;

/// Timer kernel clock on APB1 with the default (HSI, no PLL) embassy RCC config.
pub const APB1_TIMER_CLOCK_HZ: u32 = 16_000_000;

/// What a timer is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerRole {
    /// Counts the note length and raises the expiry interrupt.
    Duration,
    /// Toggles the buzzer pin at twice the tone frequency.
    Tone,
}

/// One row of the buzzer timer table.
pub struct TimerAssignment {
    /// Timer instance name (e.g. `"TIM2"`).
    pub timer: &'static str,
    /// Buzzer channel the timer belongs to.
    pub channel: Channel,
    /// Role of the timer within its channel.
    pub role: TimerRole,
    /// Count rate the prescaler must produce.
    pub count_hz: u32,
}

/// The four buzzer timers.
///
/// None of them may host the embassy time driver: `time-driver-any` would
/// grab TIM2 from buzzer A, so the firmware selects `time-driver-tim12`.
pub const BUZZER_TIMERS: &[TimerAssignment] = &[
    TimerAssignment {
        timer: "TIM2",
        channel: Channel::A,
        role: TimerRole::Duration,
        count_hz: DURATION_TIMER_HZ,
    },
    TimerAssignment {
        timer: "TIM3",
        channel: Channel::A,
        role: TimerRole::Tone,
        count_hz: TONE_TIMER_HZ,
    },
    TimerAssignment {
        timer: "TIM4",
        channel: Channel::B,
        role: TimerRole::Tone,
        count_hz: TONE_TIMER_HZ,
    },
    TimerAssignment {
        timer: "TIM5",
        channel: Channel::B,
        role: TimerRole::Duration,
        count_hz: DURATION_TIMER_HZ,
    },
];

/// Auto-reload value for a tone timer counting at `clock_hz`.
///
/// `clock_hz / (tone * 2)`, never less than 1: an ARR of 0 halts the counter,
/// so tones above `clock_hz / 2` are played at the highest reachable pitch.
#[must_use]
pub fn tone_reload(clock_hz: u32, tone: ToneHz) -> u32 {
    let toggles_per_second = tone.get().saturating_mul(2);
    clock_hz.checked_div(toggles_per_second).unwrap_or(0).max(1)
}

/// Prescaler register value that divides `input_hz` down to `count_hz`.
///
/// Returns `None` if the ratio is not reachable with a 16-bit prescaler
/// (`count_hz` of zero, faster than the input, or a ratio above 65 536).
#[must_use]
pub fn prescaler_for(input_hz: u32, count_hz: u32) -> Option<u16> {
    let ratio = input_hz.checked_div(count_hz)?;
    let psc = ratio.checked_sub(1)?;
    u16::try_from(psc).ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
