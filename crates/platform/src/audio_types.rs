//! Audio domain newtypes for compile-time safety.
//!
//! These zero-cost abstractions prevent common errors:
//! - `Ticks`: duration-timer counts, kept apart from frequencies
//! - `Frequency`: a requested pitch where 0 means "rest"
//! - `ToneHz`: an audible, non-zero pitch; the only type a tone timer accepts,
//!   so the `clock / (2 * f)` period computation can never divide by zero

use core::num::NonZeroU32;

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {} outside {}..={}",
            self.value, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

// ── Ticks ────────────────────────────────────────────────────────────────────

/// A duration in duration-timer ticks.
///
/// With the default 1 kHz duration clock one tick is one millisecond.
/// `Ticks(0)` means "play nothing": a channel armed with it goes idle at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Ticks(u32);

impl Ticks {
    /// Zero ticks: the channel goes idle immediately.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw tick count.
    #[must_use]
    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Return the raw tick count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `true` for a zero-length duration.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add two durations, saturating at `u32::MAX` ticks.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Ticks {
    fn from(ticks: u32) -> Self {
        Self(ticks)
    }
}

// ── Frequency ────────────────────────────────────────────────────────────────

/// A requested pitch in Hz, where `0` denotes silence (a rest).
///
/// This is the value carried by queued notes. It must be narrowed to a
/// [`ToneHz`] with [`Frequency::tone`] before a tone timer can be programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Frequency(u32);

impl Frequency {
    /// Silence.
    pub const REST: Self = Self(0);

    /// Wrap a raw frequency in Hz (0 = rest).
    #[must_use]
    pub const fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Return the raw frequency in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `true` when this frequency is a rest.
    #[must_use]
    pub const fn is_rest(self) -> bool {
        self.0 == 0
    }

    /// The audible tone, or `None` for a rest.
    #[must_use]
    pub fn tone(self) -> Option<ToneHz> {
        NonZeroU32::new(self.0).map(ToneHz)
    }
}

impl From<u32> for Frequency {
    fn from(hz: u32) -> Self {
        Self(hz)
    }
}

impl From<ToneHz> for Frequency {
    fn from(tone: ToneHz) -> Self {
        Self(tone.get())
    }
}

// ── ToneHz ───────────────────────────────────────────────────────────────────

/// An audible tone frequency in Hz. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ToneHz(NonZeroU32);

impl ToneHz {
    /// Create a `ToneHz`, returning an error for 0 Hz.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `hz == 0`.
    pub fn new(hz: u32) -> Result<Self, OutOfRangeError> {
        NonZeroU32::new(hz).map(Self).ok_or(OutOfRangeError {
            value: hz,
            min: 1,
            max: u32::MAX,
        })
    }

    /// Return the frequency in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ToneHz {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32}Hz", self.get());
    }
}
