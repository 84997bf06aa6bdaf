//! Tempo and note lengths, expressed in duration-timer ticks.
//!
//! One bar is four beats; at the default 120 BPM a bar lasts 2000 ms, so a
//! quarter note is 500 ticks on the 1 kHz duration timer.

use platform::clock_config::DURATION_TIMER_HZ;
use platform::config::{BEATS_PER_BAR, DEFAULT_TEMPO_BPM};
use platform::{OutOfRangeError, Ticks};

/// Note length as a fraction of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoteLength {
    /// One bar.
    Whole,
    /// 1/2 bar.
    Half,
    /// 1/4 bar (one beat).
    Quarter,
    /// 1/8 bar.
    Eighth,
    /// 1/16 bar.
    Sixteenth,
}

impl NoteLength {
    const fn divisor(self) -> u32 {
        match self {
            Self::Whole => 1,
            Self::Half => 2,
            Self::Quarter => 4,
            Self::Eighth => 8,
            Self::Sixteenth => 16,
        }
    }
}

/// A tempo in beats per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo(u32);

impl Tempo {
    /// Slowest accepted tempo.
    pub const MIN_BPM: u32 = 1;
    /// Fastest accepted tempo.
    pub const MAX_BPM: u32 = 1_000;

    /// The default tempo, 120 BPM.
    pub const DEFAULT: Self = Self(DEFAULT_TEMPO_BPM);

    /// Create a tempo, rejecting values outside 1..=1000 BPM.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `bpm` is outside the accepted range.
    pub fn new(bpm: u32) -> Result<Self, OutOfRangeError> {
        if (Self::MIN_BPM..=Self::MAX_BPM).contains(&bpm) {
            Ok(Self(bpm))
        } else {
            Err(OutOfRangeError {
                value: bpm,
                min: Self::MIN_BPM,
                max: Self::MAX_BPM,
            })
        }
    }

    /// Beats per minute.
    pub const fn bpm(self) -> u32 {
        self.0
    }

    /// Length of one bar in ticks.
    #[allow(clippy::arithmetic_side_effects)] // Safety: 60 * 1000 * 4 fits u32; bpm >= 1
    pub const fn bar(self) -> Ticks {
        Ticks::new(60 * DURATION_TIMER_HZ * BEATS_PER_BAR / self.0)
    }

    /// Length of a note in ticks.
    #[allow(clippy::arithmetic_side_effects)] // Safety: divisor is a non-zero constant
    pub const fn ticks(self, length: NoteLength) -> Ticks {
        Ticks::new(self.bar().get() / length.divisor())
    }

    /// Length of a dotted note (one and a half times the plain length).
    #[allow(clippy::arithmetic_side_effects)] // Safety: half of a value added to itself stays below 1.5 * bar
    pub const fn dotted(self, length: NoteLength) -> Ticks {
        let plain = self.ticks(length).get();
        Ticks::new(plain + plain / 2)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}
