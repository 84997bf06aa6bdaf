//! Instrument presets and tone normalization.
//!
//! Every voice of a [`Note`](crate::note::Note) names an instrument. Before
//! a note reaches the queue each voice is normalized to a concrete
//! `(duration, frequency)`: percussion instruments use fixed presets, `Keys`
//! passes the caller's values through, and `End` (the song terminator, which
//! is never meant to be played) falls back to a silent default.

use platform::{Frequency, Ticks};

use crate::tempo::{NoteLength, Tempo};

/// Closed set of instruments a voice can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instrument {
    /// Closed hi-hat: short, high click.
    Hat,
    /// Pitched note: caller-supplied duration and frequency.
    Keys,
    /// Kick drum: short, low thump.
    Kick,
    /// No voice; the channel sits this note out.
    None,
    /// Silence for the caller-supplied duration.
    Rest,
    /// Snare: short, mid-range crack.
    Snare,
    /// Song terminator. Not a playable instrument.
    End,
}

/// Hi-hat pitch.
pub const HAT_FREQUENCY: Frequency = Frequency::new(3520);
/// Kick pitch.
pub const KICK_FREQUENCY: Frequency = Frequency::new(93);
/// Snare pitch.
pub const SNARE_FREQUENCY: Frequency = Frequency::new(1000);

/// Hi-hat length: a sixteenth at the default tempo.
pub const HAT_DURATION: Ticks = Tempo::DEFAULT.ticks(NoteLength::Sixteenth);
/// Kick length: an eighth at the default tempo.
pub const KICK_DURATION: Ticks = Tempo::DEFAULT.ticks(NoteLength::Eighth);
/// Snare length: an eighth at the default tempo.
pub const SNARE_DURATION: Ticks = Tempo::DEFAULT.ticks(NoteLength::Eighth);

/// Which half of a note a voice belongs to. Only the fallback differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceRole {
    /// Channel A.
    Main,
    /// Channel B.
    Dual,
}

impl VoiceRole {
    /// Tone used when the instrument has no meaning for playback.
    ///
    /// The main voice goes idle at once. The dual voice plays one silent
    /// tick so channel B still produces an expiry.
    pub const fn fallback(self) -> (Ticks, Frequency) {
        match self {
            Self::Main => (Ticks::ZERO, Frequency::REST),
            Self::Dual => (Ticks::new(1), Frequency::REST),
        }
    }
}

impl Instrument {
    /// `true` for instruments whose duration and frequency are fixed.
    pub const fn is_preset(self) -> bool {
        matches!(self, Self::Hat | Self::Kick | Self::Snare | Self::None)
    }
}

/// Resolve an instrument to the concrete tone a channel will play.
///
/// Pure: no queue or hardware side effects.
pub const fn normalize(
    instrument: Instrument,
    role: VoiceRole,
    duration: Ticks,
    frequency: Frequency,
) -> (Ticks, Frequency) {
    match instrument {
        Instrument::Keys => (duration, frequency),
        Instrument::Rest => (duration, Frequency::REST),
        Instrument::Hat => (HAT_DURATION, HAT_FREQUENCY),
        Instrument::Kick => (KICK_DURATION, KICK_FREQUENCY),
        Instrument::Snare => (SNARE_DURATION, SNARE_FREQUENCY),
        Instrument::None => (Ticks::ZERO, Frequency::REST),
        Instrument::End => role.fallback(),
    }
}
