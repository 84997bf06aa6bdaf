//! Notes as written by the caller, and note pairs as stored in the queue.

use platform::{Channel, Frequency, Ticks};

use crate::instrument::{normalize, Instrument, VoiceRole};

/// What channel A and channel B play simultaneously for one scheduling cycle.
///
/// `frequency_* == 0` is a rest; `duration_* == 0` means the channel goes
/// idle immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotePair {
    /// Channel A duration.
    pub duration_a: Ticks,
    /// Channel A frequency.
    pub frequency_a: Frequency,
    /// Channel B duration.
    pub duration_b: Ticks,
    /// Channel B frequency.
    pub frequency_b: Frequency,
}

impl NotePair {
    /// Both channels idle.
    pub const SILENT: Self = Self {
        duration_a: Ticks::ZERO,
        frequency_a: Frequency::REST,
        duration_b: Ticks::ZERO,
        frequency_b: Frequency::REST,
    };

    /// The `(duration, frequency)` for one channel.
    pub const fn voice(&self, channel: Channel) -> (Ticks, Frequency) {
        match channel {
            Channel::A => (self.duration_a, self.frequency_a),
            Channel::B => (self.duration_b, self.frequency_b),
        }
    }
}

/// One voice of a [`Note`]: an instrument plus the caller's duration and
/// frequency (only meaningful for `Keys` and, for the duration, `Rest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Voice {
    /// Instrument tag.
    pub instrument: Instrument,
    /// Requested duration.
    pub duration: Ticks,
    /// Requested frequency.
    pub frequency: Frequency,
}

impl Voice {
    /// No voice.
    pub const NONE: Self = Self::of(Instrument::None);

    /// A pitched note.
    pub const fn keys(duration: Ticks, frequency: Frequency) -> Self {
        Self {
            instrument: Instrument::Keys,
            duration,
            frequency,
        }
    }

    /// Silence for `duration`.
    pub const fn rest(duration: Ticks) -> Self {
        Self {
            instrument: Instrument::Rest,
            duration,
            frequency: Frequency::REST,
        }
    }

    /// An instrument with no caller values (percussion presets, `None`).
    pub const fn of(instrument: Instrument) -> Self {
        Self {
            instrument,
            duration: Ticks::ZERO,
            frequency: Frequency::REST,
        }
    }

    /// Resolve to the concrete tone for `role`.
    pub const fn normalize(self, role: VoiceRole) -> (Ticks, Frequency) {
        normalize(self.instrument, role, self.duration, self.frequency)
    }
}

/// A note as written in a song: a main voice for channel A and a dual voice
/// for channel B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Voice for channel A.
    pub main: Voice,
    /// Voice for channel B.
    pub dual: Voice,
}

impl Note {
    /// End-of-song marker.
    pub const END: Self = Self {
        main: Voice::of(Instrument::End),
        dual: Voice::NONE,
    };

    /// A note from two voices.
    pub const fn new(main: Voice, dual: Voice) -> Self {
        Self { main, dual }
    }

    /// A single pitched note on channel A; channel B sits out.
    pub const fn keys(duration: Ticks, frequency: Frequency) -> Self {
        Self::new(Voice::keys(duration, frequency), Voice::NONE)
    }

    /// `true` for the end-of-song marker.
    pub const fn is_end(&self) -> bool {
        matches!(self.main.instrument, Instrument::End)
    }

    /// Convert both voices to `Keys` carrying their normalized tones.
    ///
    /// Identity on a note whose voices are already `Keys`.
    pub const fn to_keys(self) -> Self {
        let (duration_a, frequency_a) = self.main.normalize(VoiceRole::Main);
        let (duration_b, frequency_b) = self.dual.normalize(VoiceRole::Dual);
        Self {
            main: Voice::keys(duration_a, frequency_a),
            dual: Voice::keys(duration_b, frequency_b),
        }
    }

    /// The queue record for this note.
    pub const fn to_pair(self) -> NotePair {
        let (duration_a, frequency_a) = self.main.normalize(VoiceRole::Main);
        let (duration_b, frequency_b) = self.dual.normalize(VoiceRole::Dual);
        NotePair {
            duration_a,
            frequency_a,
            duration_b,
            frequency_b,
        }
    }
}

impl From<Note> for NotePair {
    fn from(note: Note) -> Self {
        note.to_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{HAT_DURATION, HAT_FREQUENCY, KICK_DURATION, KICK_FREQUENCY};

    #[test]
    fn keys_note_is_fixed_point_of_to_keys() {
        let note = Note::new(
            Voice::keys(Ticks::new(500), Frequency::new(494)),
            Voice::keys(Ticks::new(250), Frequency::new(93)),
        );
        assert_eq!(note.to_keys(), note);
    }

    #[test]
    fn to_keys_resolves_percussion() {
        let note = Note::new(Voice::of(Instrument::Hat), Voice::of(Instrument::Kick));
        let keys = note.to_keys();
        assert_eq!(keys.main, Voice::keys(HAT_DURATION, HAT_FREQUENCY));
        assert_eq!(keys.dual, Voice::keys(KICK_DURATION, KICK_FREQUENCY));
    }

    #[test]
    fn to_pair_matches_to_keys() {
        let note = Note::new(Voice::rest(Ticks::new(500)), Voice::of(Instrument::Snare));
        let keys = note.to_keys();
        let pair = note.to_pair();
        assert_eq!(pair.voice(Channel::A), (keys.main.duration, keys.main.frequency));
        assert_eq!(pair.voice(Channel::B), (keys.dual.duration, keys.dual.frequency));
    }

    #[test]
    fn end_marker_is_detected() {
        assert!(Note::END.is_end());
        assert!(!Note::keys(Ticks::new(1), Frequency::new(440)).is_end());
    }

    #[test]
    fn single_voice_note_leaves_b_idle() {
        let pair = Note::keys(Ticks::new(250), Frequency::new(440)).to_pair();
        assert_eq!(pair.voice(Channel::B), (Ticks::ZERO, Frequency::REST));
    }
}
