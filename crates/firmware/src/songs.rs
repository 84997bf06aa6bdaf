//! Built-in songs.
//!
//! Note lengths come from [`Tempo::DEFAULT`] (120 BPM, 2000 ms per bar).
//! Channel B only ever plays percussion presets, so its voice is a bare
//! instrument tag.

use platform::{Frequency, Ticks};
use playback::{Instrument, Note, NoteLength, Tempo, Voice};
use Instrument::{Hat, Kick, None as Off};

const TEMPO: Tempo = Tempo::DEFAULT;

const W: Ticks = TEMPO.ticks(NoteLength::Whole);
const H: Ticks = TEMPO.ticks(NoteLength::Half);
const Q: Ticks = TEMPO.ticks(NoteLength::Quarter);
const E: Ticks = TEMPO.ticks(NoteLength::Eighth);
/// Quarter plus eighth.
const DQ: Ticks = TEMPO.dotted(NoteLength::Quarter);

const fn keys(length: Ticks, hz: u32, dual: Instrument) -> Note {
    Note::new(Voice::keys(length, Frequency::new(hz)), Voice::of(dual))
}

const fn rest(length: Ticks, dual: Instrument) -> Note {
    Note::new(Voice::rest(length), Voice::of(dual))
}

const fn kick() -> Note {
    Note::new(Voice::of(Kick), Voice::NONE)
}

/// The demo played when the user button is pressed. Terminated by
/// [`Note::END`].
pub const DEMO_SONG: &[Note] = &[
    rest(Q, Kick),
    rest(E, Hat),
    //
    keys(E, 440, Off),
    keys(Q, 494, Off),
    rest(E, Off),
    keys(E, 440, Kick),
    keys(E, 440, Off),
    keys(E, 392, Off),
    keys(Q, 370, Kick),
    keys(Q, 370, Off),
    //
    keys(Q, 740, Hat),
    keys(DQ, 370, Kick),
    rest(E, Off),
    //
    keys(E, 370, Off),
    keys(E, 330, Off),
    keys(E, 294, Off),
    keys(E, 330, Off),
    keys(Q, 370, Kick),
    //
    kick(),
    kick(),
    kick(),
    //
    keys(Q, 494, Off),
    rest(Q, Off),
    //
    keys(Q, 494, Off),
    rest(E, Off),
    keys(E, 370, Off),
    keys(E, 440, Off),
    keys(E, 392, Off),
    keys(Q, 370, Off),
    keys(Q, 370, Off),
    //
    keys(E, 370, Off),
    keys(E, 440, Off),
    keys(Q, 370, Off),
    rest(Q, Off),
    //
    keys(E, 370, Off),
    keys(E, 330, Off),
    keys(E, 294, Off),
    keys(E, 330, Off),
    keys(DQ, 370, Off),
    //
    keys(E, 588, Off),
    keys(E, 588, Off),
    keys(E, 588, Off),
    keys(E, 588, Off),
    keys(E, 659, Off),
    keys(Q, 740, Off),
    keys(Q, 659, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 440, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 392, Off),
    keys(W, 370, Off),
    //
    kick(),
    rest(Q, Off),
    kick(),
    kick(),
    rest(E, Off),
    //
    keys(E, 659, Off),
    keys(Q, 740, Off),
    keys(Q, 659, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 440, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 392, Off),
    keys(DQ, 740, Off),
    keys(E, 880, Off),
    keys(H, 740, Off),
    //
    kick(),
    kick(),
    rest(E, Off),
    kick(),
    kick(),
    rest(Q, Off),
    //
    keys(E, 659, Off),
    keys(Q, 740, Off),
    keys(Q, 659, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 440, Off),
    keys(Q, 588, Off),
    keys(Q, 494, Off),
    keys(Q, 392, Off),
    keys(W, 370, Off),
    //
    kick(),
    rest(DQ, Off),
    //
    keys(E, 370, Off),
    keys(E, 330, Off),
    keys(E, 294, Off),
    keys(E, 330, Off),
    keys(W, 370, Off),
    //
    kick(),
    kick(),
    rest(Q, Off),
    //
    keys(E, 370, Off),
    keys(E, 330, Off),
    keys(E, 294, Off),
    keys(E, 330, Off),
    keys(W, 294, Off),
    kick(),
    Note::END,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_song_ends_with_single_end_marker() {
        assert_eq!(DEMO_SONG.last(), Some(&Note::END));
        assert_eq!(DEMO_SONG.iter().filter(|n| n.is_end()).count(), 1);
    }

    #[test]
    fn demo_song_fits_the_note_queue() {
        assert!(DEMO_SONG.len() <= platform::config::NOTE_QUEUE_CAPACITY);
    }

    #[test]
    fn dotted_quarter_is_750_ms() {
        assert_eq!(DQ, Ticks::new(750));
    }

    #[test]
    fn channel_b_only_plays_percussion() {
        for note in DEMO_SONG {
            assert!(note.dual.instrument.is_preset(), "{note:?}");
        }
    }
}
