//! Fixed-capacity song buffer.
//!
//! A `Song` is an ordered list of [`Note`]s that never contains the
//! [`Note::END`] marker; its length is its end. Pass `&song` to
//! [`MusicPlayer::add_song`](crate::player::MusicPlayer::add_song).

use heapless::Vec;
use platform::config::MAX_SONG_LENGTH;

use crate::note::Note;

/// An ordered list of notes, up to `N` long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song<const N: usize = MAX_SONG_LENGTH> {
    notes: Vec<Note, N>,
}

impl<const N: usize> Song<N> {
    /// An empty song.
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Build a song from `notes`, stopping at the first [`Note::END`].
    ///
    /// Notes beyond the capacity are dropped.
    pub fn from_notes<I>(notes: I) -> Self
    where
        I: IntoIterator<Item = Note>,
    {
        let mut song = Self::new();
        for note in notes.into_iter().take_while(|note| !note.is_end()) {
            if song.push(note).is_err() {
                break;
            }
        }
        song
    }

    /// Append a note.
    ///
    /// # Errors
    ///
    /// Returns the note back if the song is full or if it is [`Note::END`].
    pub fn push(&mut self, note: Note) -> Result<(), Note> {
        if note.is_end() {
            return Err(note);
        }
        self.notes.push(note)
    }

    /// Append every note of `other`; returns how many fit.
    pub fn extend_from(&mut self, other: &[Note]) -> usize {
        other
            .iter()
            .take_while(|note| self.push(**note).is_ok())
            .count()
    }

    /// The notes in order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Iterate over the notes.
    pub fn iter(&self) -> core::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// `true` if the song has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Maximum number of notes.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<'a, const N: usize> IntoIterator for &'a Song<N> {
    type Item = &'a Note;
    type IntoIter = core::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
