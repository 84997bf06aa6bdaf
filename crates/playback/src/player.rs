//! Music player facade.
//!
//! `MusicPlayer` is what application code talks to: it turns [`Note`]s into
//! [`NotePair`](crate::note::NotePair)s, feeds the queue, and starts or stops
//! the [`Scheduler`]. It has no I/O of its own; the channels it owns do.

use core::borrow::Borrow;

use platform::config::NOTE_QUEUE_CAPACITY;
use platform::{Channel, ChannelPair, Target, ToneChannel};

use crate::note::Note;
use crate::note_queue::NoteQueue;
use crate::scheduler::{ChannelState, ExpiryOutcome, Scheduler};

/// Two-voice music player over a pair of tone channels.
pub struct MusicPlayer<C, const N: usize = NOTE_QUEUE_CAPACITY> {
    scheduler: Scheduler<C, N>,
}

impl<C: ToneChannel, const N: usize> MusicPlayer<C, N> {
    /// Create a player over `channels`, already initialised (stopped, empty).
    pub fn new(channels: ChannelPair<C>) -> Self {
        let mut player = Self {
            scheduler: Scheduler::new(channels),
        };
        player.init();
        player
    }

    /// Stop both channels and empty the queue. Safe to call repeatedly.
    pub fn init(&mut self) {
        self.scheduler.halt();
        self.scheduler.queue_mut().clear();
    }

    /// Start playing whatever is queued.
    ///
    /// Fetches one pair and arms both channels; the expiry interrupts take it
    /// from there. Returns `false` (and does nothing) if the queue is empty.
    pub fn play(&mut self) -> bool {
        self.scheduler.kick()
    }

    /// Stop both channels immediately. Queued notes stay queued.
    pub fn stop(&mut self) {
        self.scheduler.halt();
    }

    /// Normalize `note` and queue it.
    ///
    /// Returns `false` if the queue was full and the note was dropped.
    pub fn add_note(&mut self, note: Note) -> bool {
        let accepted = self.scheduler.queue_mut().push(note.to_pair());
        if !accepted {
            #[cfg(feature = "defmt")]
            defmt::warn!("note queue full, dropped {}", note);
        }
        accepted
    }

    /// Queue every note of `song` up to (not including) the first
    /// [`Note::END`]. Notes that do not fit are dropped.
    ///
    /// Returns the number of notes queued.
    pub fn add_song<I>(&mut self, song: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<Note>,
    {
        song.into_iter()
            .map(|note| *note.borrow())
            .take_while(|note| !note.is_end())
            .filter(|note| self.add_note(*note))
            .count()
    }

    /// Drop all queued notes.
    pub fn clear(&mut self) {
        self.scheduler.queue_mut().clear();
    }

    /// Forward a channel's expiry interrupt to the scheduler.
    pub fn on_expiry(&mut self, channel: Channel) -> ExpiryOutcome {
        self.scheduler.on_expiry(channel)
    }

    /// Busy flag of one channel, or of either for [`Target::All`].
    pub fn is_busy(&self, target: impl Into<Target>) -> bool {
        self.scheduler.channels().is_busy(target)
    }

    /// State of one channel.
    pub fn state(&self, channel: Channel) -> ChannelState {
        self.scheduler.state(channel)
    }

    /// Number of note pairs waiting to be played.
    pub fn queued(&self) -> usize {
        self.scheduler.queue().len()
    }

    /// The queue, read-only.
    pub fn queue(&self) -> &NoteQueue<N> {
        self.scheduler.queue()
    }

    /// The scheduler, read-only.
    pub fn scheduler(&self) -> &Scheduler<C, N> {
        &self.scheduler
    }

    /// The scheduler, mutably (board code that drives channels directly).
    pub fn scheduler_mut(&mut self) -> &mut Scheduler<C, N> {
        &mut self.scheduler
    }
}
