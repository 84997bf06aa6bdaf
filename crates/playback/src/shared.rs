//! Interrupt-safe access to a [`MusicPlayer`] from foreground code and from
//! both channels' expiry interrupts.
//!
//! Every operation runs inside `critical_section::with`, so a push or clear
//! can never be preempted half-way by an expiry handler, and the two expiry
//! handlers can never both decide they are the last channel of a pair.
//!
//! ```ignore
//! static PLAYER: SharedPlayer<PiezoChannel> = SharedPlayer::new();
//!
//! #[interrupt]
//! fn TIM2() {
//!     PLAYER.on_expiry(Channel::A);
//! }
//! ```

use core::borrow::Borrow;
use core::cell::RefCell;

use critical_section::Mutex;
use platform::config::NOTE_QUEUE_CAPACITY;
use platform::{Channel, Target, ToneChannel};

use crate::note::Note;
use crate::player::MusicPlayer;
use crate::scheduler::ExpiryOutcome;

/// A [`MusicPlayer`] behind a critical-section mutex, suitable for a `static`.
///
/// Empty until [`install`](Self::install) is called; every operation on an
/// empty slot is a no-op.
pub struct SharedPlayer<C, const N: usize = NOTE_QUEUE_CAPACITY> {
    inner: Mutex<RefCell<Option<MusicPlayer<C, N>>>>,
}

impl<C: ToneChannel, const N: usize> SharedPlayer<C, N> {
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Put `player` in the slot, returning the previous one.
    pub fn install(&self, player: MusicPlayer<C, N>) -> Option<MusicPlayer<C, N>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(player))
    }

    /// Take the player out of the slot.
    pub fn take(&self) -> Option<MusicPlayer<C, N>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Run `f` on the player inside a critical section.
    ///
    /// Returns `None` if no player is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut MusicPlayer<C, N>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// See [`MusicPlayer::init`].
    pub fn init(&self) {
        self.with(MusicPlayer::init);
    }

    /// See [`MusicPlayer::play`].
    pub fn play(&self) -> bool {
        self.with(MusicPlayer::play).unwrap_or(false)
    }

    /// See [`MusicPlayer::stop`].
    pub fn stop(&self) {
        self.with(MusicPlayer::stop);
    }

    /// See [`MusicPlayer::add_note`].
    pub fn add_note(&self, note: Note) -> bool {
        self.with(|p| p.add_note(note)).unwrap_or(false)
    }

    /// See [`MusicPlayer::add_song`].
    ///
    /// Each note is queued in its own critical section so that expiry
    /// interrupts are not held off for the length of the whole song.
    pub fn add_song<I>(&self, song: I) -> usize
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

    /// See [`MusicPlayer::clear`].
    pub fn clear(&self) {
        self.with(MusicPlayer::clear);
    }

    /// Expiry interrupt entry point for `channel`.
    pub fn on_expiry(&self, channel: Channel) -> Option<ExpiryOutcome> {
        self.with(|p| p.on_expiry(channel))
    }

    /// See [`MusicPlayer::is_busy`].
    pub fn is_busy(&self, target: impl Into<Target>) -> bool {
        let target = target.into();
        self.with(|p| p.is_busy(target)).unwrap_or(false)
    }
}

impl<C: ToneChannel, const N: usize> Default for SharedPlayer<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockToneChannel;
    use platform::{ChannelPair, Frequency, Ticks};

    fn installed() -> SharedPlayer<MockToneChannel, 4> {
        let shared = SharedPlayer::new();
        shared.install(MusicPlayer::new(ChannelPair::new(
            MockToneChannel::new(),
            MockToneChannel::new(),
        )));
        shared
    }

    #[test]
    fn empty_slot_is_inert() {
        let shared: SharedPlayer<MockToneChannel, 4> = SharedPlayer::new();
        assert!(!shared.add_note(Note::keys(Ticks::new(1), Frequency::new(440))));
        assert!(!shared.play());
        assert_eq!(shared.on_expiry(Channel::A), None);
        assert!(!shared.is_busy(Target::All));
    }

    #[test]
    fn operations_reach_installed_player() {
        let shared = installed();
        assert!(shared.add_note(Note::keys(Ticks::new(10), Frequency::new(440))));
        assert!(shared.play());
        assert!(shared.is_busy(Channel::A));
        assert_eq!(shared.on_expiry(Channel::A), Some(ExpiryOutcome::Drained));
        assert!(!shared.is_busy(Target::All));
    }

    #[test]
    fn add_song_through_shared_slot() {
        let shared = installed();
        let note = Note::keys(Ticks::new(10), Frequency::new(440));
        assert_eq!(shared.add_song([note, note, Note::END, note]), 2);
        assert_eq!(shared.with(|p| p.queued()), Some(2));
    }

    #[test]
    fn take_empties_slot() {
        let shared = installed();
        assert!(shared.take().is_some());
        assert!(shared.take().is_none());
    }
}
