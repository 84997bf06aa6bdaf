//! Dual-channel playback scheduler.
//!
//! Runs inside each channel's expiry interrupt. The two channels of a pair
//! generally finish at different instants; the channel that finishes *last*
//! fetches the next pair and re-arms both, the one that finishes first stops
//! and waits. "Last" is detected by looking at the **sibling's** busy flag:
//!
//! ```text
//! on expiry of C:
//!   sibling busy                -> stop C, wait for the sibling     (Waiting)
//!   sibling idle, queue has data -> pull, arm A and B, restart C    (Advanced)
//!   sibling idle, queue empty    -> stop both, playback halts       (Drained)
//! ```
//!
//! The check-and-pull must not interleave with the sibling's own handler or
//! with a producer's push; [`SharedPlayer`](crate::shared::SharedPlayer)
//! runs every call in a critical section.
//!
//! Per channel: `Idle` (stopped) → `Running` (armed, counting) → on expiry
//! back to `Running` (advanced) or `Idle` (waiting / drained).

use platform::config::NOTE_QUEUE_CAPACITY;
use platform::{Channel, ChannelPair, Target, ToneChannel};

use crate::note::NotePair;
use crate::note_queue::NoteQueue;

/// Observable state of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelState {
    /// Stopped, not counting.
    Idle,
    /// Armed and counting toward its expiry.
    Running,
}

/// What an expiry handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExpiryOutcome {
    /// The sibling is still playing; the expiring channel stopped.
    Waiting,
    /// The next pair was fetched and both channels re-armed.
    Advanced,
    /// Nothing left to play; both channels stopped.
    Drained,
}

/// Owns the note queue and both channels; both expiry handlers borrow it.
pub struct Scheduler<C, const N: usize = NOTE_QUEUE_CAPACITY> {
    channels: ChannelPair<C>,
    queue: NoteQueue<N>,
}

impl<C: ToneChannel, const N: usize> Scheduler<C, N> {
    /// Take ownership of both channels with an empty queue.
    pub fn new(channels: ChannelPair<C>) -> Self {
        Self {
            channels,
            queue: NoteQueue::new(),
        }
    }

    /// Kick off playback: fetch one pair and arm both channels from it.
    ///
    /// Does nothing and returns `false` if the queue is empty. From here on
    /// the expiry interrupts keep playback going.
    pub fn kick(&mut self) -> bool {
        let loaded = self.load_next();
        #[cfg(feature = "defmt")]
        defmt::debug!("kick: loaded={=bool} queued={=usize}", loaded, self.queue.len());
        loaded
    }

    /// Expiry handler for `channel`.
    pub fn on_expiry(&mut self, channel: Channel) -> ExpiryOutcome {
        let outcome = if self.channels.is_busy(channel.sibling()) {
            self.channels.stop(channel);
            ExpiryOutcome::Waiting
        } else if self.load_next() {
            if self.channels.is_busy(channel) {
                self.channels.start(channel);
            }
            ExpiryOutcome::Advanced
        } else {
            self.channels.stop(Target::All);
            ExpiryOutcome::Drained
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("expiry {}: {}", channel, outcome);
        outcome
    }

    /// Stop both channels. Queued pairs stay queued.
    pub fn halt(&mut self) {
        self.channels.stop(Target::All);
    }

    /// State of one channel.
    pub fn state(&self, channel: Channel) -> ChannelState {
        if self.channels.is_busy(channel) {
            ChannelState::Running
        } else {
            ChannelState::Idle
        }
    }

    /// The note queue.
    pub fn queue(&self) -> &NoteQueue<N> {
        &self.queue
    }

    /// The note queue, mutably (producer side).
    pub fn queue_mut(&mut self) -> &mut NoteQueue<N> {
        &mut self.queue
    }

    /// Both channels.
    pub fn channels(&self) -> &ChannelPair<C> {
        &self.channels
    }

    /// Both channels, mutably.
    pub fn channels_mut(&mut self) -> &mut ChannelPair<C> {
        &mut self.channels
    }

    /// Arm both channels from the next pair.
    ///
    /// A pair whose durations are both zero leaves both channels idle and
    /// would never produce an expiry, so fetching continues until a channel
    /// is running or the queue is empty.
    fn load_next(&mut self) -> bool {
        while !self.queue.is_empty() {
            let Some(pair) = self.queue.pull() else {
                break;
            };
            self.arm_pair(&pair);
            if self.channels.is_busy(Target::All) {
                return true;
            }
        }
        false
    }

    fn arm_pair(&mut self, pair: &NotePair) {
        for channel in [Channel::A, Channel::B] {
            let (duration, frequency) = pair.voice(channel);
            self.channels.arm(channel, duration, frequency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::{ChannelEvent, MockToneChannel};
    use platform::{Frequency, Ticks};

    fn scheduler() -> Scheduler<MockToneChannel, 8> {
        Scheduler::new(ChannelPair::new(
            MockToneChannel::new(),
            MockToneChannel::new(),
        ))
    }

    fn pair(a: u32, b: u32) -> NotePair {
        NotePair {
            duration_a: Ticks::new(a),
            frequency_a: Frequency::new(440),
            duration_b: Ticks::new(b),
            frequency_b: Frequency::new(220),
        }
    }

    #[test]
    fn kick_on_empty_queue_does_nothing() {
        let mut s = scheduler();
        assert!(!s.kick());
        assert_eq!(s.state(Channel::A), ChannelState::Idle);
        assert_eq!(s.state(Channel::B), ChannelState::Idle);
        assert!(s.channels().channel(Channel::A).events().is_empty());
    }

    #[test]
    fn kick_arms_both_from_one_pair() {
        let mut s = scheduler();
        s.queue_mut().push(pair(10, 20));
        s.queue_mut().push(pair(30, 40));
        assert!(s.kick());
        assert_eq!(s.queue().len(), 1);
        assert_eq!(s.channels().channel(Channel::A).period(), Ticks::new(10));
        assert_eq!(s.channels().channel(Channel::B).period(), Ticks::new(20));
    }

    #[test]
    fn first_to_finish_waits_for_sibling() {
        let mut s = scheduler();
        s.queue_mut().push(pair(10, 20));
        s.queue_mut().push(pair(5, 5));
        s.kick();
        assert_eq!(s.on_expiry(Channel::A), ExpiryOutcome::Waiting);
        assert_eq!(s.state(Channel::A), ChannelState::Idle);
        assert_eq!(s.state(Channel::B), ChannelState::Running);
        assert_eq!(s.queue().len(), 1, "waiting channel must not pull");
    }

    #[test]
    fn last_to_finish_advances_and_restarts_itself() {
        let mut s = scheduler();
        s.queue_mut().push(pair(10, 20));
        s.queue_mut().push(pair(5, 7));
        s.kick();
        s.on_expiry(Channel::A);
        s.channels_mut().channel_mut(Channel::B).clear_events();
        assert_eq!(s.on_expiry(Channel::B), ExpiryOutcome::Advanced);
        assert!(s.queue().is_empty());
        assert_eq!(
            s.channels().channel(Channel::B).events(),
            &[
                ChannelEvent::Arm(Ticks::new(7), Frequency::new(220).tone()),
                ChannelEvent::Start
            ]
        );
        assert_eq!(s.state(Channel::A), ChannelState::Running);
    }

    #[test]
    fn drained_queue_stops_everything() {
        let mut s = scheduler();
        s.queue_mut().push(pair(10, 20));
        s.kick();
        s.on_expiry(Channel::A);
        assert_eq!(s.on_expiry(Channel::B), ExpiryOutcome::Drained);
        assert_eq!(s.state(Channel::A), ChannelState::Idle);
        assert_eq!(s.state(Channel::B), ChannelState::Idle);
    }

    #[test]
    fn all_zero_pairs_are_skipped() {
        let mut s = scheduler();
        s.queue_mut().push(NotePair::SILENT);
        s.queue_mut().push(NotePair::SILENT);
        s.queue_mut().push(pair(3, 0));
        assert!(s.kick());
        assert!(s.queue().is_empty());
        assert_eq!(s.state(Channel::A), ChannelState::Running);
        assert_eq!(s.state(Channel::B), ChannelState::Idle);
    }

    #[test]
    fn only_silent_pairs_leave_playback_stopped() {
        let mut s = scheduler();
        s.queue_mut().push(NotePair::SILENT);
        assert!(!s.kick());
        assert!(s.queue().is_empty());
        assert!(!s.channels().is_busy(Target::All));
    }

    #[test]
    fn halt_keeps_queue() {
        let mut s = scheduler();
        s.queue_mut().push(pair(10, 20));
        s.queue_mut().push(pair(10, 20));
        s.kick();
        s.halt();
        assert!(!s.channels().is_busy(Target::All));
        assert_eq!(s.queue().len(), 1);
    }
}
