//! Buzzer tone channel abstraction.
//!
//! A [`ToneChannel`] is one buzzer: a tone timer that produces the square wave
//! and a duration timer that raises an expiry interrupt when the note is over.
//! [`ChannelPair`] owns both buzzers and dispatches on a [`Target`], which may
//! address one channel or broadcast to [`Target::All`].
//!
//! All methods are non-blocking and safe to call from interrupt context.

use crate::audio_types::{Frequency, Ticks, ToneHz};

/// One of the two buzzer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Main voice (buzzer 0).
    A,
    /// Secondary voice (buzzer 1).
    B,
}

impl Channel {
    /// The other channel.
    #[must_use]
    pub const fn sibling(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Addressee of a channel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// A single channel.
    One(Channel),
    /// Both channels.
    All,
}

impl From<Channel> for Target {
    fn from(channel: Channel) -> Self {
        Self::One(channel)
    }
}

/// A single buzzer driven by a tone timer and a duration timer.
pub trait ToneChannel {
    /// Reset the time base to zero and program a new note.
    ///
    /// Loads the duration timer period from `duration`, clears any pending
    /// expiry, enables the expiry notification and starts counting. With
    /// `Some(tone)` the tone timer is reprogrammed and started; with `None`
    /// (a rest) the tone timer is left off while the duration still runs.
    /// Marks the channel busy.
    ///
    /// `duration` is non-zero; zero-length notes are routed to [`stop`].
    ///
    /// [`stop`]: ToneChannel::stop
    fn arm(&mut self, duration: Ticks, tone: Option<ToneHz>);

    /// Re-enable the expiry notification and resume counting without
    /// reprogramming either period. Marks the channel busy.
    fn start(&mut self);

    /// Halt both timers, disable the expiry notification, clear busy.
    fn stop(&mut self);

    /// `true` while the channel is counting toward an expiry.
    fn is_busy(&self) -> bool;
}

/// Both buzzer channels, addressable individually or together.
pub struct ChannelPair<C> {
    a: C,
    b: C,
}

impl<C: ToneChannel> ChannelPair<C> {
    /// Take ownership of both channels.
    pub fn new(a: C, b: C) -> Self {
        Self { a, b }
    }

    /// Shared access to one channel.
    pub fn channel(&self, channel: Channel) -> &C {
        match channel {
            Channel::A => &self.a,
            Channel::B => &self.b,
        }
    }

    /// Exclusive access to one channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut C {
        match channel {
            Channel::A => &mut self.a,
            Channel::B => &mut self.b,
        }
    }

    /// Arm the target for `duration` at `frequency`.
    ///
    /// A zero `duration` stops the target instead ("play nothing").
    /// A zero `frequency` arms a rest: the duration is counted, no tone
    /// period is ever computed.
    pub fn arm(&mut self, target: impl Into<Target>, duration: Ticks, frequency: Frequency) {
        let target = target.into();
        if duration.is_zero() {
            self.stop(target);
            return;
        }
        let tone = frequency.tone();
        self.for_each(target, |c| c.arm(duration, tone));
    }

    /// Resume the target without reprogramming it.
    pub fn start(&mut self, target: impl Into<Target>) {
        self.for_each(target.into(), ToneChannel::start);
    }

    /// Stop the target.
    pub fn stop(&mut self, target: impl Into<Target>) {
        self.for_each(target.into(), ToneChannel::stop);
    }

    /// Busy flag of one channel, or of any channel for [`Target::All`].
    pub fn is_busy(&self, target: impl Into<Target>) -> bool {
        match target.into() {
            Target::One(channel) => self.channel(channel).is_busy(),
            Target::All => self.a.is_busy() || self.b.is_busy(),
        }
    }

    fn for_each(&mut self, target: Target, mut f: impl FnMut(&mut C)) {
        match target {
            Target::One(channel) => f(self.channel_mut(channel)),
            Target::All => {
                f(&mut self.a);
                f(&mut self.b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{ChannelEvent, MockToneChannel};

    fn pair() -> ChannelPair<MockToneChannel> {
        ChannelPair::new(MockToneChannel::new(), MockToneChannel::new())
    }

    #[test]
    fn sibling_is_involutive() {
        assert_eq!(Channel::A.sibling(), Channel::B);
        assert_eq!(Channel::B.sibling().sibling(), Channel::B);
    }

    #[test]
    fn zero_duration_stops_instead_of_arming() {
        let mut p = pair();
        p.arm(Channel::A, Ticks::new(100), Frequency::new(440));
        p.arm(Channel::A, Ticks::ZERO, Frequency::new(440));
        assert!(!p.is_busy(Channel::A));
        assert_eq!(p.channel(Channel::A).events().last(), Some(&ChannelEvent::Stop));
    }

    #[test]
    fn zero_frequency_arms_a_rest() {
        let mut p = pair();
        p.arm(Channel::B, Ticks::new(50), Frequency::REST);
        assert!(p.is_busy(Channel::B));
        assert_eq!(p.channel(Channel::B).tone(), None);
    }

    #[test]
    fn all_target_reaches_both_channels() {
        let mut p = pair();
        p.arm(Target::All, Ticks::new(10), Frequency::new(262));
        assert!(p.is_busy(Channel::A) && p.is_busy(Channel::B));
        p.stop(Target::All);
        assert!(!p.is_busy(Target::All));
    }

    #[test]
    fn all_busy_when_any_channel_busy() {
        let mut p = pair();
        assert!(!p.is_busy(Target::All));
        p.arm(Channel::B, Ticks::new(10), Frequency::new(262));
        assert!(p.is_busy(Target::All));
        assert!(!p.is_busy(Channel::A));
    }
}
