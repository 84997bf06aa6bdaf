//! Emulated piezo channel for desktop runs.
//!
//! Provides the same [`ToneChannel`] interface as the hardware driver. The
//! duration timer is a counter advanced by [`EmulatedPiezo::tick`]; every
//! arm/stop is reported through `tracing` so a run prints the tune as a
//! timeline instead of sounding it.

use platform::{Channel, Ticks, ToneChannel, ToneHz};
use playback::{ExpiryOutcome, SharedPlayer};

/// `RUST_LOG` fallback for desktop runs: every tone from the channels plus
/// the run summary logged by the `duet_emulator` example.
pub const DEFAULT_LOG_FILTER: &str = "firmware=debug,duet_emulator=info";

/// Software buzzer channel.
#[derive(Debug)]
pub struct EmulatedPiezo {
    channel: Channel,
    running: bool,
    period: Ticks,
    elapsed: u32,
    tone: Option<ToneHz>,
}

impl EmulatedPiezo {
    /// An idle channel.
    pub const fn new(channel: Channel) -> Self {
        Self {
            channel,
            running: false,
            period: Ticks::ZERO,
            elapsed: 0,
            tone: None,
        }
    }

    /// Advance the duration counter by one millisecond.
    ///
    /// Returns `true` when the programmed duration has elapsed, which is
    /// where the hardware would enter the expiry interrupt.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed < self.period.get() {
            return false;
        }
        self.elapsed = 0;
        true
    }

    /// Tone currently sounding, if any.
    pub fn sounding(&self) -> Option<ToneHz> {
        if self.running {
            self.tone
        } else {
            None
        }
    }
}

impl ToneChannel for EmulatedPiezo {
    fn arm(&mut self, duration: Ticks, tone: Option<ToneHz>) {
        self.period = duration;
        self.elapsed = 0;
        self.tone = tone;
        self.running = true;
        match tone {
            Some(tone) => tracing::debug!(
                channel = ?self.channel,
                ms = duration.get(),
                hz = tone.get(),
                "tone"
            ),
            None => tracing::debug!(channel = ?self.channel, ms = duration.get(), "rest"),
        }
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        if self.running {
            tracing::trace!(channel = ?self.channel, "stop");
        }
        self.running = false;
    }

    fn is_busy(&self) -> bool {
        self.running
    }
}

/// Advance both emulated channels by one millisecond and deliver any
/// expiries, channel A first.
///
/// Both counters advance in one critical section; each expiry is then
/// delivered in its own, like two interrupts arriving back to back.
pub fn step<const N: usize>(
    player: &SharedPlayer<EmulatedPiezo, N>,
) -> [Option<ExpiryOutcome>; 2] {
    let fired = player
        .with(|p| {
            let channels = p.scheduler_mut().channels_mut();
            [
                channels.channel_mut(Channel::A).tick(),
                channels.channel_mut(Channel::B).tick(),
            ]
        })
        .unwrap_or([false, false]);

    let deliver = |channel: Channel, fired: bool| {
        if fired {
            player.on_expiry(channel)
        } else {
            None
        }
    };
    let [fired_a, fired_b] = fired;
    [deliver(Channel::A, fired_a), deliver(Channel::B, fired_b)]
}
