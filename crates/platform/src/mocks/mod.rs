//! Mock implementations for testing
//!
//! [`MockToneChannel`] implements [`ToneChannel`] without hardware. It records
//! every call for assertions and models its duration timer so that tests can
//! advance time with [`MockToneChannel::tick`] and observe expiry events.

use crate::audio_types::{Ticks, ToneHz};
use crate::tone::ToneChannel;

/// One recorded call on a [`MockToneChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    /// `arm(duration, tone)`
    Arm(Ticks, Option<ToneHz>),
    /// `start()`
    Start,
    /// `stop()`
    Stop,
}

/// Capacity of the recorded call log; later calls are not recorded.
pub const EVENT_LOG_CAPACITY: usize = 128;

/// Mock buzzer channel with a simulated duration timer.
#[derive(Debug, Default)]
pub struct MockToneChannel {
    busy: bool,
    counting: bool,
    expiry_enabled: bool,
    period: Ticks,
    elapsed: u32,
    tone: Option<ToneHz>,
    events: heapless::Vec<ChannelEvent, EVENT_LOG_CAPACITY>,
}

impl MockToneChannel {
    /// Create an idle channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the duration timer by one tick.
    ///
    /// Returns `true` when the period elapsed and the expiry notification is
    /// enabled, i.e. when the hardware would enter the expiry interrupt.
    /// Like a free-running timer, the counter wraps and keeps counting until
    /// the channel is stopped.
    pub fn tick(&mut self) -> bool {
        if !self.counting {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed < self.period.get() {
            return false;
        }
        self.elapsed = 0;
        self.expiry_enabled
    }

    /// Tone currently programmed (`None` for a rest or a never-armed channel).
    pub fn tone(&self) -> Option<ToneHz> {
        self.tone
    }

    /// Duration currently programmed.
    pub fn period(&self) -> Ticks {
        self.period
    }

    /// `true` while a tone would be audible on the pin.
    pub fn is_sounding(&self) -> bool {
        self.counting && self.tone.is_some()
    }

    /// All recorded calls, oldest first.
    pub fn events(&self) -> &[ChannelEvent] {
        &self.events
    }

    /// Number of `arm` calls recorded.
    pub fn arm_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ChannelEvent::Arm(..)))
            .count()
    }

    /// Forget recorded calls.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: ChannelEvent) {
        if self.events.len() < self.events.capacity() {
            let _ = self.events.push(event);
        }
    }
}

impl ToneChannel for MockToneChannel {
    fn arm(&mut self, duration: Ticks, tone: Option<ToneHz>) {
        self.elapsed = 0;
        self.period = duration;
        self.tone = tone;
        self.expiry_enabled = true;
        self.counting = true;
        self.busy = true;
        self.record(ChannelEvent::Arm(duration, tone));
    }

    fn start(&mut self) {
        self.expiry_enabled = true;
        self.counting = true;
        self.busy = true;
        self.record(ChannelEvent::Start);
    }

    fn stop(&mut self) {
        self.counting = false;
        self.expiry_enabled = false;
        self.busy = false;
        self.record(ChannelEvent::Stop);
    }

    fn is_busy(&self) -> bool {
        self.busy
    }
}
