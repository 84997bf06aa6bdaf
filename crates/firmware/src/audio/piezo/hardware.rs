//! STM32F446 piezo channel driven through the general-purpose timer registers.
//!
//! The duration timer (TIM2/TIM5, 32-bit) counts milliseconds; its update
//! event is the channel's expiry interrupt. The tone timer (TIM3/TIM4) runs
//! CH1 in output-compare toggle mode at 40 kHz, so the pin flips once per
//! reload and the buzzer sees a square wave at the note frequency.
//!
//! [`PiezoChannel`] holds no register state of its own: the busy flag is
//! the duration timer's CEN bit. That keeps it `Send` and zero-cost to copy
//! into the static shared player.
//!
//! embassy-stm32 has no driver for TIMx output-compare toggle mode with an
//! update interrupt, so the PAC is used directly (`unstable-pac` feature).

use embassy_stm32::interrupt::{self, InterruptExt};
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals::Moder;
use embassy_stm32::pac::gpio::Gpio;
use embassy_stm32::pac::timer::vals::Ocm;
use embassy_stm32::pac::timer::{TimGp16, TimGp32};

use platform::clock_config::{
    prescaler_for, tone_reload, APB1_TIMER_CLOCK_HZ, DURATION_TIMER_HZ, TONE_TIMER_HZ,
};
use platform::{Channel, Ticks, ToneChannel, ToneHz};
use playback::{ExpiryOutcome, SharedPlayer};

use crate::boot::BUZZER_IRQ_PRIORITY;

/// Output-compare channel index of the tone output (CH1).
const TONE_OUTPUT: usize = 0;

/// Alternate function routing TIM3_CH1 to PA6 and TIM4_CH1 to PB6.
const TONE_PIN_AF: u8 = 2;

/// Tone output pin number on its port (PA6, PB6).
const TONE_PIN: usize = 6;

/// AFRL holds the alternate function of pins 0..=7.
const TONE_PIN_AFR: usize = 0;

/// Buzzer bring-up failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum BuzzerInitError {
    /// The timer clock cannot be divided down to the requested count rate
    /// with a 16-bit prescaler.
    Prescaler {
        /// Requested count rate.
        count_hz: u32,
    },
}

impl core::fmt::Display for BuzzerInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Prescaler { count_hz } => write!(
                f,
                "no 16-bit prescaler divides {APB1_TIMER_CLOCK_HZ} Hz to {count_hz} Hz"
            ),
        }
    }
}

/// One buzzer: a duration timer plus a tone timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiezoChannel {
    channel: Channel,
}

impl PiezoChannel {
    /// Handle to the timers of `channel`. Call [`init_timers`] once first.
    pub const fn new(channel: Channel) -> Self {
        Self { channel }
    }

    fn duration_timer(self) -> TimGp32 {
        match self.channel {
            Channel::A => pac::TIM2,
            Channel::B => pac::TIM5,
        }
    }

    fn tone_timer(self) -> TimGp16 {
        match self.channel {
            Channel::A => pac::TIM3,
            Channel::B => pac::TIM4,
        }
    }

    /// Read and clear the duration timer's update flag.
    ///
    /// Returns `false` for a spurious entry (the flag was already cleared
    /// by [`stop`](ToneChannel::stop)).
    pub fn take_expiry(&self) -> bool {
        let sr = self.duration_timer().sr();
        let fired = sr.read().uif();
        if fired {
            sr.modify(|w| w.set_uif(false));
        }
        fired
    }
}

impl ToneChannel for PiezoChannel {
    fn arm(&mut self, duration: Ticks, tone: Option<ToneHz>) {
        let dur = self.duration_timer();
        let tim = self.tone_timer();

        dur.cr1().modify(|w| w.set_cen(false));
        tim.cr1().modify(|w| w.set_cen(false));

        // Update event fires after ARR + 1 counts.
        dur.arr().write_value(duration.get().saturating_sub(1));
        dur.cnt().write_value(0);
        dur.sr().modify(|w| w.set_uif(false));
        dur.dier().modify(|w| w.set_uie(true));

        match tone {
            Some(tone) => {
                let reload = tone_reload(TONE_TIMER_HZ, tone).saturating_sub(1);
                let arr = u16::try_from(reload).unwrap_or(u16::MAX);
                tim.arr().write(|w| w.set_arr(arr));
                tim.cnt().write(|w| w.set_cnt(0));
                tim.ccer().modify(|w| w.set_cce(TONE_OUTPUT, true));
                tim.cr1().modify(|w| w.set_cen(true));
            }
            None => tim.ccer().modify(|w| w.set_cce(TONE_OUTPUT, false)),
        }

        dur.cr1().modify(|w| w.set_cen(true));

        defmt::trace!(
            "{}: arm {=u32} ms, {=u32} Hz",
            self.channel,
            duration.get(),
            tone.map_or(0, ToneHz::get)
        );
    }

    fn start(&mut self) {
        let dur = self.duration_timer();
        let tim = self.tone_timer();
        dur.dier().modify(|w| w.set_uie(true));
        if tim.ccer().read().cce(TONE_OUTPUT) {
            tim.cr1().modify(|w| w.set_cen(true));
        }
        dur.cr1().modify(|w| w.set_cen(true));
    }

    fn stop(&mut self) {
        let dur = self.duration_timer();
        let tim = self.tone_timer();
        dur.cr1().modify(|w| w.set_cen(false));
        dur.dier().modify(|w| w.set_uie(false));
        dur.sr().modify(|w| w.set_uif(false));
        tim.cr1().modify(|w| w.set_cen(false));
        tim.ccer().modify(|w| w.set_cce(TONE_OUTPUT, false));
        defmt::trace!("{}: stop", self.channel);
    }

    fn is_busy(&self) -> bool {
        self.duration_timer().cr1().read().cen()
    }
}

/// Clock, prescale and route all four buzzer timers. Leaves every timer
/// stopped and both expiry interrupts masked.
///
/// # Errors
///
/// Returns [`BuzzerInitError::Prescaler`] if a count rate in
/// [`platform::clock_config`] is unreachable from the APB1 timer clock.
pub fn init_timers() -> Result<(), BuzzerInitError> {
    let duration_psc =
        prescaler_for(APB1_TIMER_CLOCK_HZ, DURATION_TIMER_HZ).ok_or(BuzzerInitError::Prescaler {
            count_hz: DURATION_TIMER_HZ,
        })?;
    let tone_psc =
        prescaler_for(APB1_TIMER_CLOCK_HZ, TONE_TIMER_HZ).ok_or(BuzzerInitError::Prescaler {
            count_hz: TONE_TIMER_HZ,
        })?;

    pac::RCC.apb1enr().modify(|w| {
        w.set_tim2en(true);
        w.set_tim3en(true);
        w.set_tim4en(true);
        w.set_tim5en(true);
    });
    pac::RCC.ahb1enr().modify(|w| {
        w.set_gpioaen(true);
        w.set_gpioben(true);
    });

    for channel in [Channel::A, Channel::B] {
        let piezo = PiezoChannel::new(channel);

        let dur = piezo.duration_timer();
        dur.cr1().modify(|w| w.set_cen(false));
        dur.psc().write_value(duration_psc);
        // Latch PSC now; the forced update must not look like an expiry.
        dur.egr().write(|w| w.set_ug(true));
        dur.sr().modify(|w| w.set_uif(false));

        let tim = piezo.tone_timer();
        tim.cr1().modify(|w| w.set_cen(false));
        tim.psc().write_value(tone_psc);
        tim.ccmr_output(0)
            .modify(|w| w.set_ocm(TONE_OUTPUT, Ocm::TOGGLE));
        tim.ccr(TONE_OUTPUT).write(|w| w.set_ccr(0));
        tim.egr().write(|w| w.set_ug(true));
    }

    route_tone_pin(pac::GPIOA);
    route_tone_pin(pac::GPIOB);

    defmt::info!(
        "buzzer timers ready: duration PSC={=u16} tone PSC={=u16}",
        duration_psc,
        tone_psc
    );
    Ok(())
}

fn route_tone_pin(port: Gpio) {
    port.afr(TONE_PIN_AFR)
        .modify(|w| w.set_afr(TONE_PIN, TONE_PIN_AF));
    port.moder().modify(|w| w.set_moder(TONE_PIN, Moder::ALTERNATE));
}

/// Unmask TIM2 and TIM5 at one shared priority.
///
/// Call only after the shared player is installed.
pub fn enable_expiry_interrupts() {
    interrupt::TIM2.set_priority(BUZZER_IRQ_PRIORITY);
    interrupt::TIM5.set_priority(BUZZER_IRQ_PRIORITY);
    // SAFETY: the TIM2/TIM5 handlers only touch the critical-section
    // protected shared player, which is installed before this call.
    unsafe {
        interrupt::TIM2.enable();
        interrupt::TIM5.enable();
    }
}

/// Body of the TIM2/TIM5 handlers.
///
/// The update flag is checked inside the same critical section as the
/// scheduler call, so a `stop()` from thread mode can never be followed by
/// a stale expiry restarting playback.
pub fn on_expiry_irq(
    player: &SharedPlayer<PiezoChannel>,
    channel: Channel,
) -> Option<ExpiryOutcome> {
    player
        .with(|p| {
            let fired = p.scheduler().channels().channel(channel).take_expiry();
            fired.then(|| p.on_expiry(channel))
        })
        .flatten()
}
