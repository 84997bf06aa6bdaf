//! Hardware boot sequence for the Piezo Duet board (NUCLEO-F446RE).
//!
//! Initialization order (MUST be respected):
//!   1. RCC: HSI 16 MHz, APB1 /2 so the APB1 timer clock is 16 MHz
//!   2. Embassy init (time driver on TIM12, EXTI)
//!   3. Buzzer timers: clocks, prescalers, toggle outputs, pins
//!   4. Shared player installed before the expiry interrupts are unmasked
//!   5. Expiry interrupts: TIM2 and TIM5 at the same priority
//!   6. Button loop

/// Ordered list of boot sequence steps for documentation and testing.
///
/// # Correctness Invariants
///
/// - The player must be installed before TIM2/TIM5 are unmasked; an expiry
///   on an empty slot is ignored and playback would stall.
/// - Both expiry interrupts share one priority so that neither can preempt
///   the other between the sibling check and the pull.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. RCC: HSI 16 MHz sysclk, APB1 /2 (timer clock x2 = 16 MHz)",
    "2. Embassy: init with explicit time driver (TIM12)",
    "3. Buzzer timers: TIM2..TIM5 clocks, PSC, toggle mode, PA6/PB6 AF2",
    "4. Player: install shared music player",
    "5. NVIC: unmask TIM2 + TIM5 at BUZZER_IRQ_PRIORITY",
    "6. Button: debounce loop on the user button (PC13 EXTI)",
];

/// NVIC priority of both expiry interrupts.
#[cfg(feature = "hardware")]
pub const BUZZER_IRQ_PRIORITY: embassy_stm32::interrupt::Priority =
    embassy_stm32::interrupt::Priority::P1;

/// Build the embassy-stm32 configuration for the buzzer timer clocks.
///
/// HSI drives SYSCLK directly. APB1 runs at 8 MHz; timers on a divided APB
/// bus are clocked at twice the bus rate, giving the 16 MHz that
/// [`platform::clock_config::APB1_TIMER_CLOCK_HZ`] assumes.
#[cfg(feature = "hardware")]
pub fn build_embassy_config() -> embassy_stm32::Config {
    use embassy_stm32::rcc::{AHBPrescaler, APBPrescaler, Sysclk};

    let mut config = embassy_stm32::Config::default();

    config.rcc.hsi = true;
    config.rcc.sys = Sysclk::HSI;
    config.rcc.ahb_pre = AHBPrescaler::DIV1; // 16 MHz
    config.rcc.apb1_pre = APBPrescaler::DIV2; // 8 MHz bus, 16 MHz timers
    config.rcc.apb2_pre = APBPrescaler::DIV1; // 16 MHz

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(needle: &str) -> usize {
        BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains(needle))
            .unwrap_or_else(|| panic!("{needle} step required"))
    }

    #[test]
    fn test_player_installed_before_interrupts_unmasked() {
        assert!(position("Player") < position("NVIC"));
    }

    #[test]
    fn test_timers_configured_before_interrupts_unmasked() {
        assert!(position("Buzzer timers") < position("NVIC"));
    }

    #[test]
    fn test_rcc_comes_first() {
        assert_eq!(position("RCC"), 0);
    }

    #[test]
    fn test_time_driver_avoids_buzzer_timers() {
        let embassy = BOOT_SEQUENCE_STEPS
            .get(position("Embassy"))
            .copied()
            .unwrap_or_default();
        for timer in platform::clock_config::BUZZER_TIMERS {
            assert!(
                !embassy.contains(&format!("({})", timer.timer)),
                "time driver must not use {}",
                timer.timer
            );
        }
    }
}
