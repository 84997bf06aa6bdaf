//! Piezo Duet Firmware - Main Entry Point
//!
//! Hardware-only entry point for the NUCLEO-F446RE.

#![no_std]
#![no_main]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Pull};
use embassy_stm32::interrupt;
use embassy_time::Timer;

use firmware::audio::piezo::hardware::{enable_expiry_interrupts, init_timers, on_expiry_irq};
use firmware::input::{ButtonEdge, Debouncer, MAX_SETTLE_POLLS, POLL_MS};
use firmware::{PiezoChannel, DEMO_SONG};
use platform::{config, Channel, ChannelPair};
use playback::{MusicPlayer, SharedPlayer};

// Panic handler
use panic_probe as _;

/// The music player, shared between the button loop and the expiry interrupts.
static PLAYER: SharedPlayer<PiezoChannel> = SharedPlayer::new();

#[interrupt]
fn TIM2() {
    on_expiry_irq(&PLAYER, Channel::A);
}

#[interrupt]
fn TIM5() {
    on_expiry_irq(&PLAYER, Channel::B);
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    defmt::info!("{=str} v{=str}", config::APP_NAME, config::APP_VERSION);

    let p = embassy_stm32::init(firmware::boot::build_embassy_config());

    if let Err(e) = init_timers() {
        defmt::error!("Buzzer timer init failed: {}", e);
        loop {
            Timer::after_secs(1).await;
        }
    }

    PLAYER.install(MusicPlayer::new(ChannelPair::new(
        PiezoChannel::new(Channel::A),
        PiezoChannel::new(Channel::B),
    )));
    enable_expiry_interrupts();
    defmt::info!("Player ready, press the user button");

    let mut button = ExtiInput::new(Input::new(p.PC13, Pull::Up), p.EXTI13);
    let mut debouncer = Debouncer::new();

    loop {
        button.wait_for_any_edge().await;

        for _ in 0..MAX_SETTLE_POLLS {
            Timer::after_millis(POLL_MS).await;
            match debouncer.sample(button.is_low()) {
                Some(ButtonEdge::Pressed) => {
                    restart_demo();
                    break;
                }
                Some(ButtonEdge::Released) => break,
                None => {}
            }
        }
    }
}

/// Reset the player, queue the demo song and start it.
fn restart_demo() {
    PLAYER.init();
    let queued = PLAYER.add_song(DEMO_SONG);
    let started = PLAYER.play();
    defmt::info!("Demo: {=usize} notes queued, playing={=bool}", queued, started);
}
