//! Piezo Duet Emulator
//!
//! Plays the demo song on two emulated buzzers and logs every note.
//! Run with: cargo run --example duet_emulator --features emulator
//!
//! Each tone and the run summary are logged unless `RUST_LOG` says
//! otherwise; pass `--fast` to skip the real-time pacing.

use std::time::Duration;

use firmware::audio::piezo::emulator::{step, DEFAULT_LOG_FILTER};
use firmware::{EmulatedPiezo, DEMO_SONG};
use platform::{config, Channel, ChannelPair, Target};
use playback::{ExpiryOutcome, MusicPlayer, SharedPlayer};
use tracing_subscriber::EnvFilter;

static PLAYER: SharedPlayer<EmulatedPiezo> = SharedPlayer::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let fast = std::env::args().any(|arg| arg == "--fast");
    tracing::info!("{}", config::dev_banner());

    PLAYER.install(MusicPlayer::new(ChannelPair::new(
        EmulatedPiezo::new(Channel::A),
        EmulatedPiezo::new(Channel::B),
    )));
    let queued = PLAYER.add_song(DEMO_SONG);
    PLAYER.play();
    tracing::info!(queued, "playing demo song");

    let mut tick = tokio::time::interval(Duration::from_millis(1));
    let mut elapsed_ms: u64 = 0;
    let mut pairs: u32 = 1;
    while PLAYER.is_busy(Target::All) {
        if !fast {
            tick.tick().await;
        }
        elapsed_ms = elapsed_ms.saturating_add(1);
        for outcome in step(&PLAYER).into_iter().flatten() {
            if outcome == ExpiryOutcome::Advanced {
                pairs = pairs.saturating_add(1);
            }
        }
    }

    tracing::info!(pairs, elapsed_ms, "song finished");
}
