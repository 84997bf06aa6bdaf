//! Application configuration and constants
//!
//! Central configuration values used across the workspace. Everything that
//! sizes a buffer or sets a musical default lives here rather than being
//! hardcoded at the use site.

/// The application name
pub const APP_NAME: &str = "Piezo Duet";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of note pairs the player can buffer ahead of playback.
pub const NOTE_QUEUE_CAPACITY: usize = 256;

/// Maximum number of notes in a song.
pub const MAX_SONG_LENGTH: usize = 256;

/// Default tempo in beats per minute.
pub const DEFAULT_TEMPO_BPM: u32 = 120;

/// Beats per bar; note lengths are fractions of a bar.
pub const BEATS_PER_BAR: u32 = 4;

/// Development mode banner
pub const fn dev_banner() -> &'static str {
    "Piezo Duet - Emulator"
}
