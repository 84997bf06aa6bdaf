//! Two-voice playback core: note queue, expiry scheduler, music player
//!
//! Hardware-independent. Everything here is generic over
//! [`platform::ToneChannel`], so the same code drives the STM32 timers in the
//! firmware and the mock channels in host tests.
//!
//! # Data flow
//!
//! ```text
//! Note (instrument tags) --normalize--> NotePair --push--> NoteQueue
//!                                                              |
//!         expiry IRQ A / expiry IRQ B --> Scheduler --pull-----+
//!                                             |
//!                                             +--> ChannelPair (arm/start/stop)
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls
//! - `defmt`: `defmt::Format` derives and scheduler trace logging

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod instrument;
pub mod note;
pub mod note_queue;
pub mod player;
pub mod scheduler;
pub mod shared;
pub mod song;
pub mod tempo;

pub use instrument::{Instrument, VoiceRole};
pub use note::{Note, NotePair, Voice};
pub use note_queue::{NoteQueue, QueueFull};
pub use player::MusicPlayer;
pub use scheduler::{ChannelState, ExpiryOutcome, Scheduler};
pub use shared::SharedPlayer;
pub use song::Song;
pub use tempo::{NoteLength, Tempo};

#[cfg(all(feature = "std", not(test)))]
extern crate std;
