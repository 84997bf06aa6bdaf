//! Hardware Abstraction Layer (HAL) for the Piezo Duet player
//!
//! This crate provides the trait-based abstraction over the two buzzer
//! channels, enabling the playback core to be developed and tested without
//! physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: main, demo song, timer interrupts)
//!         ↓
//! Playback core (playback crate: note queue, scheduler, music player)
//!         ↓
//! Platform HAL (this crate - ToneChannel trait, newtypes, timer math)
//!         ↓
//! Hardware Layer (embassy-stm32 PAC: TIM2..TIM5)
//! ```
//!
//! # Contents
//!
//! - [`ToneChannel`] - one buzzer: a tone timer plus a duration timer
//! - [`ChannelPair`] - both buzzers, addressable individually or as [`Target::All`]
//! - [`audio_types`] - `Ticks`, `Frequency`, `ToneHz` newtypes
//! - [`clock_config`] - timer clock rates and reload/prescaler math
//!
//! # Features
//!
//! - `std`: Enable standard library support (mocks, `std::error::Error` impls)
//! - `defmt`: Enable `defmt::Format` derives
//!
//! # Example
//!
//! ```
//! use platform::{Channel, ChannelPair, Frequency, Target, Ticks, ToneChannel, ToneHz};
//!
//! #[derive(Default)]
//! struct Led { busy: bool }
//!
//! impl ToneChannel for Led {
//!     fn arm(&mut self, _duration: Ticks, _tone: Option<ToneHz>) { self.busy = true; }
//!     fn start(&mut self) { self.busy = true; }
//!     fn stop(&mut self) { self.busy = false; }
//!     fn is_busy(&self) -> bool { self.busy }
//! }
//!
//! let mut pair = ChannelPair::new(Led::default(), Led::default());
//! pair.arm(Channel::A, Ticks::new(250), Frequency::new(440));
//! assert!(pair.is_busy(Channel::A));
//! assert!(pair.is_busy(Target::All));
//! pair.stop(Target::All);
//! assert!(!pair.is_busy(Target::All));
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // timer and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]

pub mod audio_types;
pub mod clock_config;
pub mod config;
pub mod tone;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use audio_types::{Frequency, OutOfRangeError, Ticks, ToneHz};
pub use tone::{Channel, ChannelPair, Target, ToneChannel};

#[cfg(all(feature = "std", not(test)))]
extern crate std;
