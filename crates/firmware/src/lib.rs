//! Piezo Duet Firmware
//!
//! Two-buzzer music player for the NUCLEO-F446RE: press the user button and
//! the demo song plays as a duet, melody on buzzer A, percussion on buzzer B.
//!
//! # Architecture
//!
//! This firmware follows a layered architecture:
//!
//! ```text
//! Application Layer (main.rs, songs, button)
//!         ↓
//! Playback core (playback crate: queue, scheduler, player)
//!         ↓
//! Buzzer Drivers (audio::piezo: TIM2..TIM5 or emulated)
//!         ↓
//! Platform HAL (platform crate, embassy-stm32 PAC)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the STM32F446 target (embassy, defmt)
//! - `emulator` - Build for desktop runs (tokio, tracing)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run --example duet_emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod audio;
pub mod boot;
pub mod input;
pub mod songs;

#[cfg(feature = "hardware")]
pub use audio::PiezoChannel;

#[cfg(feature = "emulator")]
pub use audio::EmulatedPiezo;

pub use songs::DEMO_SONG;
