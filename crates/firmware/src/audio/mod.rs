//! Audio subsystem: the two piezo buzzer channels
//!
//! # Structure
//!
//! - `piezo/hardware.rs`: `PiezoChannel`, TIM2..TIM5 register driver (hardware feature)
//! - `piezo/emulator.rs`: `EmulatedPiezo`, a traced software channel (emulator feature)
//!
//! # Dependency Injection
//!
//! The playback core targets the [`platform::ToneChannel`] trait.
//! Concrete channels are injected when the player is built:
//!
//! ```rust,ignore
//! // Hardware:
//! MusicPlayer::new(ChannelPair::new(PiezoChannel::new(Channel::A), PiezoChannel::new(Channel::B)));
//! // Emulator:
//! MusicPlayer::new(ChannelPair::new(EmulatedPiezo::new(Channel::A), EmulatedPiezo::new(Channel::B)));
//! ```

pub mod piezo;

#[cfg(feature = "hardware")]
pub use piezo::hardware::PiezoChannel;

#[cfg(feature = "emulator")]
pub use piezo::emulator::EmulatedPiezo;
