//! Piezo buzzer channels.
//!
//! | Channel | Duration timer | Tone timer | Output pin |
//! |---------|----------------|------------|------------|
//! | A       | TIM2           | TIM3 CH1   | PA6 (AF2)  |
//! | B       | TIM5           | TIM4 CH1   | PB6 (AF2)  |
//!
//! Timer math lives in [`platform::clock_config`]; this module only applies it.

#[cfg(feature = "hardware")]
pub mod hardware;

#[cfg(feature = "emulator")]
pub mod emulator;
