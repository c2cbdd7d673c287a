#![doc = r"Frame runtime, host hooks and sound feedback for the Glass card toolkit."]

pub mod frame_clock;
pub mod platform;
pub mod runtime;
pub mod sound;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, PollingScheduler, RuntimeScheduler};
pub use runtime::{Runtime, RuntimeHandle};
pub use sound::{LogSoundPlayer, SoundEffect, SoundPlayer};

pub(crate) type FrameCallbackId = u64;
