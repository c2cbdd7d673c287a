//! Sound-effect feedback for user input.

use std::fmt;

/// System sound effects played in response to input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Tap,
    Disallowed,
    Dismissed,
    Error,
    Success,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Tap => "tap",
            SoundEffect::Disallowed => "disallowed",
            SoundEffect::Dismissed => "dismissed",
            SoundEffect::Error => "error",
            SoundEffect::Success => "success",
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sink for sound effects. Audio output lives outside this toolkit.
pub trait SoundPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Player that only records the effect in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&self, effect: SoundEffect) {
        log::info!("sound: {effect}");
    }
}
