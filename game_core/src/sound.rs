//! Sound hook
//!
//! The game only announces which sound should play. A backend plugs in by
//! implementing [`SoundHook`].

use std::fmt;

/// Sound categories emitted by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Flap,
    Score,
    GameOver,
}

impl Sound {
    pub fn label(&self) -> &'static str {
        match self {
            Sound::Flap => "flap",
            Sound::Score => "score",
            Sound::GameOver => "gameOver",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Abstract audio backend
pub trait SoundHook {
    fn play(&self, sound: Sound);
}

/// Placeholder backend that only logs
pub struct LogSound;

impl SoundHook for LogSound {
    fn play(&self, sound: Sound) {
        log::info!("Playing sound: {}", sound);
    }
}
