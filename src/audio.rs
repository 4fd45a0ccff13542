//! Sound cue vocabulary and sink contract
//!
//! The simulation emits cues as events; playback lives entirely behind the
//! `SoundSink` boundary and is fire-and-forget. A muted frontend simply
//! drops the cues.

use serde::Serialize;

/// The fixed cue vocabulary the simulation emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Shoot,
    Explosion,
    PowerUp,
    Hit,
    LevelUp,
}

impl SoundCue {
    /// Stable cue name for frontends keyed by string
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Shoot => "shoot",
            SoundCue::Explosion => "explosion",
            SoundCue::PowerUp => "powerup",
            SoundCue::Hit => "hit",
            SoundCue::LevelUp => "levelup",
        }
    }
}

/// Playback boundary; implementations must tolerate being called every tick
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that swallows every cue (headless runs, muted frontends)
#[derive(Debug, Default)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _cue: SoundCue) {}
}
