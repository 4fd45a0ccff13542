//! Game settings and preferences
//!
//! Presentation and audio knobs read by the frontend; the simulation itself
//! never consults them. No storage backend here; state is in-memory for the
//! lifetime of the process, and the JSON helpers exist for embedding
//! frontends that keep their own copy.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Global mute; cues are dropped before reaching the sink
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Visual effects ===
    /// Explosion particles
    pub particles: bool,
    /// Parallax starfield background
    pub starfield: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (disables the starfield too)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            particles: true,
            starfield: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Volume the sink should actually use
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Particle cap for the renderer; zero when particles are off
    pub fn max_particles(&self) -> usize {
        if self.particles { MAX_PARTICLES } else { 0 }
    }

    /// Starfield respects reduced motion
    pub fn effective_starfield(&self) -> bool {
        self.starfield && !self.reduced_motion
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
