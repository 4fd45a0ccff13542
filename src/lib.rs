//! Nova Strike - a vertical arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collision, spawning, game state)
//! - `achievements`: Idempotent achievement unlock registry
//! - `audio`: Sound cue vocabulary and sink contract
//! - `render`: Renderer contract and vector-shape fallbacks
//! - `settings`: Presentation/audio preferences
//! - `highscores`: In-memory end-of-run leaderboard

pub mod achievements;
pub mod audio;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use achievements::{Achievement, AchievementId, Achievements};
pub use highscores::HighScores;
pub use settings::Settings;

/// RGB color carried by entities for the renderer.
pub type Color = [u8; 3];

/// Game configuration constants
pub mod consts {
    /// Default play-field dimensions; the frontend restages real sizes on resize
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Player ship
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Horizontal/vertical speed per tick while a movement key is held
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_START_LIVES: u32 = 3;
    /// Gap between the player's starting position and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    /// Damage immunity window after a non-fatal hit
    pub const INVINCIBILITY_MS: f64 = 2_000.0;

    /// Shooting
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 8.0;
    /// Horizontal velocity of the side bullets in a triple-shot volley
    pub const TRIPLE_SHOT_SPREAD: f32 = 2.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 5.0;
    pub const ENEMY_BULLET_SPEED: f32 = 5.0;

    /// Enemy spawning: per-tick chance is BASE * (1 + level * LEVEL_FACTOR),
    /// capped at ENEMIES_PER_LEVEL * level spawns per level
    pub const ENEMY_SPAWN_BASE_CHANCE: f64 = 0.02;
    pub const ENEMY_SPAWN_LEVEL_FACTOR: f64 = 0.25;
    pub const ENEMIES_PER_LEVEL: u32 = 10;
    /// Fast enemies appear from level 2, on an independent draw above this
    pub const FAST_UNLOCK_LEVEL: u32 = 2;
    pub const FAST_THRESHOLD: f32 = 0.6;
    /// Heavy enemies appear from level 3, on a second independent draw
    pub const HEAVY_UNLOCK_LEVEL: u32 = 3;
    pub const HEAVY_THRESHOLD: f32 = 0.8;
    /// Enemies return fire from this level on
    pub const ENEMY_FIRE_MIN_LEVEL: u32 = 3;
    pub const ENEMY_FIRE_CHANCE: f64 = 0.005;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 28.0;
    pub const POWERUP_FALL_SPEED: f32 = 2.5;
    pub const POWERUP_DURATION_MS: f64 = 10_000.0;
    /// Drop chance per kill; decays past DECAY_START down to the floor
    pub const POWERUP_DROP_CHANCE: f64 = 0.30;
    pub const POWERUP_DROP_DECAY_START: u32 = 15;
    pub const POWERUP_DROP_DECAY_PER_LEVEL: f64 = 0.02;
    pub const POWERUP_DROP_FLOOR: f64 = 0.10;
    /// Weighted variant draw: triple-shot / shield / extra-life
    pub const POWERUP_WEIGHT_TRIPLE: f32 = 0.4;
    pub const POWERUP_WEIGHT_SHIELD: f32 = 0.4;

    /// Particles
    pub const PARTICLES_PER_KILL: usize = 10;
    /// Life decay per tick (~50-tick lifetime)
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Maximum live particles; oldest are evicted first
    pub const MAX_PARTICLES: usize = 256;

    /// Milestones
    pub const KILLS_FIRST_BLOOD: u64 = 1;
    pub const KILLS_EXTERMINATOR: u64 = 50;
    pub const PICKUPS_COLLECTOR: u64 = 10;
    pub const LEVEL_VETERAN: u32 = 5;
    pub const LEVEL_BONUS_LIFE: u32 = 15;
    pub const SURVIVOR_MS: f64 = 60_000.0;
}
