//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. The `World` is the single live
//! snapshot: one writer (the tick), rebuilt wholesale when a run starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::effects::ActiveEffects;
use crate::Color;
use crate::achievements::AchievementId;
use crate::audio::SoundCue;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Menu/idle; no run in progress yet
    Start,
    /// Active gameplay
    Playing,
    /// Simulation frozen, HUD still visible
    Paused,
    /// Run ended
    GameOver,
}

/// Play-field dimensions, restaged by the frontend on resize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Outward event emitted by a tick for the HUD, sound and achievement layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Score { delta: u64 },
    LifeDelta { delta: i32 },
    LevelUp { level: u32 },
    Achievement(AchievementId),
    Sound(SoundCue),
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Immune to damage while `now < invincible_until_ms`
    pub invincible_until_ms: f64,
}

impl Player {
    /// Centered horizontally, near the bottom of the field
    pub fn at_start(field: Field) -> Self {
        Self {
            pos: Vec2::new(
                (field.width - PLAYER_SIZE) / 2.0,
                field.height - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
            ),
            size: PLAYER_SIZE,
            invincible_until_ms: 0.0,
        }
    }

    pub fn is_invincible(&self, now_ms: f64) -> bool {
        now_ms < self.invincible_until_ms
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A projectile; position is the center
#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub owner: BulletOwner,
}

impl Bullet {
    /// Player shot travelling upward, with optional horizontal spread
    pub fn player_shot(muzzle: Vec2, vx: f32) -> Self {
        Self {
            pos: muzzle,
            vel: Vec2::new(vx, -BULLET_SPEED),
            radius: BULLET_RADIUS,
            color: [255, 235, 59],
            owner: BulletOwner::Player,
        }
    }

    /// Enemy shot travelling straight down
    pub fn enemy_shot(muzzle: Vec2) -> Self {
        Self {
            pos: muzzle,
            vel: Vec2::new(0.0, ENEMY_BULLET_SPEED),
            radius: ENEMY_BULLET_RADIUS,
            color: [255, 87, 34],
            owner: BulletOwner::Enemy,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn in_field(&self, field: &Field) -> bool {
        self.pos.x + self.radius > 0.0
            && self.pos.x - self.radius < field.width
            && self.pos.y + self.radius > 0.0
            && self.pos.y - self.radius < field.height
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Enemy variants, each with its own stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

impl EnemyKind {
    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Basic => 40.0,
            EnemyKind::Fast => 30.0,
            EnemyKind::Heavy => 56.0,
        }
    }

    /// Downward speed per tick
    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Basic => 2.0,
            EnemyKind::Fast => 4.0,
            EnemyKind::Heavy => 1.0,
        }
    }

    pub fn base_health(&self) -> u32 {
        match self {
            EnemyKind::Basic => 1,
            EnemyKind::Fast => 1,
            EnemyKind::Heavy => 3,
        }
    }

    /// Score awarded when destroyed by player fire
    pub fn score_value(&self) -> u64 {
        match self {
            EnemyKind::Basic => 100,
            EnemyKind::Fast => 250,
            EnemyKind::Heavy => 500,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EnemyKind::Basic => [244, 67, 54],
            EnemyKind::Fast => [255, 193, 7],
            EnemyKind::Heavy => [156, 39, 176],
        }
    }
}

/// A descending enemy; position is the top-left corner
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    /// Strictly positive while the enemy exists
    pub health: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            pos,
            kind,
            health: kind.base_health(),
        }
    }

    /// Enemies move only on the vertical axis
    pub fn advance(&mut self) {
        self.pos.y += self.kind.speed();
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.kind.size() / 2.0)
    }

    /// Muzzle point for return fire (bottom center)
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.kind.size() / 2.0, self.pos.y + self.kind.size())
    }

    pub fn aabb(&self) -> Aabb {
        let size = self.kind.size();
        Aabb::new(self.pos.x, self.pos.y, size, size)
    }
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    TripleShot,
    Shield,
    ExtraLife,
}

impl PowerUpKind {
    /// Letter glyph for the renderer's circle fallback
    pub fn glyph(&self) -> char {
        match self {
            PowerUpKind::TripleShot => 'T',
            PowerUpKind::Shield => 'S',
            PowerUpKind::ExtraLife => 'L',
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PowerUpKind::TripleShot => [33, 150, 243],
            PowerUpKind::Shield => [0, 188, 212],
            PowerUpKind::ExtraLife => [76, 175, 80],
        }
    }
}

/// A falling pickup; position is the top-left corner
#[derive(Debug, Clone, Serialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn advance(&mut self) {
        self.pos.y += POWERUP_FALL_SPEED;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, POWERUP_SIZE, POWERUP_SIZE)
    }
}

/// A purely cosmetic explosion fragment
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases over time
    pub life: f32,
    pub color: Color,
}

impl Particle {
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= PARTICLE_DECAY;
    }
}

/// Score, lives and level for the current run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunStats {
    /// Monotonically non-decreasing
    pub score: u64,
    /// Run ends when this reaches 0
    pub lives: u32,
    /// Monotonically non-decreasing, starts at 1
    pub level: u32,
}

/// Complete simulation snapshot for one run
#[derive(Debug, Clone, Serialize)]
pub struct World {
    pub phase: GamePhase,
    pub field: Field,
    pub player: Player,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Timed non-consumable effects (triple-shot, shield)
    pub effects: ActiveEffects,
    pub stats: RunStats,
    /// Resets on every level-up
    pub enemies_spawned_this_level: u32,
    /// Lifetime kill count for this run
    pub kills: u64,
    /// Lifetime pickup count for this run
    pub powerups_collected: u64,
    pub session_start_ms: f64,
    pub last_shot_ms: f64,
}

impl World {
    /// Fresh world in the Start phase; `restart` begins an actual run
    pub fn new(field: Field, now_ms: f64) -> Self {
        Self {
            phase: GamePhase::Start,
            field,
            player: Player::at_start(field),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            effects: ActiveEffects::default(),
            stats: RunStats {
                score: 0,
                lives: PLAYER_START_LIVES,
                level: 1,
            },
            enemies_spawned_this_level: 0,
            kills: 0,
            powerups_collected: 0,
            session_start_ms: now_ms,
            // first shot is allowed immediately
            last_shot_ms: now_ms - FIRE_COOLDOWN_MS,
        }
    }

    /// Re-initialize everything and enter Playing
    pub fn restart(&mut self, now_ms: f64) {
        *self = World::new(self.field, now_ms);
        self.phase = GamePhase::Playing;
    }

    pub fn score(&self) -> u64 {
        self.stats.score
    }

    pub fn lives(&self) -> u32 {
        self.stats.lives
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    /// Active (unexpired) effects with remaining milliseconds, for the HUD
    pub fn active_power_ups(&self, now_ms: f64) -> impl Iterator<Item = (PowerUpKind, f64)> + '_ {
        self.effects.remaining(now_ms)
    }

    /// Push a particle, evicting the oldest once the cap is reached
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() >= MAX_PARTICLES {
            let _ = self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Keep the player inside the field after movement or a resize
    pub fn clamp_player(&mut self) {
        let max = Vec2::new(
            (self.field.width - self.player.size).max(0.0),
            (self.field.height - self.player.size).max(0.0),
        );
        self.player.pos = self.player.pos.clamp(Vec2::ZERO, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_starts_clean() {
        let world = World::new(Field::default(), 5_000.0);
        assert_eq!(world.phase, GamePhase::Start);
        assert_eq!(world.stats.score, 0);
        assert_eq!(world.stats.lives, PLAYER_START_LIVES);
        assert_eq!(world.stats.level, 1);
        assert!(world.enemies.is_empty());
        assert!(world.player_bullets.is_empty());
        assert!(world.enemy_bullets.is_empty());
        assert!(world.powerups.is_empty());
        assert!(world.particles.is_empty());
        assert_eq!(world.session_start_ms, 5_000.0);
    }

    #[test]
    fn restart_centers_player_near_bottom() {
        let mut world = World::new(Field::default(), 0.0);
        world.player.pos = Vec2::new(3.0, 3.0);
        world.stats.score = 900;
        world.restart(1_000.0);

        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.stats.score, 0);
        assert_eq!(world.player.pos.x, (FIELD_WIDTH - PLAYER_SIZE) / 2.0);
        assert_eq!(
            world.player.pos.y,
            FIELD_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN
        );
        assert_eq!(world.session_start_ms, 1_000.0);
    }

    #[test]
    fn bullet_advances_by_velocity() {
        let mut bullet = Bullet::player_shot(Vec2::new(100.0, 200.0), 0.0);
        bullet.advance();
        assert_eq!(bullet.pos, Vec2::new(100.0, 200.0 - BULLET_SPEED));
    }

    #[test]
    fn enemy_moves_only_vertically() {
        let mut enemy = Enemy::new(EnemyKind::Fast, Vec2::new(50.0, -30.0));
        enemy.advance();
        assert_eq!(enemy.pos.x, 50.0);
        assert_eq!(enemy.pos.y, -30.0 + EnemyKind::Fast.speed());
    }

    #[test]
    fn enemy_health_starts_at_variant_base() {
        assert_eq!(Enemy::new(EnemyKind::Basic, Vec2::ZERO).health, 1);
        assert_eq!(Enemy::new(EnemyKind::Heavy, Vec2::ZERO).health, 3);
    }

    #[test]
    fn particle_lives_about_fifty_ticks() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 1.0,
            color: [255, 255, 255],
        };
        for _ in 0..40 {
            particle.advance();
        }
        assert!(particle.life > 0.0);
        for _ in 0..11 {
            particle.advance();
        }
        assert!(particle.life <= 0.0);
    }

    #[test]
    fn particle_cap_evicts_oldest() {
        let mut world = World::new(Field::default(), 0.0);
        for i in 0..(MAX_PARTICLES + 5) {
            world.push_particle(Particle {
                pos: Vec2::new(i as f32, 0.0),
                vel: Vec2::ZERO,
                life: 1.0,
                color: [0, 0, 0],
            });
        }
        assert_eq!(world.particles.len(), MAX_PARTICLES);
        // the first five were evicted
        assert_eq!(world.particles[0].pos.x, 5.0);
    }

    #[test]
    fn invincibility_is_a_wall_clock_window() {
        let mut player = Player::at_start(Field::default());
        player.invincible_until_ms = 2_000.0;
        assert!(player.is_invincible(1_999.0));
        assert!(!player.is_invincible(2_000.0));
    }

    #[test]
    fn bullet_leaves_field_through_top() {
        let field = Field::default();
        let mut bullet = Bullet::player_shot(Vec2::new(10.0, 2.0), 0.0);
        assert!(bullet.in_field(&field));
        bullet.advance();
        bullet.advance();
        assert!(!bullet.in_field(&field));
    }

    #[test]
    fn clamp_keeps_player_inside_after_resize() {
        let mut world = World::new(Field::default(), 0.0);
        world.field = Field {
            width: 100.0,
            height: 100.0,
        };
        world.clamp_player();
        assert!(world.player.pos.x <= 100.0 - world.player.size);
        assert!(world.player.pos.y <= 100.0 - world.player.size);
    }
}
