//! Probabilistic enemy and power-up spawning
//!
//! All randomness flows through the injected `Rng` so tests can script the
//! draws. Enemy kind selection deliberately keeps the layered independent
//! draws of the original tuning: the heavy check can override a fast result
//! within the same spawn call instead of partitioning a single roll.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Enemy, EnemyKind, PowerUp, PowerUpKind, World};
use crate::consts::*;

/// Spawns allowed for the given level before the level can complete
pub fn spawn_cap(level: u32) -> u32 {
    ENEMIES_PER_LEVEL * level
}

/// Per-tick Bernoulli success probability for an enemy spawn
pub fn enemy_spawn_chance(level: u32) -> f64 {
    (ENEMY_SPAWN_BASE_CHANCE * (1.0 + level as f64 * ENEMY_SPAWN_LEVEL_FACTOR)).min(1.0)
}

/// Drop chance per kill; flat early, decaying linearly past the start level
pub fn powerup_drop_chance(level: u32) -> f64 {
    if level < POWERUP_DROP_DECAY_START {
        POWERUP_DROP_CHANCE
    } else {
        let decay = (level - POWERUP_DROP_DECAY_START) as f64 * POWERUP_DROP_DECAY_PER_LEVEL;
        (POWERUP_DROP_CHANCE - decay).max(POWERUP_DROP_FLOOR)
    }
}

/// Tiered kind selection: base kind always eligible, fast from level 2,
/// heavy from level 3, each on its own independent draw
pub fn roll_enemy_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    let mut kind = EnemyKind::Basic;
    if level >= FAST_UNLOCK_LEVEL && rng.random::<f32>() > FAST_THRESHOLD {
        kind = EnemyKind::Fast;
    }
    if level >= HEAVY_UNLOCK_LEVEL && rng.random::<f32>() > HEAVY_THRESHOLD {
        kind = EnemyKind::Heavy;
    }
    kind
}

/// 40% triple-shot, 40% shield, 20% extra-life
pub fn roll_powerup_kind(rng: &mut impl Rng) -> PowerUpKind {
    let roll = rng.random::<f32>();
    if roll < POWERUP_WEIGHT_TRIPLE {
        PowerUpKind::TripleShot
    } else if roll < POWERUP_WEIGHT_TRIPLE + POWERUP_WEIGHT_SHIELD {
        PowerUpKind::Shield
    } else {
        PowerUpKind::ExtraLife
    }
}

/// Roll the per-tick spawn check; on success a new enemy enters just above
/// the visible field at a random horizontal offset
pub fn maybe_spawn_enemy(world: &mut World, rng: &mut impl Rng) -> Option<EnemyKind> {
    let level = world.stats.level;
    if world.enemies_spawned_this_level >= spawn_cap(level) {
        return None;
    }
    if !rng.random_bool(enemy_spawn_chance(level)) {
        return None;
    }

    let kind = roll_enemy_kind(level, rng);
    let size = kind.size();
    let max_x = (world.field.width - size).max(f32::EPSILON);
    let x = rng.random_range(0.0..max_x);
    world.enemies.push(Enemy::new(kind, Vec2::new(x, -size)));
    world.enemies_spawned_this_level += 1;
    Some(kind)
}

/// Roll the drop check for a single kill; `pos` is the new pickup's top-left
pub fn maybe_spawn_powerup(
    world: &mut World,
    rng: &mut impl Rng,
    pos: Vec2,
) -> Option<PowerUpKind> {
    if !rng.random_bool(powerup_drop_chance(world.stats.level)) {
        return None;
    }
    let kind = roll_powerup_kind(rng);
    world.powerups.push(PowerUp { pos, kind });
    Some(kind)
}

/// Once the level is high enough, each enemy may return fire
pub fn maybe_enemy_fire(world: &mut World, rng: &mut impl Rng) {
    if world.stats.level < ENEMY_FIRE_MIN_LEVEL {
        return;
    }
    let mut shots: Vec<Vec2> = Vec::new();
    for enemy in &world.enemies {
        if rng.random_bool(ENEMY_FIRE_CHANCE) {
            shots.push(enemy.muzzle());
        }
    }
    for muzzle in shots {
        world.enemy_bullets.push(Bullet::enemy_shot(muzzle));
    }
}
