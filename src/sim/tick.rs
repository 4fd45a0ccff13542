//! The per-frame orchestrator
//!
//! Composes player input, spawning, motion, combat resolution and level
//! progression in a fixed order, once per animation frame. The tick owns
//! the `World` for its whole duration and reports everything that happened
//! as a list of outward events.

use std::cmp::Ordering;

use glam::Vec2;
use rand::Rng;

use super::collision::{self, grant};
use super::spawn;
use super::state::{Bullet, Field, GameEvent, GamePhase, PowerUpKind, World};
use crate::achievements::{AchievementId, Achievements};
use crate::audio::SoundCue;
use crate::consts::*;

/// Input staged by the frontend for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys currently held
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key currently held
    pub fire: bool,
    /// Accumulated pointer/drag delta since the last tick
    pub drag: Vec2,
    /// Discrete pause toggle
    pub pause: bool,
    /// Begin or restart a run (honored in Start/GameOver)
    pub start: bool,
    /// Staged field dimensions after a resize
    pub resize: Option<Field>,
    /// Demo autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the world by one frame.
///
/// Ordering guarantee: all motion updates complete before any collision
/// check, and all combat resolution completes before the level-progression
/// check. Pausing or ending the run freezes the world between ticks; there
/// is no partial tick to unwind.
pub fn tick(
    world: &mut World,
    input: &TickInput,
    achievements: &mut Achievements,
    rng: &mut impl Rng,
    now_ms: f64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Resize is staged by the frontend and applied at tick start
    if let Some(field) = input.resize {
        world.field = field;
        world.clamp_player();
    }

    if input.pause {
        match world.phase {
            GamePhase::Playing => {
                world.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => world.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match world.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.start {
                world.restart(now_ms);
                log::info!("run started");
            }
            return events;
        }
        GamePhase::Paused => return events,
        GamePhase::Playing => {}
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(world, &mut input);
    }
    let input = &input;

    // 1. player movement (held keys + drag delta), clamped to the field
    let mut delta = input.drag;
    if input.left {
        delta.x -= PLAYER_SPEED;
    }
    if input.right {
        delta.x += PLAYER_SPEED;
    }
    if input.up {
        delta.y -= PLAYER_SPEED;
    }
    if input.down {
        delta.y += PLAYER_SPEED;
    }
    world.player.pos += delta;
    world.clamp_player();

    // 2. player shooting, on a wall-clock cooldown
    if input.fire && now_ms - world.last_shot_ms >= FIRE_COOLDOWN_MS {
        let muzzle = Vec2::new(
            world.player.pos.x + world.player.size / 2.0,
            world.player.pos.y - BULLET_RADIUS,
        );
        if world.effects.is_active(PowerUpKind::TripleShot, now_ms) {
            for vx in [-TRIPLE_SHOT_SPREAD, 0.0, TRIPLE_SHOT_SPREAD] {
                world.player_bullets.push(Bullet::player_shot(muzzle, vx));
            }
        } else {
            world.player_bullets.push(Bullet::player_shot(muzzle, 0.0));
        }
        world.last_shot_ms = now_ms;
        events.push(GameEvent::Sound(SoundCue::Shoot));
    }

    // 3. spawning and enemy return fire
    let _ = spawn::maybe_spawn_enemy(world, rng);
    spawn::maybe_enemy_fire(world, rng);

    // 4. motion updates and bounds culling
    advance_entities(world);

    // 5. combat resolution
    collision::resolve_combat(world, achievements, rng, now_ms, &mut events);
    if world.phase == GamePhase::GameOver {
        log::info!(
            "game over: score {} level {} kills {}",
            world.stats.score,
            world.stats.level,
            world.kills
        );
        return events;
    }

    // 6. session-time milestone
    if now_ms - world.session_start_ms >= SURVIVOR_MS {
        grant(achievements, AchievementId::Survivor, &mut events);
    }

    // 7. level progression
    if world.enemies_spawned_this_level >= spawn::spawn_cap(world.stats.level)
        && world.enemies.is_empty()
    {
        world.stats.level += 1;
        world.enemies_spawned_this_level = 0;
        let level = world.stats.level;
        if level == LEVEL_BONUS_LIFE {
            world.stats.lives += 1;
            events.push(GameEvent::LifeDelta { delta: 1 });
        }
        if level == LEVEL_VETERAN {
            grant(achievements, AchievementId::Veteran, &mut events);
        }
        events.push(GameEvent::LevelUp { level });
        events.push(GameEvent::Sound(SoundCue::LevelUp));
        log::info!("level up: {level}");
    }

    events
}

/// Advance every entity and silently drop what left the field
fn advance_entities(world: &mut World) {
    let field = world.field;

    for bullet in world
        .player_bullets
        .iter_mut()
        .chain(world.enemy_bullets.iter_mut())
    {
        bullet.advance();
    }
    world.player_bullets.retain(|b| b.in_field(&field));
    world.enemy_bullets.retain(|b| b.in_field(&field));

    for enemy in &mut world.enemies {
        enemy.advance();
    }
    // passing below the bottom costs nothing
    world.enemies.retain(|e| e.pos.y < field.height);

    for powerup in &mut world.powerups {
        powerup.advance();
    }
    world.powerups.retain(|p| p.pos.y < field.height);

    for particle in &mut world.particles {
        particle.advance();
    }
    world.particles.retain(|p| p.life > 0.0);
}

/// Demo-mode input: hold fire, chase pickups, otherwise line up under the
/// lowest enemy
fn autopilot(world: &World, input: &mut TickInput) {
    input.fire = true;

    let player_cx = world.player.pos.x + world.player.size / 2.0;
    let nearest_pickup = world
        .powerups
        .iter()
        .map(|p| p.pos.x + POWERUP_SIZE / 2.0)
        .min_by(|a, b| {
            (a - player_cx)
                .abs()
                .partial_cmp(&(b - player_cx).abs())
                .unwrap_or(Ordering::Equal)
        });
    let lowest_enemy = world
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal))
        .map(|e| e.center().x);

    if let Some(target_x) = nearest_pickup.or(lowest_enemy) {
        if target_x < player_cx - PLAYER_SPEED {
            input.left = true;
        } else if target_x > player_cx + PLAYER_SPEED {
            input.right = true;
        }
    }
}
