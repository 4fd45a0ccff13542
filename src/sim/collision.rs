//! Collision detection and the combat resolver
//!
//! Every test is an axis-aligned bounding-box overlap. The resolver runs the
//! four combat passes in a fixed order after all motion updates; entities hit
//! mid-pass are tombstoned through alive-masks and compacted at the end of
//! the pass, never removed while a traversal is still walking the collection.

use glam::Vec2;
use rand::Rng;

use super::spawn;
use super::state::{GameEvent, GamePhase, Particle, PowerUpKind, World};
use crate::Color;
use crate::achievements::{AchievementId, Achievements};
use crate::audio::SoundCue;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Outcome of something touching the player
#[derive(Debug, Clone, Copy, PartialEq)]
enum PlayerHit {
    /// Player was invincible; nothing happened
    Ignored,
    /// An active shield soaked the hit
    Absorbed,
    /// One life lost, invincibility window granted
    LifeLost,
    /// Lives hit zero; the run is over
    Fatal,
}

/// Shared damage logic for enemy bullets and contact hits
fn hit_player(world: &mut World, now_ms: f64, events: &mut Vec<GameEvent>) -> PlayerHit {
    if world.player.is_invincible(now_ms) {
        return PlayerHit::Ignored;
    }
    if world.effects.consume_shield(now_ms) {
        events.push(GameEvent::Sound(SoundCue::Hit));
        return PlayerHit::Absorbed;
    }

    world.stats.lives = world.stats.lives.saturating_sub(1);
    events.push(GameEvent::LifeDelta { delta: -1 });
    events.push(GameEvent::Sound(SoundCue::Hit));

    if world.stats.lives == 0 {
        world.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
        return PlayerHit::Fatal;
    }

    world.player.invincible_until_ms = now_ms + INVINCIBILITY_MS;
    PlayerHit::LifeLost
}

/// Emit an explosion burst at `center` in the given color
fn spawn_burst(world: &mut World, rng: &mut impl Rng, center: Vec2, color: Color) {
    for _ in 0..PARTICLES_PER_KILL {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.random_range(1.0..3.5);
        world.push_particle(Particle {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            color,
        });
    }
}

pub(crate) fn grant(
    achievements: &mut Achievements,
    id: AchievementId,
    events: &mut Vec<GameEvent>,
) {
    if achievements.unlock(id) {
        events.push(GameEvent::Achievement(id));
    }
}

/// Run the four combat passes for this tick.
///
/// Order matters: enemy bullets against the player, player bullets against
/// enemies, contact damage, then power-up pickups. A fatal hit ends the run
/// immediately and no later pass touches lives.
pub fn resolve_combat(
    world: &mut World,
    achievements: &mut Achievements,
    rng: &mut impl Rng,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    let player_box = world.player.aabb();

    // 1. enemy bullets vs player
    let mut bi = 0;
    while bi < world.enemy_bullets.len() {
        if !world.enemy_bullets[bi].aabb().intersects(&player_box) {
            bi += 1;
            continue;
        }
        match hit_player(world, now_ms, events) {
            // an invincible player lets the bullet pass through
            PlayerHit::Ignored => bi += 1,
            PlayerHit::Fatal => {
                let _ = world.enemy_bullets.remove(bi);
                return;
            }
            _ => {
                let _ = world.enemy_bullets.remove(bi);
            }
        }
    }

    // 2. player bullets vs enemies
    struct Kill {
        center: Vec2,
        color: Color,
        value: u64,
    }

    let mut bullet_alive = vec![true; world.player_bullets.len()];
    let mut enemy_alive = vec![true; world.enemies.len()];
    let mut kills: Vec<Kill> = Vec::new();

    for (bi, bullet) in world.player_bullets.iter().enumerate() {
        let bullet_box = bullet.aabb();
        for (ei, enemy) in world.enemies.iter_mut().enumerate() {
            if !enemy_alive[ei] {
                continue;
            }
            if !bullet_box.intersects(&enemy.aabb()) {
                continue;
            }
            // the bullet dies on its first hit and is never compared
            // against a later enemy in this pass
            bullet_alive[bi] = false;
            enemy.health -= 1;
            if enemy.health == 0 {
                enemy_alive[ei] = false;
                kills.push(Kill {
                    center: enemy.center(),
                    color: enemy.kind.color(),
                    value: enemy.kind.score_value(),
                });
            }
            break;
        }
    }

    let mut keep = bullet_alive.iter();
    world
        .player_bullets
        .retain(|_| keep.next().copied().unwrap_or(false));

    for kill in kills {
        world.stats.score += kill.value;
        world.kills += 1;
        events.push(GameEvent::Score { delta: kill.value });
        events.push(GameEvent::Sound(SoundCue::Explosion));
        spawn_burst(world, rng, kill.center, kill.color);

        if world.kills == KILLS_FIRST_BLOOD {
            grant(achievements, AchievementId::FirstBlood, events);
        }
        if world.kills == KILLS_EXTERMINATOR {
            grant(achievements, AchievementId::Exterminator, events);
        }

        let _ = spawn::maybe_spawn_powerup(world, rng, kill.center - Vec2::splat(POWERUP_SIZE / 2.0));
    }

    // 3. enemies vs player (contact)
    let mut fatal_contact = false;
    let mut ei = 0;
    while ei < world.enemies.len() {
        if enemy_alive[ei] && world.enemies[ei].aabb().intersects(&player_box) {
            let center = world.enemies[ei].center();
            let color = world.enemies[ei].kind.color();
            match hit_player(world, now_ms, events) {
                // invincible: the enemy survives and passes through
                PlayerHit::Ignored => {}
                outcome => {
                    // contact destroys the enemy regardless of health,
                    // with no score and no drop roll
                    enemy_alive[ei] = false;
                    spawn_burst(world, rng, center, color);
                    if outcome == PlayerHit::Fatal {
                        fatal_contact = true;
                        break;
                    }
                }
            }
        }
        ei += 1;
    }

    let mut keep = enemy_alive.iter();
    world
        .enemies
        .retain(|_| keep.next().copied().unwrap_or(false));

    if fatal_contact {
        return;
    }

    // 4. player vs power-ups
    let mut picked: Vec<PowerUpKind> = Vec::new();
    world.powerups.retain(|powerup| {
        if powerup.aabb().intersects(&player_box) {
            picked.push(powerup.kind);
            false
        } else {
            true
        }
    });

    for kind in picked {
        world.powerups_collected += 1;
        events.push(GameEvent::Sound(SoundCue::PowerUp));
        match kind {
            PowerUpKind::ExtraLife => {
                world.stats.lives += 1;
                events.push(GameEvent::LifeDelta { delta: 1 });
                grant(achievements, AchievementId::LifeSaver, events);
            }
            PowerUpKind::TripleShot | PowerUpKind::Shield => {
                world.effects.activate(kind, now_ms + POWERUP_DURATION_MS);
            }
        }
        if world.powerups_collected == PICKUPS_COLLECTOR {
            grant(achievements, AchievementId::Collector, events);
        }
    }
}
