//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Ticks run to completion on a single
//! thread, synchronized to the display refresh by the caller:
//! - One writer: the tick mutates the `World`, nothing else does
//! - Wall-clock driven: the current timestamp is passed in, never read
//! - Injectable randomness: every probabilistic draw goes through `Rng`
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod testutil;

pub use collision::{Aabb, resolve_combat};
pub use effects::{ActiveEffects, ActivePowerUp};
pub use state::{
    Bullet, BulletOwner, Enemy, EnemyKind, Field, GameEvent, GamePhase, Particle, Player, PowerUp,
    PowerUpKind, RunStats, World,
};
pub use tick::{TickInput, tick};
