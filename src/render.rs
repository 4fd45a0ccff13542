//! Renderer contract and vector-shape fallbacks
//!
//! Drawing lives entirely outside the simulation. A renderer receives the
//! whole `World` (including the current field dimensions) once per tick and
//! is expected to clear and redraw the full frame, including a simple
//! parallax starfield behind the entities. When no sprite image is available
//! for a variant, the documented vector fallbacks below apply.

use crate::sim::{EnemyKind, PowerUpKind, World};

/// Fallback shape when no sprite is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorShape {
    /// Triangle pointing down: player ship, basic and fast enemies
    TriangleDown,
    /// Square: heavy enemies
    Square,
    /// Filled circle with a letter glyph: power-ups
    Circle { glyph: char },
    /// Faded dot: particles
    Dot,
}

pub fn player_shape() -> VectorShape {
    VectorShape::TriangleDown
}

pub fn enemy_shape(kind: EnemyKind) -> VectorShape {
    match kind {
        EnemyKind::Basic | EnemyKind::Fast => VectorShape::TriangleDown,
        EnemyKind::Heavy => VectorShape::Square,
    }
}

pub fn powerup_shape(kind: PowerUpKind) -> VectorShape {
    VectorShape::Circle { glyph: kind.glyph() }
}

pub fn particle_shape() -> VectorShape {
    VectorShape::Dot
}

/// Drawing boundary; one call per tick with the post-tick world
pub trait Renderer {
    fn render(&mut self, world: &World);
}

/// Renderer that draws nothing (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _world: &World) {}
}

/// Draw a frame if a target exists. A missing or unready renderer skips the
/// draw without touching simulation state; logic updates never depend on it.
pub fn present<R: Renderer>(renderer: Option<&mut R>, world: &World) {
    if let Some(renderer) = renderer {
        renderer.render(world);
    }
}
