//! Buffered projectile requests.
//!
//! Throwers create *intent*; the spawner applies it. Hit resolution requests
//! sparks the same way so it never spawns entities itself.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnProjectileRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub owner: Entity,
}

/// Visual feedback for a block attempt.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SparkRequested {
    pub position: Vec2,
}
