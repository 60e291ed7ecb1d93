//! Projectile base motion: gravity and expiry.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Lifetime, ProjectileGravity};

/// Kinematic bodies ignore global gravity, so shuriken drop on their own.
pub fn apply_projectile_gravity(
    time: Res<Time<Fixed>>,
    mut q: Query<(&ProjectileGravity, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (gravity, mut vel) in &mut q {
        if gravity.0 != 0.0 {
            vel.y -= gravity.0 * dt;
        }
    }
}

/// Despawn anything whose `Lifetime` ran out (projectiles and sparks alike).
pub fn expire_lifetimes(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).despawn();
        }
    }
}
