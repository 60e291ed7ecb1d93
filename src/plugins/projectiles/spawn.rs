//! Spawn consumer: turn `SpawnProjectileRequest` messages into shuriken.
//!
//! Projectiles are kinematic: Avian integrates `LinearVelocity` into position,
//! but they generate no contacts (empty filters). Hits are decided by
//! `hits::resolve_projectile_hits` instead.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{Lifetime, Projectile, ProjectileGravity};
use super::messages::SpawnProjectileRequest;

#[inline]
fn projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

pub fn spawn_requested_projectiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnProjectileRequest>,
) {
    let half = tunables.shuriken_half_extents;

    for req in reader.read() {
        commands.spawn((
            Name::new("Shuriken"),
            Projectile::new(req.owner, req.damage, half),
            Lifetime::from_seconds(tunables.shuriken_lifetime_secs),
            ProjectileGravity(tunables.shuriken_gravity),
            Sprite {
                color: Color::srgb(0.8, 0.82, 0.88),
                custom_size: Some(half * 2.0),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0)),
            RigidBody::Kinematic,
            Collider::rectangle(half.x * 2.0, half.y * 2.0),
            projectile_layers(),
            LinearVelocity(req.vel),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
