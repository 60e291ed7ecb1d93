//! Sparks: the visual half of a block attempt.
//!
//! Render builds additionally give each spark a point light
//! (see `plugins::lighting`).

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

use super::components::Lifetime;
use super::messages::SparkRequested;

pub const SPARK_SECS: f32 = 0.18;
const SPARK_SIZE: f32 = 12.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Spark;

pub fn spawn_sparks(mut commands: Commands, mut reader: MessageReader<SparkRequested>) {
    for req in reader.read() {
        commands.spawn((
            Name::new("Spark"),
            Spark,
            Lifetime::from_seconds(SPARK_SECS),
            Sprite {
                color: Color::srgb(1.0, 0.95, 0.6),
                custom_size: Some(Vec2::splat(SPARK_SIZE)),
                ..default()
            },
            Transform::from_translation(req.position.extend(3.0)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Grow and fade over the spark's lifetime.
pub fn fade_sparks(mut q: Query<(&Lifetime, &mut Sprite, &mut Transform), With<Spark>>) {
    for (lt, mut sprite, mut tf) in &mut q {
        let t = lt.progress();
        tf.scale = Vec3::splat(1.0 + t);

        let mut c = sprite.color.to_srgba();
        c.alpha = 1.0 - t;
        sprite.color = c.into();
    }
}
