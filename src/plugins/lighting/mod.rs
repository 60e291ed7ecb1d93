//! Lighting plugin (Firefly, render-only).
//!
//! A warm light follows the player; every spark gets a brief point light of
//! its own, removed together with the spark.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;
use crate::plugins::projectiles::sparks::Spark;

#[derive(Component)]
pub struct PlayerLight;

const SPARK_LIGHT_RANGE: f32 = 90.0;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), spawn_player_light)
        .add_systems(Update, (follow_player_light, light_sparks));
}

fn spawn_player_light(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(0.75, 0.8, 1.0),
            radius: 380.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

fn light_sparks(mut commands: Commands, q_new: Query<Entity, Added<Spark>>) {
    for e in &q_new {
        commands.entity(e).insert(PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.5),
            radius: SPARK_LIGHT_RANGE,
            ..default()
        });
    }
}
