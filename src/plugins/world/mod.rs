//! World plugin: the walled arena the duel takes place in.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

pub const ARENA_HALF: Vec2 = Vec2::new(480.0, 300.0);
const WALL_THICKNESS: f32 = 24.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_arena);
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.22, 0.2, 0.26);
    // Shuriken pass over walls and expire on their own.
    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy]);

    let t = WALL_THICKNESS;
    let walls = [
        ("WallTop", Vec2::new(0.0, ARENA_HALF.y + t * 0.5), Vec2::new((ARENA_HALF.x + t) * 2.0, t)),
        ("WallBottom", Vec2::new(0.0, -ARENA_HALF.y - t * 0.5), Vec2::new((ARENA_HALF.x + t) * 2.0, t)),
        ("WallLeft", Vec2::new(-ARENA_HALF.x - t * 0.5, 0.0), Vec2::new(t, ARENA_HALF.y * 2.0)),
        ("WallRight", Vec2::new(ARENA_HALF.x + t * 0.5, 0.0), Vec2::new(t, ARENA_HALF.y * 2.0)),
    ];

    for (name, pos, size) in walls {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
