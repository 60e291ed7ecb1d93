//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: apply velocity to kinematic rigid body, raise/lower the guard
//!
//! The player is the only character that can block. While blocking with the
//! deflect capability, incoming shuriken are sent back at the enemies.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::characters::{Character, Health};
use crate::plugins::projectiles::scene::{boxes_overlap, OverlapQueryResult};

const PLAYER_SIZE: f32 = 26.0;

#[derive(Component)]
pub struct Player;

/// Capability flags consulted by hit resolution.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub blocking: bool,
    pub can_deflect: bool,
}

impl Default for Guard {
    fn default() -> Self {
        Self { blocking: false, can_deflect: true }
    }
}

/// The player's own overlap policy for targeted queries.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerHurtbox {
    pub half_extents: Vec2,
}

impl PlayerHurtbox {
    /// Does a probe box overlap the player standing at `player_pos`?
    pub fn query(
        &self,
        player: Entity,
        player_pos: Vec2,
        probe_pos: Vec2,
        probe_half_extents: Vec2,
    ) -> OverlapQueryResult {
        OverlapQueryResult {
            valid: boxes_overlap(player_pos, self.half_extents, probe_pos, probe_half_extents),
            queried: player,
        }
    }
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
    block: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, tint_guard))
        .add_systems(FixedUpdate, (apply_movement, apply_guard))
        .add_systems(
            FixedPostUpdate,
            player_down.run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy, Layer::Pickup]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Character::PLAYER,
        Health::full(tunables.player_max_hp),
        Guard::default(),
        PlayerHurtbox { half_extents: Vec2::splat(PLAYER_SIZE * 0.5) },
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::from_xyz(0.0, -160.0, 1.0),
        RigidBody::Kinematic,
        Collider::rectangle(PLAYER_SIZE, PLAYER_SIZE),
        layers,
        LinearVelocity::ZERO,
        // Pickups are sensors; the player opts in to their collision events.
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };

    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
    input.block = keys.pressed(KeyCode::Space);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &Guard), With<Player>>,
) {
    let Ok((mut vel, guard)) = q_player.single_mut() else {
        return;
    };
    // Blocking roots the player in place.
    vel.0 = if guard.blocking {
        Vec2::ZERO
    } else {
        input.move_axis * tunables.player_speed
    };
}

fn apply_guard(input: Res<PlayerInput>, mut q_player: Query<&mut Guard, With<Player>>) {
    let Ok(mut guard) = q_player.single_mut() else {
        return;
    };
    if guard.blocking != input.block {
        guard.blocking = input.block;
    }
}

fn tint_guard(mut q_player: Query<(&Guard, &mut Sprite), (With<Player>, Changed<Guard>)>) {
    for (guard, mut sprite) in &mut q_player {
        sprite.color = if guard.blocking {
            Color::srgb(0.85, 0.95, 1.0)
        } else {
            Color::srgb(0.2, 0.75, 0.9)
        };
    }
}

fn player_down(
    q_player: Query<&Health, (With<Player>, Changed<Health>)>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Ok(health) = q_player.single() else {
        return;
    };
    if health.is_depleted() {
        info!("player down");
        next.set(GameState::GameOver);
    }
}
