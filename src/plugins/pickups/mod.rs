//! Pickups: one-shot effects applied when the player walks over them.
//!
//! The pickup decides *what* happens (`Pickup::on_pickup`); the scene decides
//! *when* and removes the pickup afterwards (`collect_pickups`). Defeated
//! enemies drop a health pickup where they fell.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::audio::{Cue, PlayCue};
use crate::plugins::characters::Health;
use crate::plugins::enemies::EnemyDefeated;
use crate::plugins::player::Player;

const PICKUP_RADIUS: f32 = 8.0;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickup {
    /// Does nothing; collected and removed all the same.
    Inert,
    /// Restores the taker to full health.
    HealthRestore,
}

impl Pickup {
    /// Apply this pickup to `taker`.
    ///
    /// Returns the cue to play, or `None` when nothing happened. A missing
    /// taker is a no-op.
    pub fn on_pickup(self, taker: Option<&mut Health>) -> Option<Cue> {
        let taker = taker?;
        match self {
            Pickup::Inert => None,
            Pickup::HealthRestore => {
                taker.restore_full();
                Some(Cue::Pickup)
            }
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        drop_health_on_defeat.run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        PostUpdate,
        collect_pickups.run_if(in_state(GameState::InGame)),
    );
}

pub fn spawn_pickup(commands: &mut Commands, kind: Pickup, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Pickup"),
            kind,
            Sprite {
                color: Color::srgb(0.35, 0.95, 0.45),
                custom_size: Some(Vec2::splat(PICKUP_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            RigidBody::Static,
            Collider::circle(PICKUP_RADIUS),
            Sensor,
            CollisionLayers::new(Layer::Pickup, [Layer::Player]),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

fn drop_health_on_defeat(mut commands: Commands, mut defeated: MessageReader<EnemyDefeated>) {
    for ev in defeated.read() {
        spawn_pickup(&mut commands, Pickup::HealthRestore, ev.position);
    }
}

/// Resolve player/pickup contacts reported by Avian.
///
/// Each pickup is applied at most once, even when several contact messages
/// name it in the same frame.
pub fn collect_pickups(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_pickups: Query<&Pickup>,
    q_is_player: Query<(), With<Player>>,
    mut q_health: Query<&mut Health, With<Player>>,
    mut cues: MessageWriter<PlayCue>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (a, b) = (ev.collider1, ev.collider2);

        let (pickup_e, taker_e) = if q_pickups.contains(a) {
            (a, b)
        } else if q_pickups.contains(b) {
            (b, a)
        } else {
            continue;
        };

        if !q_is_player.contains(taker_e) || !seen.insert(pickup_e) {
            continue;
        }

        let Ok(&pickup) = q_pickups.get(pickup_e) else {
            continue;
        };

        let mut taker = q_health.get_mut(taker_e).ok();
        if let Some(cue) = pickup.on_pickup(taker.as_deref_mut()) {
            cues.write(PlayCue(cue));
        }

        commands.entity(pickup_e).despawn();
    }
}

#[cfg(test)]
mod tests;
