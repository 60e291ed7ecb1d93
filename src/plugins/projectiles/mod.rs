//! Projectiles plugin: shuriken spawn, flight, hit resolution and deflection.
//!
//! # Data flow (one frame)
//! ```text
//!   FixedUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  enemies::throw_at_player            writes SpawnProjectileRequest         │
//!│  motion::apply_projectile_gravity    mutates LinearVelocity                │
//!│  motion::expire_lifetimes            despawns timed-out shuriken/sparks    │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │  Avian steps and writes back positions
//!                v
//!   FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  hits::resolve_projectile_hits                                             │
//!│      - reads: player Guard/PlayerHurtbox, Character tags, SpatialQuery     │
//!│      - mutates: Projectile (deflection, damage), LinearVelocity, Health    │
//!│      - writes: SparkRequested, PlayCue, AwardScore, DamageDealt            │
//!│      - despawns consumed projectiles                                       │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   Update
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  spawn::spawn_requested_projectiles  consumes SpawnProjectileRequest       │
//!│  sparks::spawn_sparks / fade_sparks  consumes SparkRequested               │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Throwers and hit resolution only enqueue intent; the spawners are the
//! single writers of new projectile and spark entities.

pub mod components;
pub mod hits;
pub mod messages;
pub mod motion;
pub mod scene;
pub mod spawn;
pub mod sparks;

use avian2d::schedule::PhysicsSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::SpawnProjectileRequest>()
            .add_message::<messages::SparkRequested>();

        app.add_systems(
            Update,
            (
                spawn::spawn_requested_projectiles,
                sparks::spawn_sparks,
                sparks::fade_sparks,
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (motion::apply_projectile_gravity, motion::expire_lifetimes)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            hits::resolve_projectile_hits
                .after(PhysicsSystems::Writeback)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
