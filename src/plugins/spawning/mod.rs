//! Spawning: level markers and the game phase that gates them.
//!
//! A level is a JSON list of placed `SpawnMarker`s. Markers are passive; the
//! `spawn_ready_markers` system turns each one into a live object once
//! `GamePhase` reaches the marker's minimum phase. Each marker spawns once.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::enemies::{spawn_enemy, Enemy};

/// Highest phase a level can reach.
pub const MAX_PHASE: u8 = 2;

/// Object type spawned when a marker names none.
pub const DEFAULT_OBJECT_TYPE: &str = "EnemyNinja";

/// Built-in level used when no `LevelSource` is provided.
pub const DEFAULT_LEVEL: &str = r#"{
  "markers": [
    { "position": [-220.0, 160.0], "marker": { "SpawnObjectType": "EnemyNinja" } },
    { "position": [220.0, 160.0], "marker": { "SpawnObjectType": "EnemyNinja" } },
    { "position": [0.0, 220.0], "marker": { "SpawnObjectType": "EnemyNinja", "MinimumPhase": 1 } },
    { "position": [-320.0, 60.0], "marker": { "MinimumPhase": 5 } },
    { "position": [320.0, 60.0], "marker": { "MinimumPhase": 5 } }
  ]
}"#;

/// Phase gate in `[0, MAX_PHASE]`.
///
/// Any number is accepted on load (negative, fractional, beyond `i64`) and
/// clamped; the clamped value is what gets written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "i64")]
pub struct MinimumPhase(u8);

impl MinimumPhase {
    pub fn new_clamped(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_PHASE as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<MinimumPhase> for i64 {
    fn from(phase: MinimumPhase) -> Self {
        phase.0 as i64
    }
}

impl<'de> Deserialize<'de> for MinimumPhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MinimumPhaseVisitor)
    }
}

struct MinimumPhaseVisitor;

impl Visitor<'_> for MinimumPhaseVisitor {
    type Value = MinimumPhase;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MinimumPhase, E> {
        Ok(MinimumPhase::new_clamped(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MinimumPhase, E> {
        Ok(MinimumPhase::new_clamped(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<MinimumPhase, E> {
        Ok(MinimumPhase(v.clamp(0, MAX_PHASE as i128) as u8))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<MinimumPhase, E> {
        Ok(MinimumPhase(v.min(MAX_PHASE as u128) as u8))
    }

    /// Fractions round down; NaN counts as 0.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MinimumPhase, E> {
        let clamped = if v.is_nan() { 0.0 } else { v.clamp(0.0, MAX_PHASE as f64) };
        Ok(MinimumPhase(clamped as u8))
    }
}

#[derive(Component, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpawnMarker {
    pub spawn_object_type: String,
    pub minimum_phase: MinimumPhase,
}

impl Default for SpawnMarker {
    fn default() -> Self {
        Self {
            spawn_object_type: DEFAULT_OBJECT_TYPE.to_string(),
            minimum_phase: MinimumPhase::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub position: [f32; 2],
    pub marker: SpawnMarker,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub markers: Vec<PlacedMarker>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Raw level JSON to load when entering the game.
#[derive(Resource, Clone, Debug)]
pub struct LevelSource(pub String);

impl Default for LevelSource {
    fn default() -> Self {
        Self(DEFAULT_LEVEL.to_string())
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GamePhase(pub u8);

/// Marker already turned into a live object.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spawned;

pub fn plugin(app: &mut App) {
    app.init_resource::<LevelSource>()
        .init_resource::<GamePhase>()
        .add_systems(OnEnter(GameState::InGame), load_level)
        .add_systems(
            Update,
            (spawn_ready_markers, advance_phase)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

fn load_level(mut commands: Commands, source: Res<LevelSource>, mut phase: ResMut<GamePhase>) {
    let layout = LevelLayout::from_json(&source.0).unwrap_or_else(|err| {
        warn!("level data rejected ({err}); starting with an empty arena");
        LevelLayout::default()
    });

    phase.0 = 0;
    info!("level loaded: {} markers", layout.markers.len());

    for placed in layout.markers {
        let [x, y] = placed.position;
        commands.spawn((
            Name::new("SpawnMarker"),
            placed.marker,
            Transform::from_xyz(x, y, 0.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn spawn_ready_markers(
    mut commands: Commands,
    tunables: Res<Tunables>,
    phase: Res<GamePhase>,
    q_markers: Query<(Entity, &SpawnMarker, &Transform), Without<Spawned>>,
) {
    for (e, marker, tf) in &q_markers {
        if marker.minimum_phase.get() > phase.0 {
            continue;
        }

        commands.entity(e).insert(Spawned);

        match marker.spawn_object_type.as_str() {
            DEFAULT_OBJECT_TYPE => {
                spawn_enemy(&mut commands, &tunables, tf.translation.truncate());
            }
            other => warn!("spawn marker names unknown object type {other:?}; skipped"),
        }
    }
}

/// Move to the next phase once the arena is clear and markers are still waiting.
fn advance_phase(
    mut phase: ResMut<GamePhase>,
    q_enemies: Query<(), With<Enemy>>,
    q_waiting: Query<&SpawnMarker, Without<Spawned>>,
) {
    if phase.0 >= MAX_PHASE || !q_enemies.is_empty() || q_waiting.is_empty() {
        return;
    }

    phase.0 += 1;
    info!("phase {} reached", phase.0);
}

#[cfg(test)]
mod tests;
