use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::Enemy;

use super::{
    GamePhase, LevelLayout, LevelSource, MinimumPhase, SpawnMarker, Spawned, DEFAULT_LEVEL,
};

fn marker_world(phase: u8) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GamePhase(phase));
    world
}

fn place(world: &mut World, kind: &str, min_phase: i64) -> Entity {
    world
        .spawn((
            SpawnMarker {
                spawn_object_type: kind.to_string(),
                minimum_phase: MinimumPhase::new_clamped(min_phase),
            },
            Transform::from_xyz(10.0, 20.0, 0.0),
        ))
        .id()
}

fn enemy_count(world: &mut World) -> usize {
    world.query_filtered::<(), With<Enemy>>().iter(world).count()
}

#[test]
fn minimum_phase_clamps_into_range() {
    assert_eq!(MinimumPhase::new_clamped(5).get(), 2);
    assert_eq!(MinimumPhase::new_clamped(-3).get(), 0);
    assert_eq!(MinimumPhase::new_clamped(1).get(), 1);
}

#[test]
fn marker_fields_default_when_absent() {
    let marker: SpawnMarker = serde_json::from_str("{}").unwrap();
    assert_eq!(marker.spawn_object_type, "EnemyNinja");
    assert_eq!(marker.minimum_phase.get(), 0);
}

#[test]
fn out_of_range_phase_loads_and_persists_clamped() {
    let marker: SpawnMarker =
        serde_json::from_str(r#"{ "SpawnObjectType": "EnemyNinja", "MinimumPhase": 5 }"#).unwrap();
    assert_eq!(marker.minimum_phase.get(), 2);

    let json = serde_json::to_value(&marker).unwrap();
    assert_eq!(json["MinimumPhase"], 2);
    assert_eq!(json["SpawnObjectType"], "EnemyNinja");
}

fn phase_from_json(raw: &str) -> u8 {
    let json = format!(r#"{{ "MinimumPhase": {raw} }}"#);
    serde_json::from_str::<SpawnMarker>(&json).unwrap().minimum_phase.get()
}

#[test]
fn any_number_loads_as_a_clamped_phase() {
    assert_eq!(phase_from_json("10000000000000000000"), 2);
    assert_eq!(phase_from_json("18446744073709551615"), 2);
    assert_eq!(phase_from_json("-9223372036854775808"), 0);
    assert_eq!(phase_from_json("5.0"), 2);
    assert_eq!(phase_from_json("1.7"), 1);
    assert_eq!(phase_from_json("-1.5"), 0);
    assert_eq!(phase_from_json("1e300"), 2);
}

#[test]
fn non_numeric_phase_is_rejected() {
    assert!(serde_json::from_str::<SpawnMarker>(r#"{ "MinimumPhase": "two" }"#).is_err());
}

#[test]
fn level_with_huge_phase_still_loads_every_marker() {
    let mut world = marker_world(0);
    world.insert_resource(LevelSource(
        r#"{ "markers": [
            { "position": [0.0, 0.0], "marker": { "MinimumPhase": 10000000000000000000 } },
            { "position": [1.0, 0.0], "marker": { "MinimumPhase": 5.0 } }
        ] }"#
            .to_string(),
    ));

    run_system_once(&mut world, super::load_level);

    let phases: Vec<u8> = world
        .query::<&SpawnMarker>()
        .iter(&world)
        .map(|m| m.minimum_phase.get())
        .collect();
    assert_eq!(phases, vec![2, 2]);
}

#[test]
fn default_level_parses() {
    let layout = LevelLayout::from_json(DEFAULT_LEVEL).unwrap();
    assert_eq!(layout.markers.len(), 5);
    assert!(layout.markers.iter().all(|m| m.marker.minimum_phase.get() <= 2));
}

#[test]
fn malformed_level_is_an_error() {
    assert!(LevelLayout::from_json("{ \"markers\": 3 }").is_err());
}

#[test]
fn load_level_falls_back_to_empty_arena_on_bad_json() {
    let mut world = marker_world(1);
    world.insert_resource(LevelSource("not json".to_string()));

    run_system_once(&mut world, super::load_level);

    assert_eq!(world.query::<&SpawnMarker>().iter(&world).count(), 0);
    assert_eq!(*world.resource::<GamePhase>(), GamePhase(0));
}

#[test]
fn load_level_places_markers() {
    let mut world = marker_world(0);
    world.insert_resource(LevelSource::default());

    run_system_once(&mut world, super::load_level);

    assert_eq!(world.query::<&SpawnMarker>().iter(&world).count(), 5);
}

#[test]
fn markers_wait_for_their_phase() {
    let mut world = marker_world(0);
    let early = place(&mut world, "EnemyNinja", 0);
    let late = place(&mut world, "EnemyNinja", 1);

    run_system_once(&mut world, super::spawn_ready_markers);

    assert_eq!(enemy_count(&mut world), 1);
    assert!(world.get::<Spawned>(early).is_some());
    assert!(world.get::<Spawned>(late).is_none());

    // Markers never spawn twice.
    run_system_once(&mut world, super::spawn_ready_markers);
    assert_eq!(enemy_count(&mut world), 1);
}

#[test]
fn unknown_object_type_is_skipped() {
    let mut world = marker_world(0);
    let marker = place(&mut world, "Lantern", 0);

    run_system_once(&mut world, super::spawn_ready_markers);

    assert_eq!(enemy_count(&mut world), 0);
    assert!(world.get::<Spawned>(marker).is_some());
}

#[test]
fn phase_advances_only_when_arena_is_clear() {
    let mut world = marker_world(0);
    place(&mut world, "EnemyNinja", 2);
    let enemy = world.spawn(Enemy).id();

    run_system_once(&mut world, super::advance_phase);
    assert_eq!(*world.resource::<GamePhase>(), GamePhase(0));

    world.despawn(enemy);
    run_system_once(&mut world, super::advance_phase);
    assert_eq!(*world.resource::<GamePhase>(), GamePhase(1));

    run_system_once(&mut world, super::advance_phase);
    run_system_once(&mut world, super::advance_phase);
    assert_eq!(*world.resource::<GamePhase>(), GamePhase(2));
}

#[test]
fn phase_holds_when_nothing_is_waiting() {
    let mut world = marker_world(0);
    run_system_once(&mut world, super::advance_phase);
    assert_eq!(*world.resource::<GamePhase>(), GamePhase(0));
}
