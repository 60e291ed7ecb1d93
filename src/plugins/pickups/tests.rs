use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::{drain_messages, init_messages, run_system_once};
use crate::plugins::audio::{Cue, PlayCue};
use crate::plugins::characters::Health;
use crate::plugins::enemies::EnemyDefeated;
use crate::plugins::player::Player;

use super::Pickup;

fn write_collision(world: &mut World, a: Entity, b: Entity) {
    world.write_message(CollisionStart { collider1: a, collider2: b, body1: None, body2: None });
}

fn pickup_world() -> World {
    let mut world = World::new();
    init_messages::<CollisionStart>(&mut world);
    init_messages::<PlayCue>(&mut world);
    world
}

#[test]
fn health_restore_fills_taker_and_plays_cue() {
    let mut hp = Health { hp: 12.0, max: 100.0 };
    assert_eq!(Pickup::HealthRestore.on_pickup(Some(&mut hp)), Some(Cue::Pickup));
    assert_eq!(hp.hp, 100.0);
}

#[test]
fn missing_taker_is_a_no_op() {
    assert_eq!(Pickup::HealthRestore.on_pickup(None), None);
    assert_eq!(Pickup::Inert.on_pickup(None), None);
}

#[test]
fn inert_pickup_changes_nothing() {
    let mut hp = Health { hp: 12.0, max: 100.0 };
    assert_eq!(Pickup::Inert.on_pickup(Some(&mut hp)), None);
    assert_eq!(hp.hp, 12.0);
}

#[test]
fn player_collects_pickup_once_and_it_is_removed() {
    let mut world = pickup_world();
    let player = world.spawn((Player, Health { hp: 40.0, max: 100.0 })).id();
    let pickup = world.spawn(Pickup::HealthRestore).id();

    // Same contact reported twice, in both orders.
    write_collision(&mut world, player, pickup);
    write_collision(&mut world, pickup, player);

    run_system_once(&mut world, super::collect_pickups);

    assert_eq!(world.get::<Health>(player).unwrap().hp, 100.0);
    assert!(world.get_entity(pickup).is_err());
    assert_eq!(drain_messages::<PlayCue>(&mut world), vec![PlayCue(Cue::Pickup)]);
}

#[test]
fn non_player_contact_leaves_pickup_alone() {
    let mut world = pickup_world();
    let ninja = world.spawn(Health { hp: 5.0, max: 30.0 }).id();
    let pickup = world.spawn(Pickup::HealthRestore).id();

    write_collision(&mut world, ninja, pickup);

    run_system_once(&mut world, super::collect_pickups);

    assert_eq!(world.get::<Health>(ninja).unwrap().hp, 5.0);
    assert!(world.get_entity(pickup).is_ok());
    assert!(drain_messages::<PlayCue>(&mut world).is_empty());
}

#[test]
fn player_without_health_removes_pickup_silently() {
    let mut world = pickup_world();
    let player = world.spawn(Player).id();
    let pickup = world.spawn(Pickup::HealthRestore).id();

    write_collision(&mut world, pickup, player);

    run_system_once(&mut world, super::collect_pickups);

    assert!(world.get_entity(pickup).is_err());
    assert!(drain_messages::<PlayCue>(&mut world).is_empty());
}

#[test]
fn defeated_enemy_drops_health_pickup() {
    let mut world = World::new();
    init_messages::<EnemyDefeated>(&mut world);

    let enemy = world.spawn_empty().id();
    world.write_message(EnemyDefeated { enemy, position: Vec2::new(7.0, -3.0) });

    run_system_once(&mut world, super::drop_health_on_defeat);

    let mut q = world.query::<(&Pickup, &Transform)>();
    let (pickup, tf) = q.single(&world).expect("one dropped pickup");
    assert_eq!(*pickup, Pickup::HealthRestore);
    assert_eq!(tf.translation.truncate(), Vec2::new(7.0, -3.0));
}
