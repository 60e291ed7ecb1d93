//! Enemies plugin: shuriken-throwing ninjas with a short death state.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live in components:
//!    - `Health`, `EnemyLifeState` describe gameplay reality.
//!    - `Thrower` holds the throw cadence.
//!
//! 2) RULES mutate facts in predictable places:
//!    - hit resolution (projectiles plugin) lowers `Health`;
//!    - this module reads `Health` and transitions `EnemyLifeState`.
//!
//! 3) STRUCTURAL CHANGES are deferred:
//!    - dying enemies are marked `PendingDespawn` and removed in PostUpdate,
//!      never inside the fixed step that damaged them.
//!
//! Throwers don't spawn projectiles; they write `SpawnProjectileRequest`
//! and the projectile plugin owns the spawn. Every request names the thrower
//! as owner, which is what keeps an undeflected shuriken from hurting it.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::time::Fixed;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::characters::{Character, Health};
use crate::plugins::player::Player;
use crate::plugins::projectiles::messages::SpawnProjectileRequest;

const ENEMY_SIZE: f32 = 28.0;
/// Shuriken leave the hand this far from the thrower's centre.
const THROW_OFFSET: f32 = 24.0;

#[derive(Component)]
pub struct Enemy;

/// Throws a shuriken at the player every time the cooldown elapses.
#[derive(Component, Debug, Clone)]
pub struct Thrower {
    pub cooldown: Timer,
}

impl Thrower {
    pub fn every(secs: f32) -> Self {
        Self { cooldown: Timer::from_seconds(secs, TimerMode::Repeating) }
    }
}

/// Enemy lifecycle state machine.
///
/// - Alive: throws, can be hit.
/// - Dying: short shrink/fade, no longer interacts.
/// - Dead: terminal marker to stop further state transitions.
#[derive(Component, Debug, Clone)]
pub enum EnemyLifeState {
    Alive,
    Dying { timer: Timer },
    Dead,
}

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Written when an enemy starts dying.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct EnemyDefeated {
    pub enemy: Entity,
    pub position: Vec2,
}

/// Register enemy systems.
///
/// - FixedUpdate: throw.
/// - FixedPostUpdate: consume hit results (Health) and advance the life state.
/// - PostUpdate: structural cleanup.
pub fn plugin(app: &mut App) {
    app.add_message::<EnemyDefeated>();

    app.add_systems(
        FixedUpdate,
        throw_at_player.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        (enemy_death_trigger, enemy_death_progress)
            .chain()
            .after(crate::plugins::projectiles::hits::resolve_projectile_hits)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_enemies.run_if(in_state(GameState::InGame)),
    );
}

/// Collision layers for an enemy that should no longer interact with anything.
///
/// Membership moves off `Enemy` too, so overlap queries stop reporting it.
#[inline]
fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Default, [] as [Layer; 0])
}

/// Spawn one enemy ninja at `position`.
pub fn spawn_enemy(commands: &mut Commands, tunables: &Tunables, position: Vec2) -> Entity {
    let enemy_layers = CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player]);

    commands
        .spawn((
            Name::new("EnemyNinja"),
            Enemy,
            Character::NON_PLAYER,
            Health::full(tunables.enemy_max_hp),
            EnemyLifeState::Alive,
            Thrower::every(tunables.throw_interval_secs),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(Vec2::splat(ENEMY_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Static,
            Collider::rectangle(ENEMY_SIZE, ENEMY_SIZE),
            enemy_layers,
            Occluder2d::circle(ENEMY_SIZE * 0.5),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Aim at the player's current position and request a shuriken.
fn throw_at_player(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut q_enemies: Query<(Entity, &Transform, &mut Thrower, &EnemyLifeState), With<Enemy>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let target = player_tf.translation.truncate();

    for (enemy, tf, mut thrower, life) in &mut q_enemies {
        if !matches!(life, EnemyLifeState::Alive) {
            continue;
        }

        thrower.cooldown.tick(time.delta());
        if !thrower.cooldown.just_finished() {
            continue;
        }

        let origin = tf.translation.truncate();
        let dir = (target - origin).try_normalize().unwrap_or(Vec2::NEG_Y);

        writer.write(SpawnProjectileRequest {
            pos: origin + dir * THROW_OFFSET,
            vel: dir * tunables.shuriken_speed,
            damage: tunables.shuriken_damage,
            owner: enemy,
        });
    }
}

/// Transition Alive -> Dying when HP drops to 0.
///
/// Does not despawn; it stops collision interaction and announces the defeat.
fn enemy_death_trigger(
    mut q: Query<(
        Entity,
        &Health,
        &mut EnemyLifeState,
        &mut CollisionLayers,
        &mut Sprite,
        &Transform,
    ), (With<Enemy>, Without<PendingDespawn>)>,
    mut defeated: MessageWriter<EnemyDefeated>,
) {
    for (enemy, hp, mut life, mut layers, mut sprite, tf) in &mut q {
        if !matches!(*life, EnemyLifeState::Alive) {
            continue;
        }

        if hp.is_depleted() {
            *life = EnemyLifeState::Dying {
                timer: Timer::from_seconds(0.35, TimerMode::Once),
            };
            *layers = non_interacting_enemy_layers();
            sprite.color = Color::srgba(0.8, 0.8, 0.8, 1.0);

            defeated.write(EnemyDefeated {
                enemy,
                position: tf.translation.truncate(),
            });
        }
    }
}

/// Animate Dying state and mark PendingDespawn once finished.
fn enemy_death_progress(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut EnemyLifeState, &mut Sprite, &mut Transform), (With<Enemy>, Without<PendingDespawn>)>,
) {
    for (e, mut life, mut sprite, mut tf) in &mut q {
        let EnemyLifeState::Dying { timer } = &mut *life else {
            continue;
        };

        timer.tick(time.delta());

        let t = timer.fraction();
        tf.scale = Vec3::splat(1.0 - t);

        let mut c = sprite.color.to_srgba();
        c.alpha = 1.0 - t;
        sprite.color = c.into();

        if timer.is_finished() {
            *life = EnemyLifeState::Dead;
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
