//! Hit resolution: runs once per fixed step for every live projectile and
//! decides whether it was consumed.
//!
//! ```text
//!  Deflection::Normal    (hostile to the player only)
//!     player missing / no overlap / player is owner ........ keep flying
//!     player open ........................................... damage player, consumed
//!     player blocking ....................................... spark + deflect cue, then
//!         can deflect  -> reverse x1.5, damage x4, +100 ...... keep flying, now Deflected
//!         cannot       -> ............................... consumed, no damage
//!
//!  Deflection::Deflected (hostile to every non-player character)
//!     first NonPlayerCharacter in broad overlap order ....... damage it, consumed
//!     none .................................................. keep flying
//! ```
//!
//! None of the "keep flying" cases are errors; they are the common per-step
//! outcome.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::audio::{Cue, PlayCue};
use crate::plugins::characters::{Character, CharacterKind, DamageDealt, Health};
use crate::plugins::player::{Guard, Player, PlayerHurtbox};
use crate::plugins::score::AwardScore;

use super::components::Projectile;
use super::messages::SparkRequested;
use super::scene::{OverlapScene, PhysicsOverlaps};

/// Static classification of a hit candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitClass {
    PlayerCharacter,
    NonPlayerCharacter,
    Other,
}

impl HitClass {
    #[inline]
    pub fn of(character: Option<&Character>) -> Self {
        match character.map(|c| c.kind) {
            Some(CharacterKind::Player) => HitClass::PlayerCharacter,
            Some(CharacterKind::NonPlayer) => HitClass::NonPlayerCharacter,
            None => HitClass::Other,
        }
    }
}

/// Velocity of a projectile right after deflection.
#[inline]
pub fn deflected_velocity(velocity: Vec2, speed_scale: f32) -> Vec2 {
    -velocity * speed_scale
}

/// Everything hit resolution may write besides the projectile itself.
#[derive(SystemParam)]
pub struct HitEffects<'w, 's> {
    commands: Commands<'w, 's>,
    sparks: MessageWriter<'w, SparkRequested>,
    cues: MessageWriter<'w, PlayCue>,
    scores: MessageWriter<'w, AwardScore>,
    damage: MessageWriter<'w, DamageDealt>,
}

type CharacterQuery<'w, 's> = Query<'w, 's, (&'static Character, &'static mut Health)>;

#[derive(SystemParam)]
pub struct HitParams<'w, 's> {
    tunables: Res<'w, Tunables>,
    projectiles: Query<
        'w,
        's,
        (
            Entity,
            &'static Transform,
            &'static mut Projectile,
            &'static mut LinearVelocity,
        ),
    >,
    player: Query<
        'w,
        's,
        (Entity, &'static Transform, &'static PlayerHurtbox, &'static Guard),
        (With<Player>, Without<Projectile>),
    >,
    characters: CharacterQuery<'w, 's>,
    effects: HitEffects<'w, 's>,
}

/// The player as seen by one step of hit resolution.
#[derive(Clone, Copy, Debug)]
struct PlayerView {
    entity: Entity,
    position: Vec2,
    hurtbox: PlayerHurtbox,
    guard: Guard,
}

/// One projectile being resolved.
struct Shot<'a> {
    entity: Entity,
    position: Vec2,
    projectile: &'a mut Projectile,
    velocity: &'a mut Vec2,
}

impl HitParams<'_, '_> {
    /// Resolve every projectile against `scene` and despawn the consumed ones.
    pub fn resolve_all(&mut self, scene: &impl OverlapScene) {
        let player = self
            .player
            .single()
            .ok()
            .map(|(entity, tf, hurtbox, guard)| PlayerView {
                entity,
                position: tf.translation.truncate(),
                hurtbox: *hurtbox,
                guard: *guard,
            });

        for (entity, tf, mut projectile, mut velocity) in &mut self.projectiles {
            let mut shot = Shot {
                entity,
                position: tf.translation.truncate(),
                projectile: &mut *projectile,
                velocity: &mut velocity.0,
            };

            let consumed = check_hits(
                &mut shot,
                player,
                scene,
                &mut self.characters,
                &mut self.effects,
                &self.tunables,
            );

            if consumed {
                self.effects.commands.entity(entity).despawn();
            }
        }
    }
}

/// Fixed-step system: resolve projectile hits against the physics scene.
pub fn resolve_projectile_hits(scene: PhysicsOverlaps, mut hits: HitParams) {
    hits.resolve_all(&scene);
}

/// Per-projectile decision. Returns `true` when the projectile is consumed.
fn check_hits(
    shot: &mut Shot<'_>,
    player: Option<PlayerView>,
    scene: &impl OverlapScene,
    characters: &mut CharacterQuery,
    effects: &mut HitEffects,
    tunables: &Tunables,
) -> bool {
    if shot.projectile.deflection.is_deflected() {
        strike_bystander(shot, scene, characters, effects)
    } else {
        seek_player(shot, player, characters, effects, tunables)
    }
}

fn seek_player(
    shot: &mut Shot<'_>,
    player: Option<PlayerView>,
    characters: &mut CharacterQuery,
    effects: &mut HitEffects,
    tunables: &Tunables,
) -> bool {
    let Some(player) = player else {
        return false;
    };

    let hit = player.hurtbox.query(
        player.entity,
        player.position,
        shot.position,
        shot.projectile.half_extents,
    );
    if !hit.valid || shot.projectile.owner.is(hit.queried) {
        return false;
    }

    if !player.guard.blocking {
        apply_damage(characters, effects, hit.queried, shot);
        return true;
    }

    effects.sparks.write(SparkRequested {
        position: shot.position,
    });
    effects.cues.write(PlayCue(Cue::Deflect));

    if player.guard.can_deflect && shot.projectile.deflection.deflect() {
        *shot.velocity = deflected_velocity(*shot.velocity, tunables.deflect_speed_scale);
        shot.projectile.damage *= tunables.deflect_damage_scale;
        effects.scores.write(AwardScore {
            amount: tunables.deflect_score,
            source: shot.entity,
        });
        debug!(
            "{:?} deflected, damage now {}",
            shot.entity, shot.projectile.damage
        );
        return false;
    }

    // Blocked without the deflect capability: absorbed, nobody hurt.
    true
}

fn strike_bystander(
    shot: &mut Shot<'_>,
    scene: &impl OverlapScene,
    characters: &mut CharacterQuery,
    effects: &mut HitEffects,
) -> bool {
    let candidates = scene.overlapping(shot.position, shot.projectile.half_extents, shot.entity);

    let target = candidates.into_iter().find(|&e| {
        let character = characters.get(e).ok().map(|(c, _)| c);
        HitClass::of(character) == HitClass::NonPlayerCharacter
    });

    match target {
        Some(target) => {
            apply_damage(characters, effects, target, shot);
            true
        }
        None => false,
    }
}

fn apply_damage(
    characters: &mut CharacterQuery,
    effects: &mut HitEffects,
    target: Entity,
    shot: &Shot<'_>,
) {
    let Ok((_, mut health)) = characters.get_mut(target) else {
        return;
    };
    let amount = shot.projectile.damage;
    health.damage(amount);
    effects.damage.write(DamageDealt {
        target,
        amount,
        source: shot.entity,
    });
}
