//! Character / damage model shared by the player and enemy ninjas.
//!
//! Every damageable entity carries a `Character` tag fixed at spawn time. Hit
//! resolution classifies targets from this tag alone, so "is this a character
//! but not the player?" is a plain enum match rather than a type lookup.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterKind {
    Player,
    NonPlayer,
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    pub kind: CharacterKind,
}

impl Character {
    pub const PLAYER: Self = Self { kind: CharacterKind::Player };
    pub const NON_PLAYER: Self = Self { kind: CharacterKind::NonPlayer };
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub hp: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { hp: max, max }
    }

    /// Subtracts exactly `amount`. Health may go negative; callers check
    /// `is_depleted` rather than relying on a floor.
    #[inline]
    pub fn damage(&mut self, amount: f32) {
        self.hp -= amount;
    }

    #[inline]
    pub fn restore_full(&mut self) {
        self.hp = self.max;
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0.0
    }
}

/// Written once per successful damage application.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct DamageDealt {
    pub target: Entity,
    pub amount: f32,
    /// The projectile (or other object) that caused the damage.
    pub source: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_message::<DamageDealt>()
        .add_systems(PostUpdate, log_damage);
}

fn log_damage(mut reader: MessageReader<DamageDealt>) {
    for ev in reader.read() {
        debug!("{:?} took {} damage from {:?}", ev.target, ev.amount, ev.source);
    }
}
