//! Tunable gameplay constants.
//!
//! The deflection numbers are balance-critical: a deflected shuriken flies back
//! 1.5x faster, hits 4x harder and is worth 100 points.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_max_hp: f32,
    pub enemy_max_hp: f32,

    pub shuriken_speed: f32,
    pub shuriken_damage: f32,
    pub shuriken_lifetime_secs: f32,
    /// Downward acceleration applied to in-flight shuriken (px/s^2).
    pub shuriken_gravity: f32,
    pub shuriken_half_extents: Vec2,
    pub throw_interval_secs: f32,

    pub deflect_speed_scale: f32,
    pub deflect_damage_scale: f32,
    pub deflect_score: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_max_hp: 100.0,
            enemy_max_hp: 30.0,
            shuriken_speed: 520.0,
            shuriken_damage: 10.0,
            shuriken_lifetime_secs: 4.0,
            shuriken_gravity: 0.0,
            shuriken_half_extents: Vec2::splat(6.0),
            throw_interval_secs: 1.6,
            deflect_speed_scale: 1.5,
            deflect_damage_scale: 4.0,
            deflect_score: 100,
        }
    }
}
