use bevy::prelude::*;

/// Back-reference to the entity that threw a projectile.
///
/// Identity only: the owner may despawn while its projectiles are still in
/// flight, so this is never dereferenced, just compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileOwner(pub Entity);

impl ProjectileOwner {
    #[inline]
    pub fn is(self, entity: Entity) -> bool {
        self.0 == entity
    }
}

/// One-way deflection latch.
///
/// `Normal` projectiles only hurt the player. `Deflected` projectiles hurt any
/// non-player character. The only transition is `Normal -> Deflected`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Deflection {
    #[default]
    Normal,
    Deflected,
}

impl Deflection {
    /// Latch into `Deflected`. Returns `true` only for the call that made the
    /// transition.
    #[inline]
    pub fn deflect(&mut self) -> bool {
        match self {
            Deflection::Normal => {
                *self = Deflection::Deflected;
                true
            }
            Deflection::Deflected => false,
        }
    }

    #[inline]
    pub fn is_deflected(self) -> bool {
        matches!(self, Deflection::Deflected)
    }
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    pub damage: f32,
    /// Half size of the axis-aligned hit box.
    pub half_extents: Vec2,
    pub deflection: Deflection,
}

impl Projectile {
    pub fn new(owner: Entity, damage: f32, half_extents: Vec2) -> Self {
        Self {
            owner: ProjectileOwner(owner),
            damage,
            half_extents,
            deflection: Deflection::Normal,
        }
    }
}

/// Downward acceleration in px/s^2.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ProjectileGravity(pub f32);

/// Remaining life of a transient entity (projectiles, sparks).
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }

    /// Elapsed share of the lifetime in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.0.fraction()
    }
}
