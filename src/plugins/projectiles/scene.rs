//! Overlap queries used by hit resolution.
//!
//! Two query shapes:
//! - targeted: one known object decides whether a probe box overlaps it
//!   (see `PlayerHurtbox::query`), producing an `OverlapQueryResult`;
//! - broad: every object overlapping a box, in the order the scene returns
//!   them (`OverlapScene`).
//!
//! Callers treat the broad order as stable input and never re-sort it.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::layers::Layer;

/// Result of a targeted overlap query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlapQueryResult {
    pub valid: bool,
    /// The object the query was made against.
    pub queried: Entity,
}

/// Axis-aligned box overlap (touching counts).
#[inline]
pub fn boxes_overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    (a_center - b_center).abs().cmple(a_half + b_half).all()
}

/// Broad overlap query against the whole collision scene.
pub trait OverlapScene {
    /// All objects overlapping the box centred on `center`, excluding
    /// `exclude` (the querying projectile itself).
    fn overlapping(&self, center: Vec2, half_extents: Vec2, exclude: Entity) -> Vec<Entity>;
}

/// Production scene: Avian's spatial query over character colliders.
#[derive(SystemParam)]
pub struct PhysicsOverlaps<'w, 's> {
    spatial: SpatialQuery<'w, 's>,
}

impl OverlapScene for PhysicsOverlaps<'_, '_> {
    fn overlapping(&self, center: Vec2, half_extents: Vec2, exclude: Entity) -> Vec<Entity> {
        let probe = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        self.spatial
            .shape_intersections(&probe, center, 0.0, &broad_filter(exclude))
    }
}

/// Characters only, never the querying projectile.
///
/// The player stays in the mask: classification, not the query, decides who
/// can be hit.
pub fn broad_filter(exclude: Entity) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([Layer::Player, Layer::Enemy]).with_excluded_entities([exclude])
}
