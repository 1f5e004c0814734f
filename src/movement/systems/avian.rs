//! Movement domain: avian2d bindings for the controller ports.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{PhysicsQueryPort, RigidBodyPort};

/// A character's avian components, borrowed for one fixed tick.
pub struct AvianBody<'w> {
    position: Vec2,
    half_extents: Vec2,
    inverse_mass: f32,
    dt: f32,
    velocity: Mut<'w, LinearVelocity>,
    damping: Mut<'w, LinearDamping>,
    gravity_scale: Mut<'w, GravityScale>,
}

impl<'w> AvianBody<'w> {
    pub fn new(
        position: Vec2,
        collider: &Collider,
        mass: Option<&ComputedMass>,
        dt: f32,
        velocity: Mut<'w, LinearVelocity>,
        damping: Mut<'w, LinearDamping>,
        gravity_scale: Mut<'w, GravityScale>,
    ) -> Self {
        let inverse_mass = mass
            .map(|m| m.value())
            .filter(|m| *m > 0.0 && m.is_finite())
            .map_or(0.0, |m| 1.0 / m);
        Self {
            position,
            half_extents: collider_half_extents(collider),
            inverse_mass,
            dt,
            velocity,
            damping,
            gravity_scale,
        }
    }
}

impl RigidBodyPort for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        // Integrate straight into velocity so the speed cap that follows sees it.
        self.velocity.0 += force * self.inverse_mass * self.dt;
    }

    fn set_drag(&mut self, drag: f32) {
        self.damping.0 = drag;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}

/// Spatial queries on behalf of one character, which never hits itself.
pub struct AvianWorld<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    character: Entity,
}

impl<'a, 'w, 's> AvianWorld<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, character: Entity) -> Self {
        Self {
            spatial_query,
            character,
        }
    }

    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.character])
    }
}

impl PhysicsQueryPort for AvianWorld<'_, '_, '_> {
    fn overlap_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool {
        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &self.filter(mask))
            .is_empty()
    }

    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter(mask))
            .is_some()
    }
}

/// Half extents of the collider's scaled shape.
pub fn collider_half_extents(collider: &Collider) -> Vec2 {
    let shape = collider.shape_scaled();
    if let Some(cuboid) = shape.as_cuboid() {
        Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y)
    } else if let Some(ball) = shape.as_ball() {
        Vec2::splat(ball.radius)
    } else if let Some(capsule) = shape.as_capsule() {
        Vec2::new(capsule.radius, capsule.half_height() + capsule.radius)
    } else {
        Vec2::splat(0.5)
    }
}
