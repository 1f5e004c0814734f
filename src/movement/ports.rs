//! Movement domain: the narrow interfaces the controller drives.
//!
//! The controller never talks to a physics engine directly. A host binds a
//! rigid body, a query surface and a clock; the ECS adapters for avian live in
//! `systems::avian`, and the unit tests bind in-memory doubles.

use std::cell::Cell;
use std::rc::Rc;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::Facing;

/// The character's rigid body.
pub trait RigidBodyPort {
    /// World-space centre of the body.
    fn position(&self) -> Vec2;

    /// Half width and half height of the body's collision shape.
    fn half_extents(&self) -> Vec2;

    fn linear_velocity(&self) -> Vec2;

    fn set_linear_velocity(&mut self, velocity: Vec2);

    /// Apply a force for the current physics step.
    fn apply_force(&mut self, force: Vec2);

    /// Set the linear drag coefficient.
    fn set_drag(&mut self, drag: f32);

    fn set_gravity_scale(&mut self, scale: f32);
}

/// World queries used by the contact sensors. Both are filtered by `mask`.
pub trait PhysicsQueryPort {
    /// True if any collider in `mask` overlaps the circle.
    fn overlap_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool;

    /// True if a ray hits any collider in `mask` within `max_distance`.
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32, mask: LayerMask)
    -> bool;
}

/// Monotonic game-time source, in seconds.
pub trait Clock {
    fn now(&self) -> f32;
}

impl Clock for Time {
    fn now(&self) -> f32 {
        self.elapsed_secs()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f32 {
        (**self).now()
    }
}

/// A game clock the host advances by hand, shareable between the host loop
/// and the controller that reads it.
#[derive(Debug, Clone, Default)]
pub struct SteppedClock(Rc<Cell<f32>>);

impl SteppedClock {
    pub fn new(start: f32) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn advance(&self, dt: f32) {
        self.0.set(self.0.get() + dt);
    }

    pub fn set(&self, now: f32) {
        self.0.set(now);
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> f32 {
        self.0.get()
    }
}

/// Receives the character's facing once per tick (sprite flip, transform, ...).
pub trait FacingSink {
    fn face(&mut self, facing: Facing);
}

impl FacingSink for () {
    fn face(&mut self, _facing: Facing) {}
}

impl FacingSink for Sprite {
    fn face(&mut self, facing: Facing) {
        self.flip_x = facing == Facing::Left;
    }
}

impl<S: FacingSink + ?Sized> FacingSink for &mut S {
    fn face(&mut self, facing: Facing) {
        (**self).face(facing);
    }
}

impl<S: FacingSink> FacingSink for Option<S> {
    fn face(&mut self, facing: Facing) {
        if let Some(sink) = self {
            sink.face(facing);
        }
    }
}
