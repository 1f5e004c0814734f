//! Movement domain: ground and wall contact sensing.

use crate::movement::{Facing, PhysicsQueryPort, RigidBodyPort, SensorConfig};

/// What the sensors saw this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactReport {
    pub grounded: bool,
    pub touching_wall: bool,
    /// Whether the wall ray was cast at all; it is skipped without horizontal input.
    pub wall_checked: bool,
}

/// Query the world for ground and wall contact.
///
/// The wall ray follows the facing the input resolves to this tick, so a hit
/// always means the character is pushing into that wall.
pub fn refresh<B, W>(
    sensors: &SensorConfig,
    wall_ray_extra_length: f32,
    body: &B,
    world: &W,
    move_x: f32,
) -> ContactReport
where
    B: RigidBodyPort + ?Sized,
    W: PhysicsQueryPort + ?Sized,
{
    // No ground layers configured: nothing can be touched.
    if sensors.ground_mask.0 == 0 {
        return ContactReport::default();
    }

    let center = body.position();
    let grounded = world.overlap_circle(
        center + sensors.feet_offset,
        sensors.feet_radius,
        sensors.ground_mask,
    );

    let Some(facing) = Facing::from_axis(move_x) else {
        return ContactReport {
            grounded,
            touching_wall: false,
            wall_checked: false,
        };
    };

    let ray_length = body.half_extents().x + wall_ray_extra_length;
    let touching_wall =
        world.cast_ray(center, facing.direction(), ray_length, sensors.ground_mask);

    ContactReport {
        grounded,
        touching_wall,
        wall_checked: true,
    }
}
