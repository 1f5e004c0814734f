//! Movement domain: horizontal acceleration, speed cap and drag.

use bevy::prelude::*;

use crate::movement::{MovementConfig, RigidBodyPort};

/// Push the body toward the input direction, hard-cap horizontal speed and
/// pick the drag for this step.
pub fn apply<B: RigidBodyPort + ?Sized>(
    config: &MovementConfig,
    body: &mut B,
    grounded: bool,
    move_x: f32,
) {
    if move_x != 0.0 {
        body.apply_force(Vec2::new(move_x * config.acceleration, 0.0));
    }

    let velocity_x = clamp_speed(config, body);
    body.set_drag(drag(config, grounded, move_x, velocity_x));
}

/// Hard-cap horizontal speed at `max_speed`, leaving vertical speed alone.
/// Returns the resulting horizontal velocity.
pub fn clamp_speed<B: RigidBodyPort + ?Sized>(config: &MovementConfig, body: &mut B) -> f32 {
    let mut velocity = body.linear_velocity();
    if velocity.x.abs() > config.max_speed {
        velocity.x = config.max_speed.copysign(velocity.x);
        body.set_linear_velocity(velocity);
    }
    velocity.x
}

/// Drag policy: full ground drag while idling or turning around, none while
/// running, and a fraction of it in the air.
pub fn drag(config: &MovementConfig, grounded: bool, move_x: f32, velocity_x: f32) -> f32 {
    if !grounded {
        return config.ground_drag * config.air_drag_multiplier;
    }
    if move_x.abs() < config.run_threshold || is_changing_direction(move_x, velocity_x) {
        config.ground_drag
    } else {
        0.0
    }
}

fn is_changing_direction(move_x: f32, velocity_x: f32) -> bool {
    (move_x > 0.0 && velocity_x < 0.0) || (move_x < 0.0 && velocity_x > 0.0)
}
