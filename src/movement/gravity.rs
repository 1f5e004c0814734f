//! Movement domain: per-tick gravity scale shaping.

use crate::movement::{ApexGravity, JumpConfig, JumpKind, RigidBodyPort};

/// Gravity scale for the next integration step.
///
/// Grounded bodies get none. Falling bodies fall fast. A tapped jump rises
/// under boosted gravity, which is what makes it lower than a held one.
pub fn scale(
    config: &JumpConfig,
    grounded: bool,
    velocity_y: f32,
    last_jump: Option<JumpKind>,
) -> f32 {
    if grounded {
        return 0.0;
    }
    let base = config.gravity_scale;
    if velocity_y < 0.0 {
        return base * config.fall_gravity_multiplier;
    }
    let rising = velocity_y > 0.0 || config.apex_gravity == ApexGravity::Rising;
    if rising && last_jump == Some(JumpKind::Tap) {
        base * config.short_jump_gravity_multiplier
    } else {
        base
    }
}

pub fn apply<B: RigidBodyPort + ?Sized>(
    config: &JumpConfig,
    body: &mut B,
    grounded: bool,
    last_jump: Option<JumpKind>,
) {
    let velocity_y = body.linear_velocity().y;
    body.set_gravity_scale(scale(config, grounded, velocity_y, last_jump));
}
