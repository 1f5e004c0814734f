//! Movement domain: tuning resources for the controller.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerError, GameLayer};

/// Horizontal locomotion tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementConfig {
    pub acceleration: f32,
    pub max_speed: f32,
    /// Input magnitude below which ground drag stays on.
    pub run_threshold: f32,
    pub ground_drag: f32,
    pub air_drag_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: 40.0,
            max_speed: 6.0,
            run_threshold: 0.3,
            ground_drag: 5.0,
            air_drag_multiplier: 0.06,
        }
    }
}

/// Gravity policy at the exact apex (`velocity.y == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum ApexGravity {
    /// Treat the apex as part of the ascent.
    #[default]
    Rising,
    /// Plain base gravity at the apex.
    Base,
}

/// Jump, gravity and wall tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct JumpConfig {
    pub jump_force: f32,
    pub extra_jump_force_multiplier: f32,
    /// Maximum air jumps (0 = no double jump, 1 = double jump, 2 = triple, etc.)
    pub extra_jump_count: u8,
    /// Base gravity scale while airborne.
    pub gravity_scale: f32,
    pub fall_gravity_multiplier: f32,
    pub short_jump_gravity_multiplier: f32,
    pub coyote_window: f32,
    pub jump_buffer_window: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_buffer_window: f32,
    pub wall_ray_extra_length: f32,
    /// Horizontal speed away from the wall on a wall jump.
    pub wall_jump_kick: f32,
    pub refill_extra_jumps_on_wall_slide: bool,
    /// Seconds after a primary jump during which ground contact is ignored.
    pub ground_lockout: f32,
    pub apex_gravity: ApexGravity,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_force: 6.5,
            extra_jump_force_multiplier: 1.0,
            extra_jump_count: 1,
            gravity_scale: 1.0,
            fall_gravity_multiplier: 2.5,
            short_jump_gravity_multiplier: 2.0,
            coyote_window: 0.2,
            jump_buffer_window: 0.15,
            wall_slide_speed: 1.5,
            wall_jump_buffer_window: 0.15,
            wall_ray_extra_length: 0.05,
            wall_jump_kick: 0.0,
            refill_extra_jumps_on_wall_slide: false,
            ground_lockout: 0.1,
            apex_gravity: ApexGravity::Rising,
        }
    }
}

impl JumpConfig {
    /// Apex height of a held ground jump under `base_gravity` (h = v² / 2g).
    pub fn jump_height(&self, base_gravity: f32) -> f32 {
        let g = base_gravity * self.gravity_scale;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Height reachable with the ground jump plus every extra jump fired at apex.
    pub fn max_reachable_height(&self, base_gravity: f32) -> f32 {
        let extra_force = self.jump_force * self.extra_jump_force_multiplier;
        let g = base_gravity * self.gravity_scale;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_height(base_gravity)
            + self.extra_jump_count as f32 * extra_force * extra_force / (2.0 * g)
    }
}

/// Ground and wall sensing setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorConfig {
    /// Feet anchor relative to the body centre.
    pub feet_offset: Vec2,
    pub feet_radius: f32,
    /// Layers counted as ground for both the feet check and the wall ray.
    pub ground_mask: LayerMask,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            feet_offset: Vec2::new(0.0, -0.8),
            feet_radius: 0.1,
            ground_mask: LayerMask::from([GameLayer::Ground, GameLayer::Wall]),
        }
    }
}

/// Serialized portion of the controller tuning (see `assets/data/controller.ron`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tuning {
    pub movement: MovementConfig,
    pub jump: JumpConfig,
}

/// Read-only controller configuration shared by every character.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub sensors: SensorConfig,
}

impl ControllerConfig {
    pub fn from_tuning(tuning: Tuning, sensors: SensorConfig) -> Self {
        Self {
            movement: tuning.movement,
            jump: tuning.jump,
            sensors,
        }
    }

    /// Reject tuning that would break the controller invariants.
    pub fn validate(&self) -> Result<(), ControllerError> {
        let m = &self.movement;
        let j = &self.jump;
        let non_negative = [
            ("acceleration", m.acceleration),
            ("run_threshold", m.run_threshold),
            ("ground_drag", m.ground_drag),
            ("air_drag_multiplier", m.air_drag_multiplier),
            ("jump_force", j.jump_force),
            ("extra_jump_force_multiplier", j.extra_jump_force_multiplier),
            ("gravity_scale", j.gravity_scale),
            ("fall_gravity_multiplier", j.fall_gravity_multiplier),
            ("short_jump_gravity_multiplier", j.short_jump_gravity_multiplier),
            ("coyote_window", j.coyote_window),
            ("jump_buffer_window", j.jump_buffer_window),
            ("wall_slide_speed", j.wall_slide_speed),
            ("wall_jump_buffer_window", j.wall_jump_buffer_window),
            ("wall_ray_extra_length", j.wall_ray_extra_length),
            ("wall_jump_kick", j.wall_jump_kick),
            ("ground_lockout", j.ground_lockout),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ControllerError::InvalidTuning { field, value });
            }
        }
        if !m.max_speed.is_finite() || m.max_speed <= 0.0 {
            return Err(ControllerError::InvalidTuning {
                field: "max_speed",
                value: m.max_speed,
            });
        }
        if j.wall_jump_kick > m.max_speed {
            return Err(ControllerError::InvalidTuning {
                field: "wall_jump_kick",
                value: j.wall_jump_kick,
            });
        }

        let s = &self.sensors;
        if !s.feet_radius.is_finite() || s.feet_radius <= 0.0 {
            return Err(ControllerError::InvalidSensor {
                reason: "feet radius must be positive",
            });
        }
        if !s.feet_offset.is_finite() {
            return Err(ControllerError::InvalidSensor {
                reason: "feet anchor must be finite",
            });
        }
        Ok(())
    }
}
