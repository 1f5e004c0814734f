//! Acrobatic 2D platformer character controller for bevy and avian2d.
//!
//! Run, variable-height jumps, extra air jumps, coyote time, jump buffering,
//! wall slides and wall jumps, driven once per fixed physics tick.

#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;

pub mod prelude {
    pub use crate::movement::{
        ApexGravity, CharacterState, Clock, ControllerBuilder, ControllerConfig, ControllerError,
        ControllerSet, Facing, FacingSink, GameLayer, HoldClassifier, JumpConfig, JumpEdge,
        JumpGrant, JumpKind, JumpPhase, KeyboardControlsPlugin, Locomotion, MovementConfig,
        PhysicsQueryPort, PlatformerController, PlatformerPlugin, Player, RigidBodyPort,
        SensorConfig, SteppedClock, character_bundle,
    };
}
