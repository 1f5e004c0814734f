//! Movement domain: platformer controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
pub mod dev;
pub mod drive;
mod error;
pub mod gravity;
mod input;
mod jump;
mod loader;
mod locomotion;
pub mod orientation;
mod ports;
mod resources;
pub mod sensors;
pub mod systems;


pub use bootstrap::{TuningPath, character_bundle};
pub use components::{CharacterState, Facing, GameLayer, Ground, Player, Wall};
pub use controller::{ControllerBuilder, PlatformerController};
pub use error::ControllerError;
pub use input::{HoldClassifier, InputSampler, JumpEdge, JumpKind};
pub use jump::{BufferedJump, JumpGrant, JumpPhase, JumpRuntime};
pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use locomotion::Locomotion;
pub use ports::{Clock, FacingSink, PhysicsQueryPort, RigidBodyPort, SteppedClock};
pub use resources::{
    ApexGravity, ControllerConfig, JumpConfig, MovementConfig, SensorConfig, Tuning,
};
pub use sensors::ContactReport;

use std::path::PathBuf;

use bevy::prelude::*;

use crate::movement::bootstrap::{load_tuning_file, validate_config};
use crate::movement::systems::{read_input, reject_unbound_characters, run_controllers};

/// Ordering of the controller's fixed-tick work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Validate,
    Control,
}

/// Steps every [`Locomotion`] once per fixed tick. Insert a
/// [`ControllerConfig`] before adding the plugin to override the defaults.
#[derive(Default)]
pub struct PlatformerPlugin {
    /// RON tuning file overlaid on the config at startup.
    pub tuning_path: Option<PathBuf>,
}

impl PlatformerPlugin {
    pub fn with_tuning_file(path: impl Into<PathBuf>) -> Self {
        Self {
            tuning_path: Some(path.into()),
        }
    }
}

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        if let Some(path) = &self.tuning_path {
            app.insert_resource(TuningPath(path.clone()));
        }

        app.init_resource::<ControllerConfig>()
            .configure_sets(
                FixedUpdate,
                (ControllerSet::Validate, ControllerSet::Control).chain(),
            )
            .add_systems(Startup, (load_tuning_file, validate_config).chain())
            .add_systems(
                FixedUpdate,
                reject_unbound_characters.in_set(ControllerSet::Validate),
            )
            .add_systems(FixedUpdate, run_controllers.in_set(ControllerSet::Control));
    }
}

/// Keyboard bindings for entities tagged [`Player`].
pub struct KeyboardControlsPlugin;

impl Plugin for KeyboardControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, read_input);
    }
}
