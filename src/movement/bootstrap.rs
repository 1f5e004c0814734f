//! Movement domain: character bootstrap and data-driven tuning setup.

use std::path::PathBuf;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerConfig, GameLayer, Locomotion, load_tuning};

/// Where the plugin reads controller tuning from at startup.
#[derive(Resource, Debug, Clone)]
pub struct TuningPath(pub PathBuf);

/// Overlay file tuning onto the config resource; a bad file keeps the defaults.
pub(crate) fn load_tuning_file(path: Option<Res<TuningPath>>, mut config: ResMut<ControllerConfig>) {
    let Some(path) = path else {
        return;
    };

    match load_tuning(&path.0) {
        Ok(tuning) => {
            config.movement = tuning.movement;
            config.jump = tuning.jump;
            info!("Loaded controller tuning from {}", path.0.display());
        }
        Err(e) => {
            warn!("{}; using default controller tuning", e);
        }
    }
}

/// Invalid tuning is a wiring error, so the app stops here.
pub(crate) fn validate_config(config: Res<ControllerConfig>) {
    if let Err(e) = config.validate() {
        panic!("controller tuning rejected: {e}");
    }
}

/// Everything a controlled character needs besides rendering.
pub fn character_bundle(config: &ControllerConfig, position: Vec2, size: Vec2) -> impl Bundle {
    (
        Locomotion::new(config),
        Transform::from_translation(position.extend(0.0)),
        Collider::rectangle(size.x, size.y),
        LockedAxes::ROTATION_LOCKED,
        Friction::new(0.0),
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Default, GameLayer::Ground, GameLayer::Wall],
        ),
    )
}
