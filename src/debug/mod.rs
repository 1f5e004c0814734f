//! Debug overlay for tuning the controller in the sandbox.
//!
//! Features:
//! - Toggle sensor gizmos (F3)
//! - Feet circle turns green while grounded
//! - Wall ray turns orange while touching a wall, grey when skipped

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::avian::collider_half_extents;
use crate::movement::{ControllerConfig, Locomotion};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether sensor gizmos are drawn
    pub show_sensors: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_overlay,
                draw_sensor_gizmos.run_if(|state: Res<DebugState>| state.show_sensors),
            ),
        );
    }
}

fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.show_sensors = !state.show_sensors;
        info!("Sensor overlay: {}", state.show_sensors);
    }
}

fn draw_sensor_gizmos(
    mut gizmos: Gizmos,
    config: Res<ControllerConfig>,
    query: Query<(&Transform, &Collider, &Locomotion)>,
) {
    let idle = Color::srgb(0.6, 0.6, 0.6);

    for (transform, collider, locomotion) in &query {
        let center = transform.translation.truncate();
        let state = &locomotion.state;

        let feet_color = if state.is_grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            idle
        };
        gizmos.circle_2d(
            center + config.sensors.feet_offset,
            config.sensors.feet_radius,
            feet_color,
        );

        let ray_color = match (state.wall_checked, state.is_touching_wall) {
            (true, true) => Color::srgb(1.0, 0.6, 0.1),
            (true, false) => Color::srgb(0.9, 0.9, 0.9),
            (false, _) => idle,
        };
        let reach = collider_half_extents(collider).x + config.jump.wall_ray_extra_length;
        let tip = center + Vec2::X * state.facing.sign() * reach;
        gizmos.line_2d(center, tip, ray_color);
    }
}
