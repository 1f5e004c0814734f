use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_controller::movement::{KeyboardControlsPlugin, PlatformerPlugin, dev};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Sandbox".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        PlatformerPlugin::with_tuning_file("assets/data/controller.ron"),
        KeyboardControlsPlugin,
    ))
    .add_systems(Startup, dev::spawn_sandbox);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(platformer_controller::debug::DebugPlugin);

    app.run();
}
