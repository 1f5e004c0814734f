//! Movement domain: sandbox level and player spawn for manual testing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::JumpButton;
use crate::movement::{ControllerConfig, GameLayer, Ground, Player, Wall, character_bundle};

const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

pub fn spawn_sandbox(mut commands: Commands, config: Res<ControllerConfig>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / 40.0,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 3.0, 0.0),
    ));

    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut block = |marker_is_wall: bool, color: Color, size: Vec2, at: Vec2| {
        let mut entity = commands.spawn((
            Sprite::from_color(color, size),
            Transform::from_translation(at.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            entity.insert((Wall, wall_layers));
        } else {
            entity.insert((Ground, ground_layers));
        }
    };

    // Floor
    block(false, ground_color, Vec2::new(24.0, 1.0), Vec2::new(0.0, -0.5));
    // Side walls
    block(true, wall_color, Vec2::new(1.0, 14.0), Vec2::new(-12.5, 6.0));
    block(true, wall_color, Vec2::new(1.0, 14.0), Vec2::new(12.5, 6.0));
    // Ledge to run off for coyote jumps
    block(false, platform_color, Vec2::new(5.0, 0.5), Vec2::new(-6.0, 3.0));
    // Pillar for wall slides
    block(true, wall_color, Vec2::new(0.8, 6.0), Vec2::new(4.0, 3.0));

    commands.spawn((
        Player,
        JumpButton::default(),
        character_bundle(&config, Vec2::new(0.0, 1.0), PLAYER_SIZE),
        Sprite::from_color(Color::srgb(0.9, 0.9, 0.9), PLAYER_SIZE),
    ));
    info!("Sandbox spawned");
}
