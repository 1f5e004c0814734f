//! Movement domain: keyboard sampling for the player character.

use bevy::prelude::*;

use crate::movement::{HoldClassifier, Locomotion, Player};

/// Per-player Tap/Hold resolver for the jump button.
#[derive(Component, Debug, Clone, Default)]
pub struct JumpButton(pub HoldClassifier);

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Locomotion, &mut JumpButton), With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (unused by the controller core)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    let now = time.elapsed_secs();

    for (mut locomotion, mut button) in &mut query {
        locomotion.on_move_input(Vec2::new(x, y));
        button
            .0
            .sample(jump_held, now, |edge| locomotion.on_jump_input(edge));
    }
}
