//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<MovementInput>,
) {
    sample_input(&keyboard, &mouse, &mut input);
}

/// Fold one frame of button state into the input resource.
pub(crate) fn sample_input(
    keyboard: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
    input: &mut MovementInput,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    input.interact_held = keyboard.pressed(KeyCode::KeyE);

    // Latched until a fixed step consumes them; frames can outpace fixed steps
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        input.jump_pressed = true;
    }
    if keyboard.just_pressed(KeyCode::KeyQ) || mouse.just_pressed(MouseButton::Left) {
        input.cast_requested = true;
    }
}
