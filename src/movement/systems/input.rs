//! Movement domain: input sampling for jump control.
//!
//! The forward run needs no input; only jumping is player-controlled, from
//! the keyboard or any touch (touch start jumps, touch end stops the jump).

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut input: ResMut<MovementInput>,
) {
    let key_just_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);
    let key_held = keyboard.pressed(KeyCode::Space)
        || keyboard.pressed(KeyCode::KeyW)
        || keyboard.pressed(KeyCode::ArrowUp);

    input.jump_just_pressed = key_just_pressed || touches.any_just_pressed();
    input.jump_held = key_held || touches.iter().next().is_some();
}
