//! Core domain: camera setup and tracking.

use bevy::prelude::*;

use crate::movement::Player;

/// Vertical offset of the camera above the player, matching the side-view
/// boom of the original rig.
const CAMERA_Y_OFFSET: f32 = 75.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn camera_follow(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for mut camera in &mut camera_query {
        camera.translation.x = player.translation.x;
        camera.translation.y = player.translation.y + CAMERA_Y_OFFSET;
    }
}
