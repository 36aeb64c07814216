//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};
use crate::movement::bootstrap::PLAYER_HALF_HEIGHT;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not obstacles)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, PLAYER_HALF_HEIGHT);
        let ray_direction = Dir2::NEG_Y;
        let ray_distance = 4.0;

        let hit = spatial_query.cast_ray(
            ray_origin,
            ray_direction,
            ray_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        // Reset coyote timer when landing
        if state.on_ground && !was_on_ground {
            state.coyote_timer = 0.0;
            debug!("Landed at x={:.1}", transform.translation.x);
        }
    }
}
