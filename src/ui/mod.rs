//! UI domain: typed UI capability seam, HUD, and end-state overlays.

mod events;
mod hud;
mod overlays;

pub use events::{RefreshHud, RemoveViewports, TriggerGameOver};

use bevy::prelude::*;

use crate::core::GameState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RefreshHud>()
            .add_message::<RemoveViewports>()
            .add_message::<TriggerGameOver>()
            .add_systems(Startup, hud::spawn_hud)
            .add_systems(
                Update,
                (
                    hud::refresh_health_bar,
                    overlays::handle_remove_viewports,
                    overlays::handle_trigger_game_over,
                ),
            )
            .add_systems(
                OnEnter(GameState::LevelComplete),
                overlays::spawn_level_complete_overlay,
            )
            .add_systems(
                OnEnter(GameState::GameOver),
                overlays::spawn_game_over_overlay,
            );
    }
}
