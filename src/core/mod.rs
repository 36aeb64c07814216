//! Core domain: game states, camera, and frame-tick ordering.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

/// Per-frame phases of the character tick. Locomotion runs first, then
/// animation selection, then the level-progress check.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickPhase {
    Locomotion,
    Animate,
    Progress,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    TickPhase::Locomotion,
                    TickPhase::Animate,
                    TickPhase::Progress,
                )
                    .chain(),
            )
            .add_systems(Startup, systems::setup_camera)
            .add_systems(Update, systems::camera_follow.in_set(TickPhase::Progress));
    }
}
