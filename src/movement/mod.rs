//! Movement domain: auto-run locomotion, jumping, and facing.

pub(crate) mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{facing_for, AutoRun, Facing, GameLayer, Ground, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::TickPhase;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::update_timers,
                    systems::detect_ground,
                    systems::apply_auto_run,
                    systems::apply_jump,
                    systems::update_facing,
                )
                    .chain()
                    .in_set(TickPhase::Locomotion),
            );
    }
}
