//! Combat domain: health tracking and the obstacle-contact state machine.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContactCooldown, Health, Obstacle, PLAYER_START_HEALTH};
pub use events::{DamageEvent, DeathEvent};
pub use resources::{DamageTuning, GameOverLatch};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DamageTuning>()
            .init_resource::<GameOverLatch>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    systems::tick_contact_cooldown,
                    systems::detect_obstacle_contact,
                    systems::apply_damage,
                    systems::process_death,
                )
                    .chain(),
            );
    }
}
