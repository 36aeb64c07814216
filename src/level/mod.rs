//! Level domain: geometry spawn and end-of-level progress.

mod progress;
mod spawn;

#[cfg(test)]
mod tests;

pub use progress::{reached_end, LevelProgress};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::TickPhase;

/// Fired once when the player first reaches the end-of-level line.
#[derive(Debug)]
pub struct LevelCompletedEvent;

impl Message for LevelCompletedEvent {}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelProgress>()
            .add_message::<LevelCompletedEvent>()
            .add_systems(Startup, spawn::spawn_level)
            .add_systems(
                Update,
                progress::check_level_end.in_set(TickPhase::Progress),
            )
            .add_systems(Update, progress::handle_level_completed);
    }
}
