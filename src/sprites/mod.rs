//! Sprites domain: velocity-driven animation selection.

pub mod animation;

#[cfg(test)]
mod tests;

pub use animation::{desired_state, AnimationController, AnimationState};

use bevy::prelude::*;

use crate::core::TickPhase;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (animation::select_animation, animation::update_animation_frames)
                .chain()
                .in_set(TickPhase::Animate),
        );
    }
}
