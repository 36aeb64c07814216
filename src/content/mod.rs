//! Content domain: RON level data, loading, and validation.

pub mod data;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

pub use data::{LevelDef, ObstacleKind, TuningDef};

use bevy::prelude::*;

/// The active level definition, inserted at startup by the loader.
#[derive(Resource, Debug, Clone)]
pub struct LevelConfig {
    pub level: LevelDef,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so the config is available to the Startup spawns.
        app.add_systems(PreStartup, loader::load_level_content);
    }
}
