//! Loader for the RON level file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{LevelDef, LevelFile};
use super::validation::validate_level;
use super::LevelConfig;
use crate::combat::DamageTuning;
use crate::movement::MovementTuning;

pub(crate) const LEVEL_FILE: &str = "assets/data/level.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load and parse the level file.
pub fn load_level_file(path: &Path) -> Result<LevelFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load the level definition, falling back to the built-in defaults when the
/// file is missing or invalid. The game always starts.
pub fn load_level_or_default(path: &Path) -> LevelDef {
    let level = match load_level_file(path) {
        Ok(file) => file.level,
        Err(e) => {
            warn!("{}; using built-in level", e);
            return LevelDef::default();
        }
    };

    let errors = validate_level(&level);
    if errors.is_empty() {
        info!("Loaded level '{}' from {}", level.id, path.display());
        level
    } else {
        for error in &errors {
            warn!("{}", error);
        }
        warn!(
            "Level '{}' failed validation; using built-in level",
            level.id
        );
        LevelDef::default()
    }
}

/// Startup system: load the level file and apply any tuning overrides to the
/// movement and damage resources.
pub(crate) fn load_level_content(
    mut commands: Commands,
    mut movement_tuning: ResMut<MovementTuning>,
    mut damage_tuning: ResMut<DamageTuning>,
) {
    let level = load_level_or_default(Path::new(LEVEL_FILE));

    if let Some(tuning) = &level.tuning {
        movement_tuning.apply_overrides(tuning);
        damage_tuning.apply_overrides(tuning);
    }

    commands.insert_resource(LevelConfig { level });
}
