//! Validation for level definitions.

use super::data::LevelDef;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level field '{}': {}", self.field, self.message)
    }
}

/// Validate a level definition. Returns a list of validation errors, empty
/// if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.end_x <= level.start_position.0 {
        errors.push(ValidationError {
            field: "end_x",
            message: format!(
                "end of level ({}) is not ahead of the start ({})",
                level.end_x, level.start_position.0
            ),
        });
    }

    if level.start_position.1 <= level.ground_y {
        errors.push(ValidationError {
            field: "start_position",
            message: format!(
                "spawn y ({}) is at or below the ground surface ({})",
                level.start_position.1, level.ground_y
            ),
        });
    }

    for (index, obstacle) in level.obstacles.iter().enumerate() {
        if obstacle.size.0 <= 0.0 || obstacle.size.1 <= 0.0 {
            errors.push(ValidationError {
                field: "obstacles",
                message: format!(
                    "obstacle {} has non-positive size ({}, {})",
                    index, obstacle.size.0, obstacle.size.1
                ),
            });
        }
        if obstacle.x < level.start_position.0 || obstacle.x > level.end_x {
            errors.push(ValidationError {
                field: "obstacles",
                message: format!(
                    "obstacle {} at x={} lies outside the level span",
                    index, obstacle.x
                ),
            });
        }
    }

    errors
}
