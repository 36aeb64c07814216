//! Data definitions for the RON level file.
//!
//! These structs mirror the structure of assets/data/level.ron and are used
//! for deserialization. Defaults reproduce the built-in level-one layout.

use serde::{Deserialize, Serialize};

/// Top-level wrapper for the level file, with a schema version for
/// forward-compatible edits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelFile {
    pub schema_version: u32,
    pub level: LevelDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    /// Player spawn position.
    pub start_position: (f32, f32),
    /// X coordinate marking level completion.
    pub end_x: f32,
    /// Top surface of the ground strip.
    pub ground_y: f32,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub tuning: Option<TuningDef>,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            id: "level_one".to_string(),
            start_position: (-2302.0, -445.0),
            end_x: 14788.0,
            ground_y: -541.0,
            obstacles: Vec::new(),
            tuning: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObstacleDef {
    pub x: f32,
    pub y: f32,
    pub size: (f32, f32),
    pub kind: ObstacleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ObstacleKind {
    /// Static rigid body; contact arrives as a physical hit.
    Solid,
    /// Sensor volume; contact arrives as an overlap.
    Trigger,
}

/// Optional tuning overrides carried by the level file. Absent fields keep
/// the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TuningDef {
    pub run_speed: Option<f32>,
    pub jump_velocity: Option<f32>,
    pub contact_damage: Option<f32>,
    pub contact_cooldown_seconds: Option<f32>,
}
