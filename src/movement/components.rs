//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces
    Ground,
    /// Player character
    Player,
    /// Obstacles, both solid blocks and trigger volumes
    Obstacle,
}

#[derive(Component, Debug)]
pub struct Player;

/// Multiplier on the constant forward drive. 1.0 while the level is live,
/// 0.0 once the end-of-level line is crossed; never raised again.
#[derive(Component, Debug)]
pub struct AutoRun(pub f32);

impl Default for AutoRun {
    fn default() -> Self {
        Self(1.0)
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Face the direction of horizontal travel. At exactly zero velocity the
/// previous facing is kept.
pub fn facing_for(vx: f32, current: Facing) -> Facing {
    if vx < 0.0 {
        Facing::Left
    } else if vx > 0.0 {
        Facing::Right
    } else {
        current
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
