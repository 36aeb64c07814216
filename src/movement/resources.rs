//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::TuningDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Top forward speed while auto-running.
    pub run_speed: f32,
    pub accel: f32,
    /// Fraction of ground acceleration available while airborne.
    pub air_control: f32,
    pub jump_velocity: f32,
    pub gravity_scale: f32,
    pub ground_friction: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        // Speed, jump, gravity and friction values carried over from the
        // original character setup.
        Self {
            run_speed: 600.0,
            accel: 3000.0,
            air_control: 0.8,
            jump_velocity: 1000.0,
            gravity_scale: 2.0,
            ground_friction: 3.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
        }
    }
}

impl MovementTuning {
    /// Apply overrides from the level file's tuning block.
    pub fn apply_overrides(&mut self, tuning: &TuningDef) {
        if let Some(run_speed) = tuning.run_speed {
            self.run_speed = run_speed;
        }
        if let Some(jump_velocity) = tuning.jump_velocity {
            self.jump_velocity = jump_velocity;
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}
