//! Movement domain: auto-run drive, jump, and facing systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    facing_for, AutoRun, Facing, MovementInput, MovementState, MovementTuning, Player,
};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Coyote time: starts counting when leaving ground
        if !state.on_ground {
            state.coyote_timer += dt;
        }

        // Jump buffer: counts down after pressing jump
        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer -= dt;
        }
    }
}

/// Constant forward drive. Velocity is pushed toward `run_speed` scaled by
/// the auto-run multiplier; with the multiplier at zero no input is applied
/// and the body slows under physics friction alone.
pub(crate) fn apply_auto_run(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&AutoRun, &MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (auto_run, state, mut velocity) in &mut query {
        if auto_run.0 <= 0.0 {
            continue;
        }

        let target_vx = tuning.run_speed * auto_run.0;
        let mut accel = tuning.accel * dt;
        if !state.on_ground {
            accel *= tuning.air_control;
        }

        if velocity.x < target_vx {
            velocity.x = (velocity.x + accel).min(target_vx);
        } else {
            velocity.x = (velocity.x - accel).max(target_vx);
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        // Buffer jump input
        if input.jump_just_pressed {
            state.jump_buffer_timer = tuning.jump_buffer_time;
        }

        let wants_jump = state.jump_buffer_timer > 0.0;
        let can_jump = state.on_ground || state.coyote_timer < tuning.coyote_time;

        if wants_jump && can_jump {
            velocity.y = tuning.jump_velocity;
            state.jump_buffer_timer = 0.0;
            state.coyote_timer = tuning.coyote_time; // Consume coyote time
            debug!("Jump: on_ground={}", state.on_ground);
        }

        // Variable jump height - cut velocity when releasing jump
        if !input.jump_held && velocity.y > 0.0 && !state.on_ground {
            velocity.y *= 0.5;
        }
    }
}

pub(crate) fn update_facing(
    mut query: Query<(&LinearVelocity, &mut MovementState, &mut Sprite), With<Player>>,
) {
    for (velocity, mut state, mut sprite) in &mut query {
        state.facing = facing_for(velocity.x, state.facing);
        sprite.flip_x = state.facing == Facing::Left;
    }
}
