//! Animation selection and playback.
//!
//! The character has two looping clips: running and idle. Selection is
//! purely velocity-driven; the clip only swaps when the desired state
//! differs from the playing one, so the loop is never restarted mid-cycle.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::Player;

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
}

/// Select the clip for the current speed. Running whenever the character is
/// moving at all, in any direction; idle only at a dead stop.
pub fn desired_state(speed_sq: f32) -> AnimationState {
    if speed_sq > 0.0 {
        AnimationState::Running
    } else {
        AnimationState::Idle
    }
}

/// Component for clip playback on the character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Currently playing clip.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in the current clip.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: frame_count(AnimationState::Idle),
            frame_timer: 0.0,
            frame_duration: 0.15,
        }
    }
}

fn frame_count(state: AnimationState) -> u32 {
    match state {
        AnimationState::Idle => 4,
        AnimationState::Running => 6,
    }
}

impl AnimationController {
    /// Swap to the given clip. A no-op when it is already playing, keeping
    /// the loop uninterrupted; otherwise resets to the first frame.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.total_frames = frame_count(state);
        }
    }
}

/// Pick the clip from the character's velocity. Speed includes the vertical
/// component, so jumping in place still reads as running.
pub(crate) fn select_animation(
    mut query: Query<(&LinearVelocity, &mut AnimationController), With<Player>>,
) {
    for (velocity, mut controller) in &mut query {
        let speed_sq = velocity.length_squared();
        controller.set_state(desired_state(speed_sq));
    }
}

/// Advance the playing clip. Both clips loop.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;
            controller.current_frame = (controller.current_frame + 1) % controller.total_frames;
        }
    }
}
