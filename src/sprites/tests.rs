//! Sprites domain: tests for clip selection and swap behavior.

use super::{desired_state, AnimationController, AnimationState};

#[test]
fn test_running_iff_moving() {
    // Running for any nonzero velocity, including purely vertical motion.
    for (vx, vy) in [(600.0, 0.0), (-50.0, 0.0), (0.0, 1000.0), (0.0, -3.0), (12.0, 9.0)] {
        let speed_sq: f32 = vx * vx + vy * vy;
        assert_eq!(desired_state(speed_sq), AnimationState::Running);
    }

    assert_eq!(desired_state(0.0), AnimationState::Idle);
}

#[test]
fn test_clip_swap_resets_frame() {
    let mut controller = AnimationController::default();
    controller.current_frame = 2;
    controller.frame_timer = 0.1;

    controller.set_state(AnimationState::Running);
    assert_eq!(controller.state, AnimationState::Running);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert_eq!(controller.total_frames, 6);
}

#[test]
fn test_same_clip_does_not_restart_loop() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Running);
    controller.current_frame = 3;
    controller.frame_timer = 0.08;

    // Re-selecting the playing clip must not reset playback.
    controller.set_state(AnimationState::Running);
    assert_eq!(controller.current_frame, 3);
    assert_eq!(controller.frame_timer, 0.08);
}
