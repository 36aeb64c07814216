//! Level domain: tests for the end-of-level check and completion latch.

use super::{reached_end, LevelProgress};
use crate::content::LevelDef;

#[test]
fn test_short_of_the_line_is_not_complete() {
    let level = LevelDef::default();
    assert!(!reached_end(level.start_position.0, level.end_x));
    assert!(!reached_end(level.end_x - 0.5, level.end_x));
}

#[test]
fn test_reaching_the_line_exactly_completes() {
    // The original compared >= against LevelOneEnd.X == 14788.0.
    assert!(reached_end(14788.0, 14788.0));
    assert!(reached_end(14788.1, 14788.0));
}

#[test]
fn test_completion_latch_fires_once() {
    let mut progress = LevelProgress::default();
    assert!(!progress.is_completed());

    assert!(progress.mark_completed());
    assert!(progress.is_completed());

    // The position check keeps passing every frame after the line is
    // crossed; the latch must not re-fire.
    assert!(!progress.mark_completed());
    assert!(!progress.mark_completed());
}

#[test]
fn test_auto_run_stays_zero_after_completion() {
    let level = LevelDef::default();
    let mut auto_run = 1.0_f32;

    // Simulate frames approaching, reaching, and coasting past the line.
    for x in [level.end_x - 200.0, level.end_x, level.end_x + 120.0, level.end_x + 600.0] {
        if reached_end(x, level.end_x) {
            auto_run = 0.0;
        }
        if x >= level.end_x {
            assert_eq!(auto_run, 0.0);
        } else {
            assert_eq!(auto_run, 1.0);
        }
    }
}
