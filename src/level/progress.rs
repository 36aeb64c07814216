//! Level domain: end-of-level monitoring.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::{CursorOptions, PrimaryWindow};

use crate::content::LevelConfig;
use crate::core::GameState;
use crate::level::LevelCompletedEvent;
use crate::movement::{AutoRun, Player};

/// One-shot completion latch. The position check itself runs every frame and
/// is idempotent; this only gates the completion event.
#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    completed: bool,
}

impl LevelProgress {
    /// Returns true the first time, false on every later call.
    pub fn mark_completed(&mut self) -> bool {
        if self.completed {
            false
        } else {
            self.completed = true;
            true
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// End-of-level test, X axis only. Reaching the line exactly counts.
pub fn reached_end(x: f32, end_x: f32) -> bool {
    x >= end_x
}

pub(crate) fn check_level_end(
    config: Res<LevelConfig>,
    mut progress: ResMut<LevelProgress>,
    mut completed_events: MessageWriter<LevelCompletedEvent>,
    mut player_query: Query<(&Transform, &mut AutoRun), With<Player>>,
    mut cursor_query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok((transform, mut auto_run)) = player_query.single_mut() else {
        return;
    };

    if !reached_end(transform.translation.x, config.level.end_x) {
        return;
    }

    // Idempotent: once zero, stays zero.
    auto_run.0 = 0.0;

    // Hand the player back their mouse for the post-level UI.
    if let Ok(mut cursor) = cursor_query.single_mut() {
        cursor.visible = true;
        cursor.hit_test = true;
    }

    if progress.mark_completed() {
        completed_events.write(LevelCompletedEvent);
        info!("Level complete at x={:.1}", transform.translation.x);
    }
}

pub(crate) fn handle_level_completed(
    mut completed_events: MessageReader<LevelCompletedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for _ in completed_events.read() {
        game_state.set(GameState::LevelComplete);
    }
}
