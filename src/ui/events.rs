//! UI domain: typed capability messages.
//!
//! These replace the original's by-name reflection calls ("DisplayHUD",
//! "RemoveViewports", "GameOver") with a typed, fire-and-forget seam. No
//! return values; senders never learn whether anyone listened.

use bevy::ecs::message::Message;

/// Request a HUD redraw after a health change.
#[derive(Debug)]
pub struct RefreshHud;

impl Message for RefreshHud {}

/// Request teardown of the in-game HUD.
#[derive(Debug)]
pub struct RemoveViewports;

impl Message for RemoveViewports {}

/// Request the game-over transition.
#[derive(Debug)]
pub struct TriggerGameOver;

impl Message for TriggerGameOver {}
