//! Combat domain: damage tuning and the game-over latch.

use bevy::prelude::*;

use crate::content::TuningDef;

#[derive(Resource, Debug, Clone)]
pub struct DamageTuning {
    /// Health lost per damage-eligible obstacle contact.
    pub contact_damage: f32,
    /// Debounce window after an eligible contact. The original used a 1 ms
    /// one-shot timer; in practice it suppresses the burst of contact events
    /// from a single physical interaction.
    pub cooldown_seconds: f32,
}

impl Default for DamageTuning {
    fn default() -> Self {
        Self {
            contact_damage: 10.0,
            cooldown_seconds: 0.001,
        }
    }
}

impl DamageTuning {
    /// Apply overrides from the level file's tuning block.
    pub fn apply_overrides(&mut self, tuning: &TuningDef) {
        if let Some(contact_damage) = tuning.contact_damage {
            self.contact_damage = contact_damage;
        }
        if let Some(cooldown) = tuning.contact_cooldown_seconds {
            self.cooldown_seconds = cooldown;
        }
    }
}

/// One-shot latch guaranteeing the terminal game-over sequence is issued
/// exactly once, regardless of which contact path observed the death.
#[derive(Resource, Debug, Default)]
pub struct GameOverLatch {
    triggered: bool,
}

impl GameOverLatch {
    /// Returns true the first time, false on every later call.
    pub fn try_trigger(&mut self) -> bool {
        if self.triggered {
            false
        } else {
            self.triggered = true;
            true
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}
