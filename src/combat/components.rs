//! Combat domain: components for damage tracking.

use bevy::prelude::*;

pub const PLAYER_START_HEALTH: f32 = 100.0;

/// Health for the player. Starts at 100, floored at zero, and only ever
/// decreases; there is no heal path.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Debounce against multiple contact events from one physical interaction.
/// While armed, further obstacle contacts deal no damage. The timer is a
/// plain countdown ticked by the frame loop and dies with its entity.
#[derive(Component, Debug, Default)]
pub struct ContactCooldown {
    pub timer: f32,
}

impl ContactCooldown {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    pub fn arm(&mut self, seconds: f32) {
        self.timer = seconds;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }
    }
}

/// Tagged world entity whose contact damages the player.
#[derive(Component, Debug)]
pub struct Obstacle;
