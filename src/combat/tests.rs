//! Combat domain: tests for health, the contact cooldown, and the
//! game-over latch.

use super::{ContactCooldown, DamageTuning, GameOverLatch, Health, PLAYER_START_HEALTH};
use crate::content::TuningDef;

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_single_hit_removes_exactly_ten() {
    let tuning = DamageTuning::default();
    let mut health = Health::new(PLAYER_START_HEALTH);

    let dealt = health.take_damage(tuning.contact_damage);
    assert_eq!(dealt, 10.0);
    assert_eq!(health.current, 90.0);
}

#[test]
fn test_health_floors_at_zero() {
    let mut health = Health::new(PLAYER_START_HEALTH);
    health.current = 5.0;

    let dealt = health.take_damage(10.0);
    assert_eq!(dealt, 5.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_health_is_monotonically_non_increasing() {
    let mut health = Health::new(PLAYER_START_HEALTH);
    let mut previous = health.current;

    for _ in 0..20 {
        health.take_damage(10.0);
        assert!(health.current <= previous);
        assert!(health.current <= PLAYER_START_HEALTH);
        previous = health.current;
    }
    assert_eq!(health.current, 0.0);
}

#[test]
fn test_exact_kill_hit_reaches_zero() {
    let mut health = Health::new(PLAYER_START_HEALTH);
    health.current = 10.0;

    health.take_damage(10.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_health_percent() {
    let mut health = Health::new(PLAYER_START_HEALTH);
    assert_eq!(health.percent(), 1.0);
    health.take_damage(40.0);
    assert_eq!(health.percent(), 0.6);
}

// -----------------------------------------------------------------------------
// Contact cooldown
// -----------------------------------------------------------------------------

#[test]
fn test_cooldown_arms_and_expires() {
    let tuning = DamageTuning::default();
    let mut cooldown = ContactCooldown::default();
    assert!(!cooldown.is_active());

    cooldown.arm(tuning.cooldown_seconds);
    assert!(cooldown.is_active());

    // One 16 ms frame is well past the 1 ms debounce window.
    cooldown.tick(0.016);
    assert!(!cooldown.is_active());
}

#[test]
fn test_cooldown_suppresses_damage_within_window() {
    let tuning = DamageTuning::default();
    let mut health = Health::new(PLAYER_START_HEALTH);
    let mut cooldown = ContactCooldown::default();

    // Burst of contact events from one physical interaction: only the first
    // eligible contact deals damage.
    for _ in 0..5 {
        if !cooldown.is_active() {
            cooldown.arm(tuning.cooldown_seconds);
            health.take_damage(tuning.contact_damage);
        }
    }
    assert_eq!(health.current, 90.0);

    // After the window expires, the next contact is eligible again.
    cooldown.tick(0.016);
    assert!(!cooldown.is_active());
    cooldown.arm(tuning.cooldown_seconds);
    health.take_damage(tuning.contact_damage);
    assert_eq!(health.current, 80.0);
}

#[test]
fn test_cooldown_tick_is_noop_when_inactive() {
    let mut cooldown = ContactCooldown::default();
    cooldown.tick(1.0);
    assert_eq!(cooldown.timer, 0.0);
}

// -----------------------------------------------------------------------------
// Game-over latch
// -----------------------------------------------------------------------------

#[test]
fn test_game_over_issued_exactly_once() {
    let mut latch = GameOverLatch::default();
    assert!(!latch.is_triggered());

    // Both contact paths may observe the death in the same frame; only the
    // first issuance goes through.
    assert!(latch.try_trigger());
    assert!(!latch.try_trigger());
    assert!(!latch.try_trigger());
    assert!(latch.is_triggered());
}

// -----------------------------------------------------------------------------
// Tuning
// -----------------------------------------------------------------------------

#[test]
fn test_damage_tuning_defaults() {
    let tuning = DamageTuning::default();
    assert_eq!(tuning.contact_damage, 10.0);
    assert_eq!(tuning.cooldown_seconds, 0.001);
}

#[test]
fn test_damage_tuning_overrides() {
    let mut tuning = DamageTuning::default();
    tuning.apply_overrides(&TuningDef {
        run_speed: Some(400.0), // movement-side field, ignored here
        jump_velocity: None,
        contact_damage: Some(25.0),
        contact_cooldown_seconds: Some(0.25),
    });

    assert_eq!(tuning.contact_damage, 25.0);
    assert_eq!(tuning.cooldown_seconds, 0.25);
}
