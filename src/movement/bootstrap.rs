//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{ContactCooldown, Health, PLAYER_START_HEALTH};
use crate::content::LevelConfig;
use crate::movement::{AutoRun, GameLayer, MovementState, MovementTuning, Player};
use crate::sprites::AnimationController;

/// Capsule dimensions carried over from the original collision setup
/// (half height 96, radius 40).
pub(crate) const PLAYER_HALF_HEIGHT: f32 = 96.0;
const PLAYER_CAPSULE_RADIUS: f32 = 40.0;
const PLAYER_CAPSULE_LENGTH: f32 = 2.0 * (PLAYER_HALF_HEIGHT - PLAYER_CAPSULE_RADIUS);

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<LevelConfig>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let (x, y) = config.level.start_position;
    info!("Spawning player at ({:.1}, {:.1})", x, y);

    commands.spawn((
        // Identity & movement
        (
            Player,
            AutoRun::default(),
            MovementState::default(),
            AnimationController::default(),
        ),
        // Damage tracking
        (Health::new(PLAYER_START_HEALTH), ContactCooldown::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.85, 0.88, 0.95),
            custom_size: Some(Vec2::new(
                PLAYER_CAPSULE_RADIUS * 2.0,
                PLAYER_HALF_HEIGHT * 2.0,
            )),
            ..default()
        },
        Transform::from_xyz(x, y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_CAPSULE_RADIUS, PLAYER_CAPSULE_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(tuning.ground_friction),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Obstacle],
            ),
        ),
    ));
}
