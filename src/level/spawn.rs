//! Level domain: geometry spawn from the level definition.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Obstacle;
use crate::content::{LevelConfig, ObstacleKind};
use crate::movement::{GameLayer, Ground};

const GROUND_THICKNESS: f32 = 64.0;
/// Extra runway on either side of the level span so the player never runs
/// off the strip before the end check fires.
const GROUND_MARGIN: f32 = 2000.0;

pub(crate) fn spawn_level(mut commands: Commands, config: Res<LevelConfig>) {
    let level = &config.level;

    let ground_length = (level.end_x - level.start_position.0) + 2.0 * GROUND_MARGIN;
    let ground_center_x = (level.start_position.0 + level.end_x) / 2.0;

    // Ground strip
    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.25, 0.22, 0.2),
            custom_size: Some(Vec2::new(ground_length, GROUND_THICKNESS)),
            ..default()
        },
        Transform::from_xyz(
            ground_center_x,
            level.ground_y - GROUND_THICKNESS / 2.0,
            0.0,
        ),
        RigidBody::Static,
        Collider::rectangle(ground_length, GROUND_THICKNESS),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));

    // Obstacles
    for def in &level.obstacles {
        let size = Vec2::new(def.size.0, def.size.1);
        let mut entity = commands.spawn((
            Obstacle,
            Transform::from_xyz(def.x, def.y, 0.0),
            Collider::rectangle(size.x, size.y),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]),
        ));

        match def.kind {
            ObstacleKind::Solid => {
                entity.insert((
                    RigidBody::Static,
                    Sprite {
                        color: Color::srgb(0.7, 0.25, 0.2),
                        custom_size: Some(size),
                        ..default()
                    },
                ));
            }
            ObstacleKind::Trigger => {
                entity.insert((
                    RigidBody::Static,
                    Sensor,
                    Sprite {
                        color: Color::srgba(0.9, 0.5, 0.1, 0.4),
                        custom_size: Some(size),
                        ..default()
                    },
                ));
            }
        }
    }

    info!(
        "Spawned level '{}' with {} obstacles, end at x={:.1}",
        level.id,
        level.obstacles.len(),
        level.end_x
    );
}
