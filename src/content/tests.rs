//! Content domain: tests for level parsing and validation.

use super::data::{LevelDef, LevelFile, ObstacleDef, ObstacleKind};
use super::validation::validate_level;

fn sample_level() -> LevelDef {
    LevelDef {
        id: "test_level".to_string(),
        start_position: (-2302.0, -445.0),
        end_x: 14788.0,
        ground_y: -541.0,
        obstacles: vec![ObstacleDef {
            x: 1200.0,
            y: -493.0,
            size: (48.0, 96.0),
            kind: ObstacleKind::Solid,
        }],
        tuning: None,
    }
}

#[test]
fn test_parse_level_file() {
    let source = r#"(
        schema_version: 1,
        level: (
            id: "level_one",
            start_position: (-2302.0, -445.0),
            end_x: 14788.0,
            ground_y: -541.0,
            obstacles: [
                (x: 900.0, y: -493.0, size: (48.0, 96.0), kind: Solid),
                (x: 2400.0, y: -480.0, size: (64.0, 120.0), kind: Trigger),
            ],
            tuning: (
                contact_damage: 10.0,
            ),
        ),
    )"#;

    let options = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    let file: LevelFile = options.from_str(source).expect("level should parse");

    assert_eq!(file.schema_version, 1);
    assert_eq!(file.level.id, "level_one");
    assert_eq!(file.level.end_x, 14788.0);
    assert_eq!(file.level.obstacles.len(), 2);
    assert_eq!(file.level.obstacles[0].kind, ObstacleKind::Solid);
    assert_eq!(file.level.obstacles[1].kind, ObstacleKind::Trigger);

    let tuning = file.level.tuning.expect("tuning block should be present");
    assert_eq!(tuning.contact_damage, Some(10.0));
    assert_eq!(tuning.run_speed, None);
}

#[test]
fn test_default_level_matches_original_constants() {
    let level = LevelDef::default();
    assert_eq!(level.start_position.0, -2302.0);
    assert_eq!(level.end_x, 14788.0);
    assert!(validate_level(&level).is_empty());
}

#[test]
fn test_validate_accepts_sample_level() {
    assert!(validate_level(&sample_level()).is_empty());
}

#[test]
fn test_validate_rejects_end_before_start() {
    let mut level = sample_level();
    level.end_x = level.start_position.0 - 100.0;
    level.obstacles.clear();

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "end_x");
}

#[test]
fn test_validate_rejects_bad_obstacles() {
    let mut level = sample_level();
    level.obstacles.push(ObstacleDef {
        x: 500.0,
        y: -493.0,
        size: (0.0, 96.0),
        kind: ObstacleKind::Trigger,
    });
    level.obstacles.push(ObstacleDef {
        x: level.end_x + 1000.0,
        y: -493.0,
        size: (48.0, 96.0),
        kind: ObstacleKind::Solid,
    });

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.field == "obstacles"));
}
