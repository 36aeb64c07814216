//! UI domain: game-over and level-complete overlays, HUD teardown.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud::HudRoot;
use crate::ui::{RemoveViewports, TriggerGameOver};

/// Marker for full-screen overlays
#[derive(Component)]
pub struct OverlayUI;

/// Tear down the in-game HUD when requested.
pub(crate) fn handle_remove_viewports(
    mut commands: Commands,
    mut requests: MessageReader<RemoveViewports>,
    hud_query: Query<Entity, With<HudRoot>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    for entity in &hud_query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_trigger_game_over(
    mut requests: MessageReader<TriggerGameOver>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    game_state.set(GameState::GameOver);
}

pub(crate) fn spawn_game_over_overlay(
    mut commands: Commands,
    existing_overlay: Query<Entity, With<OverlayUI>>,
) {
    if existing_overlay.is_empty() {
        spawn_overlay(
            &mut commands,
            "GAME OVER",
            Color::srgb(0.8, 0.15, 0.15),
            "The robot didn't make it.",
        );
    }
}

pub(crate) fn spawn_level_complete_overlay(
    mut commands: Commands,
    existing_overlay: Query<Entity, With<OverlayUI>>,
) {
    if existing_overlay.is_empty() {
        spawn_overlay(
            &mut commands,
            "LEVEL COMPLETE",
            Color::srgb(0.85, 0.75, 0.2),
            "End of the line. Nice run.",
        );
    }
}

fn spawn_overlay(commands: &mut Commands, title: &str, title_color: Color, subtext: &str) {
    // Full screen dark overlay
    commands
        .spawn((
            OverlayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            // High z-index to be on top of everything
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtext),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}
