//! UI domain: player HUD health bar.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::Player;
use crate::ui::RefreshHud;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the HUD root container
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health bar fill element
#[derive(Component)]
pub struct HealthBarFill;

pub(crate) fn spawn_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HEALTHBAR_PADDING),
                top: Val::Px(HEALTHBAR_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            // Health bar fill
            parent.spawn((
                HealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });
}

/// Redraw the health bar when a refresh was requested.
pub(crate) fn refresh_health_bar(
    mut refreshes: MessageReader<RefreshHud>,
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    if refreshes.is_empty() {
        return;
    }
    refreshes.clear();

    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = health.percent();
        node.width = Val::Percent(percent * 100.0);

        // Color gradient: green -> yellow -> red
        let color = if percent > 0.5 {
            let t = (percent - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = percent * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
        bg_color.0 = color;
    }
}
