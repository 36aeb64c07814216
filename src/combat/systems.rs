//! Combat domain: obstacle contact reaction, damage, and death.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{ContactCooldown, Health, Obstacle};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::combat::resources::{DamageTuning, GameOverLatch};
use crate::movement::Player;
use crate::ui::{RefreshHud, RemoveViewports, TriggerGameOver};

pub(crate) fn tick_contact_cooldown(
    time: Res<Time>,
    mut query: Query<&mut ContactCooldown>,
) {
    let dt = time.delta_secs();
    for mut cooldown in &mut query {
        cooldown.tick(dt);
    }
}

/// Single reaction routine for obstacle contact. avian delivers both solid
/// hits and sensor overlaps as `CollisionStart`, so one reader covers the
/// two entry points the original handled separately.
pub(crate) fn detect_obstacle_contact(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    tuning: Res<DamageTuning>,
    mut player_query: Query<(Entity, &mut ContactCooldown), With<Player>>,
    obstacle_query: Query<(), With<Obstacle>>,
) {
    let Ok((player, mut cooldown)) = player_query.single_mut() else {
        return;
    };

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (self_entity, other_entity) in pairs {
            if self_entity != player {
                continue;
            }

            // Only entities tagged as obstacles matter
            if obstacle_query.get(other_entity).is_err() {
                continue;
            }

            if cooldown.is_active() {
                continue;
            }

            cooldown.arm(tuning.cooldown_seconds);
            damage_events.write(DamageEvent {
                target: player,
                amount: tuning.contact_damage,
            });
            debug!("Obstacle contact with {:?}", other_entity);
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut hud_refreshes: MessageWriter<RefreshHud>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        if let Ok(mut health) = query.get_mut(event.target) {
            health.take_damage(event.amount);
            hud_refreshes.write(RefreshHud);
            info!("Damage: health now {:.0}/{:.0}", health.current, health.max);

            if health.is_dead() {
                death_events.write(DeathEvent {
                    entity: event.target,
                });
            }
        }
    }
}

pub(crate) fn process_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut latch: ResMut<GameOverLatch>,
    mut remove_viewports: MessageWriter<RemoveViewports>,
    mut game_over: MessageWriter<TriggerGameOver>,
) {
    for event in death_events.read() {
        if !latch.try_trigger() {
            continue;
        }

        remove_viewports.write(RemoveViewports);
        game_over.write(TriggerGameOver);
        commands.entity(event.entity).despawn();
        info!("Player destroyed, game over");
    }
}
