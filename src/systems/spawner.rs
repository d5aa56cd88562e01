//! Timed spawn/despawn pool systems.
//!
//! # Behavior
//!
//! - [`periodic_spawn_system`] accumulates time and emits at most one item per
//!   tick at the spawner origin, moving along the configured direction
//! - [`periodic_despawn_system`] destroys items whose death time has strictly
//!   passed, oldest first, stopping at the first live item
//! - [`toggle_slot_system`] alternately creates and destroys the single trigger
//!   volume instance owned by each [`ToggleSlot`]
//!
//! There is no catch-up: a long tick still yields one spawn (or one toggle) and
//! the timer restarts from zero.
//!
//! Destruction goes through `try_despawn`, so an item already removed by
//! someone else is silently skipped and fires no [`ItemDespawned`].

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::motion::LinearMotion;
use crate::components::spawner::{PeriodicSpawner, SpawnedBy, ToggleSlot};
use crate::components::tint::Tint;
use crate::components::transform::Transform;
use crate::components::trigger::{TriggerOccupancy, TriggerVolume};
use crate::events::spawner::{ItemDespawned, ItemSpawned, SlotToggled};
use crate::events::trigger::LayerMask;
use crate::resources::worldtime::WorldTime;

/// Spawn one item per elapsed interval.
///
/// # Ordering
///
/// Runs **before** [`periodic_despawn_system`] and the motion system, so a new
/// item moves on its spawn tick.
pub fn periodic_spawn_system(
    time: Res<WorldTime>,
    mut spawners: Query<(Entity, &mut PeriodicSpawner)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (spawner_entity, mut spawner) in spawners.iter_mut() {
        if !spawner.advance(dt) {
            continue;
        }
        let config = &spawner.config;
        let item = commands
            .spawn((
                Transform::from_translation(config.origin),
                LinearMotion {
                    direction: config.direction,
                    speed: config.speed,
                },
                Tint::new(config.item_color),
                SpawnedBy(spawner_entity),
            ))
            .id();
        spawner.track(item, time.elapsed);
        debug!(
            "spawner {:?} emitted {:?} ({} alive)",
            spawner_entity,
            item,
            spawner.active_items.len()
        );
        commands.trigger(ItemSpawned {
            spawner: spawner_entity,
            item,
        });
    }
}

/// Destroy every item whose lifetime ran out before this tick's time.
pub fn periodic_despawn_system(
    time: Res<WorldTime>,
    mut spawners: Query<(Entity, &mut PeriodicSpawner)>,
    mut commands: Commands,
) {
    for (spawner_entity, mut spawner) in spawners.iter_mut() {
        for item in spawner.drain_expired(time.elapsed) {
            let Ok(mut item_commands) = commands.get_entity(item) else {
                debug!("spawner {:?}: item {:?} already gone", spawner_entity, item);
                continue;
            };
            item_commands.try_despawn();
            commands.trigger(ItemDespawned {
                spawner: spawner_entity,
                item,
            });
        }
    }
}

/// Flip each toggle slot whose interval elapsed.
///
/// On deletion the slot remembers the occupancy of the outgoing instance
/// according to its carry-over policy. On creation the new instance resumes
/// from whatever was remembered.
pub fn toggle_slot_system(
    time: Res<WorldTime>,
    mut slots: Query<(Entity, &mut ToggleSlot)>,
    occupancies: Query<&TriggerOccupancy>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (slot_entity, mut slot) in slots.iter_mut() {
        if !slot.advance(dt) {
            continue;
        }
        match slot.current.take() {
            Some(instance) => {
                let inside = occupancies
                    .get(instance)
                    .map(|o| o.inside())
                    .unwrap_or(LayerMask::EMPTY);
                slot.remember(inside);
                if let Ok(mut instance_commands) = commands.get_entity(instance) {
                    instance_commands.try_despawn();
                }
                info!("slot {:?} deleted {:?}", slot_entity, instance);
                commands.trigger(SlotToggled {
                    slot: slot_entity,
                    instance: None,
                });
            }
            None => {
                let occupancy = TriggerOccupancy::resumed(slot.last_known);
                let instance = commands
                    .spawn((
                        Transform::from_translation(slot.position),
                        TriggerVolume::new(slot.layers),
                        occupancy,
                        slot.style,
                        Tint::new(slot.style.color_for(occupancy.occupied)),
                        SpawnedBy(slot_entity),
                    ))
                    .id();
                slot.current = Some(instance);
                info!(
                    "slot {:?} created {:?} (occupied: {})",
                    slot_entity, instance, occupancy.occupied
                );
                commands.trigger(SlotToggled {
                    slot: slot_entity,
                    instance: Some(instance),
                });
            }
        }
    }
}
