//! Run summaries.
//!
//! [`summarize`] walks the fixture registry and captures the observable state
//! of every behavior fixture. [`EventTally`] counts the observer events fired
//! during a run once [`install_tally`] has registered its observers.

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::inputcube::{HoverState, InputCube};
use crate::components::spawner::{PeriodicSpawner, ToggleSlot};
use crate::components::trigger::TriggerOccupancy;
use crate::events::input::{ActionId, ActionPressed, ActionReleased};
use crate::events::spawner::{ItemDespawned, ItemSpawned, SlotToggled};
use crate::events::trigger::{CollisionLayer, TriggerEntered, TriggerExited};
use crate::resources::registry::{FixtureKind, FixtureRegistry};
use crate::resources::worldtime::WorldTime;

#[derive(Resource, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    pub actions_pressed: u64,
    pub actions_released: u64,
    pub triggers_entered: u64,
    pub triggers_exited: u64,
    pub items_spawned: u64,
    pub items_despawned: u64,
    pub slots_toggled: u64,
}

/// Register observers that count every behavior event into [`EventTally`].
pub fn install_tally(world: &mut World) {
    world.init_resource::<EventTally>();
    world.add_observer(|_: On<ActionPressed>, mut tally: ResMut<EventTally>| {
        tally.actions_pressed += 1;
    });
    world.add_observer(|_: On<ActionReleased>, mut tally: ResMut<EventTally>| {
        tally.actions_released += 1;
    });
    world.add_observer(|_: On<TriggerEntered>, mut tally: ResMut<EventTally>| {
        tally.triggers_entered += 1;
    });
    world.add_observer(|_: On<TriggerExited>, mut tally: ResMut<EventTally>| {
        tally.triggers_exited += 1;
    });
    world.add_observer(|_: On<ItemSpawned>, mut tally: ResMut<EventTally>| {
        tally.items_spawned += 1;
    });
    world.add_observer(|_: On<ItemDespawned>, mut tally: ResMut<EventTally>| {
        tally.items_despawned += 1;
    });
    world.add_observer(|_: On<SlotToggled>, mut tally: ResMut<EventTally>| {
        tally.slots_toggled += 1;
    });
    world.flush();
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CubeSummary {
    pub name: String,
    pub pressed: bool,
    pub active_action: Option<ActionId>,
    pub hovered: bool,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VolumeSummary {
    pub name: String,
    pub occupied: bool,
    pub stay_ticks: u32,
    pub inside: Vec<CollisionLayer>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpawnerSummary {
    pub name: String,
    pub alive: usize,
    pub spawned_total: u64,
    pub despawned_total: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SlotSummary {
    pub name: String,
    pub present: bool,
    pub occupied: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BehaviorSummary {
    pub ticks: u64,
    pub elapsed: f32,
    pub cubes: Vec<CubeSummary>,
    pub volumes: Vec<VolumeSummary>,
    pub spawners: Vec<SpawnerSummary>,
    pub slots: Vec<SlotSummary>,
    pub events: EventTally,
}

impl BehaviorSummary {
    pub fn occupied_volumes(&self) -> usize {
        self.volumes.iter().filter(|v| v.occupied).count()
    }

    pub fn pressed_cubes(&self) -> usize {
        self.cubes.iter().filter(|c| c.pressed).count()
    }

    pub fn alive_items(&self) -> usize {
        self.spawners.iter().map(|s| s.alive).sum()
    }
}

/// Capture the state of every registered fixture, sorted by name.
pub fn summarize(world: &World) -> BehaviorSummary {
    let time = world.get_resource::<WorldTime>().copied().unwrap_or_default();
    let events = world.get_resource::<EventTally>().copied().unwrap_or_default();
    let Some(registry) = world.get_resource::<FixtureRegistry>() else {
        return BehaviorSummary {
            ticks: time.frame_count,
            elapsed: time.elapsed,
            cubes: Vec::new(),
            volumes: Vec::new(),
            spawners: Vec::new(),
            slots: Vec::new(),
            events,
        };
    };

    let cubes = registry
        .of_kind(FixtureKind::InputCube)
        .into_iter()
        .filter_map(|(name, e)| {
            let cube = world.get::<InputCube>(e)?;
            let hover = world.get::<HoverState>(e)?;
            Some(CubeSummary {
                name,
                pressed: cube.pressed,
                active_action: cube.active_binding().map(|b| b.action),
                hovered: hover.hovered,
                label: hover.last_action_label.clone(),
            })
        })
        .collect();

    let volumes = registry
        .of_kind(FixtureKind::TriggerVolume)
        .into_iter()
        .filter_map(|(name, e)| {
            let occupancy = world.get::<TriggerOccupancy>(e)?;
            Some(VolumeSummary {
                name,
                occupied: occupancy.occupied,
                stay_ticks: occupancy.stay_ticks,
                inside: occupancy.inside().iter().collect(),
            })
        })
        .collect();

    let spawners = registry
        .of_kind(FixtureKind::Spawner)
        .into_iter()
        .filter_map(|(name, e)| {
            let spawner = world.get::<PeriodicSpawner>(e)?;
            Some(SpawnerSummary {
                name,
                alive: spawner.active_items.len(),
                spawned_total: spawner.spawned_total,
                despawned_total: spawner.despawned_total,
            })
        })
        .collect();

    let slots = registry
        .of_kind(FixtureKind::ToggleSlot)
        .into_iter()
        .filter_map(|(name, e)| {
            let slot = world.get::<ToggleSlot>(e)?;
            let occupied = slot
                .current
                .and_then(|instance| world.get::<TriggerOccupancy>(instance))
                .is_some_and(|o| o.occupied);
            Some(SlotSummary {
                name,
                present: slot.current.is_some(),
                occupied,
            })
        })
        .collect();

    BehaviorSummary {
        ticks: time.frame_count,
        elapsed: time.elapsed,
        cubes,
        volumes,
        spawners,
        slots,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::benchconfig::BenchConfig;
    use crate::resources::frameevents::FrameEvents;
    use crate::scene::{SceneDescription, spawn_scene};
    use crate::tick::BehaviorScheduler;

    #[test]
    fn test_summary_reflects_state_and_events() {
        let mut world = World::new();
        spawn_scene(&mut world, &SceneDescription::builtin(), &BenchConfig::new()).unwrap();
        install_tally(&mut world);
        let mut scheduler = BehaviorScheduler::new(&mut world).unwrap();
        let zone = world.resource::<FixtureRegistry>().get("player_zone").unwrap();

        scheduler.tick(
            &mut world,
            0.5,
            FrameEvents::default()
                .with_action_down(ActionId::Jump)
                .with_trigger_enter(zone, CollisionLayer::Player),
        );
        scheduler.tick(
            &mut world,
            0.5,
            FrameEvents::default().with_trigger_stay(zone, CollisionLayer::Player),
        );

        let summary = summarize(&world);
        assert_eq!(summary.ticks, 2);
        assert_eq!(summary.elapsed, 1.0);

        let jump = summary.cubes.iter().find(|c| c.name == "jump_cube").unwrap();
        assert!(jump.pressed);
        assert_eq!(jump.active_action, Some(ActionId::Jump));
        assert_eq!(jump.label, "Pressed: Jump");
        // the master cube reacts to every action
        assert_eq!(summary.pressed_cubes(), 2);

        let player_zone = summary.volumes.iter().find(|v| v.name == "player_zone").unwrap();
        assert!(player_zone.occupied);
        assert_eq!(player_zone.stay_ticks, 1);
        assert_eq!(player_zone.inside, vec![CollisionLayer::Player]);
        assert_eq!(summary.occupied_volumes(), 1);

        assert_eq!(summary.spawners[0].spawned_total, 1);
        assert_eq!(summary.events.actions_pressed, 2);
        assert_eq!(summary.events.triggers_entered, 1);
        assert_eq!(summary.events.items_spawned, 1);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["ticks"], 2);
    }
}
