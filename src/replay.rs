//! Deterministic signal drivers.
//!
//! - [`ReplayScript`] – a JSON list of per-tick signal frames addressing
//!   fixtures by catalog name
//! - [`SoakGenerator`] – seeded random signals for long unattended runs
//!
//! Both produce a [`FrameEvents`] snapshot per tick, exactly like a live host
//! would. Names resolve through the
//! [`FixtureRegistry`](crate::resources::registry::FixtureRegistry); a toggle
//! slot name resolves to its current instance. Unknown names are skipped with
//! a warning.
//!
//! # Script format
//!
//! ```json
//! {
//!   "frames": [
//!     { "tick": 0, "action_down": [{ "action": "jump" }] },
//!     { "tick": 1, "hover_enter": ["jump_cube"],
//!       "trigger_enter": [{ "volume": "player_zone", "layer": "player" }] },
//!     { "tick": 4, "action_up": [{ "action": "jump", "target": "jump_cube" }] }
//!   ]
//! }
//! ```
//!
//! `tick` counts from zero: frame `n` feeds the `n`-th call to
//! [`BehaviorScheduler::tick`](crate::tick::BehaviorScheduler::tick).

use std::path::Path;

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::spawner::ToggleSlot;
use crate::components::trigger::{SolidOverlap, TriggerVolume};
use crate::error::FixtureError;
use crate::events::input::ActionId;
use crate::events::trigger::{CollisionLayer, LayerMask};
use crate::resources::frameevents::{ActionSignal, FrameEvents, TriggerSignal};
use crate::resources::registry::{FixtureKind, FixtureRegistry};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionRef {
    pub action: ActionId,
    /// Cube name; absent for a global (keyboard) action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TriggerRef {
    pub volume: String,
    pub layer: CollisionLayer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ReplayFrame {
    pub tick: u64,
    pub action_down: Vec<ActionRef>,
    pub action_up: Vec<ActionRef>,
    pub hover_enter: Vec<String>,
    pub hover_leave: Vec<String>,
    pub trigger_enter: Vec<TriggerRef>,
    pub trigger_exit: Vec<TriggerRef>,
    pub trigger_stay: Vec<TriggerRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ReplayScript {
    pub frames: Vec<ReplayFrame>,
}

/// Resolve a fixture name to the entity that should receive signals.
fn resolve(world: &World, name: &str) -> Option<Entity> {
    let registry = world.get_resource::<FixtureRegistry>()?;
    let Some(entity) = registry.get(name) else {
        warn!("replay: unknown fixture `{}`", name);
        return None;
    };
    if registry.get_kind(name, FixtureKind::ToggleSlot).is_some() {
        return world.get::<ToggleSlot>(entity).and_then(|slot| slot.current);
    }
    Some(entity)
}

fn resolve_action(world: &World, action: &ActionRef) -> Option<ActionSignal> {
    let target = match &action.target {
        Some(name) => Some(resolve(world, name)?),
        None => None,
    };
    Some(ActionSignal {
        action: action.action,
        target,
    })
}

fn resolve_trigger(world: &World, trigger: &TriggerRef) -> Option<TriggerSignal> {
    Some(TriggerSignal {
        volume: resolve(world, &trigger.volume)?,
        layer: trigger.layer,
    })
}

impl ReplayScript {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Highest tick any frame refers to.
    pub fn last_tick(&self) -> Option<u64> {
        self.frames.iter().map(|f| f.tick).max()
    }

    /// Build the snapshot for `tick`. Frames sharing a tick are merged in file
    /// order.
    pub fn events_for(&self, tick: u64, world: &World) -> FrameEvents {
        let mut events = FrameEvents::default();
        for frame in self.frames.iter().filter(|f| f.tick == tick) {
            events
                .action_down
                .extend(frame.action_down.iter().filter_map(|a| resolve_action(world, a)));
            events
                .action_up
                .extend(frame.action_up.iter().filter_map(|a| resolve_action(world, a)));
            events
                .hover_enter
                .extend(frame.hover_enter.iter().filter_map(|n| resolve(world, n)));
            events
                .hover_leave
                .extend(frame.hover_leave.iter().filter_map(|n| resolve(world, n)));
            events
                .trigger_enter
                .extend(frame.trigger_enter.iter().filter_map(|t| resolve_trigger(world, t)));
            events
                .trigger_exit
                .extend(frame.trigger_exit.iter().filter_map(|t| resolve_trigger(world, t)));
            events
                .trigger_stay
                .extend(frame.trigger_stay.iter().filter_map(|t| resolve_trigger(world, t)));
        }
        events
    }
}

/// Seeded random signal source.
///
/// The generator plays the part of the physics host: it remembers which
/// layers it has sent into each volume so that it reports Stay for them, and
/// it never sends Enter into a volume marked [`SolidOverlap`]. Layers are drawn
/// from the full set, so the volumes' filters get exercised too.
pub struct SoakGenerator {
    rng: Rng,
    cubes: Vec<Entity>,
    volumes: Vec<Entity>,
    slots: Vec<Entity>,
    inside: FxHashMap<Entity, LayerMask>,
}

impl SoakGenerator {
    /// Snapshot the fixtures registered in `world` and seed the generator.
    pub fn new(seed: u64, world: &World) -> Self {
        let (cubes, volumes, slots) = match world.get_resource::<FixtureRegistry>() {
            Some(registry) => {
                let entities = |kind| {
                    registry
                        .of_kind(kind)
                        .into_iter()
                        .map(|(_, e)| e)
                        .collect::<Vec<_>>()
                };
                (
                    entities(FixtureKind::InputCube),
                    entities(FixtureKind::TriggerVolume)
                        .into_iter()
                        .filter(|e| world.get::<SolidOverlap>(*e).is_none())
                        .collect(),
                    entities(FixtureKind::ToggleSlot),
                )
            }
            None => (Vec::new(), Vec::new(), Vec::new()),
        };
        Self {
            rng: Rng::with_seed(seed),
            cubes,
            volumes,
            slots,
            inside: FxHashMap::default(),
        }
    }

    fn action(&mut self) -> ActionId {
        ActionId::ALL[self.rng.usize(..ActionId::ALL.len())]
    }

    fn layer(&mut self) -> CollisionLayer {
        CollisionLayer::ALL[self.rng.usize(..CollisionLayer::ALL.len())]
    }

    fn target(&mut self) -> Option<Entity> {
        if self.cubes.is_empty() || self.rng.bool() {
            return None;
        }
        Some(self.cubes[self.rng.usize(..self.cubes.len())])
    }

    fn action_signal(&mut self) -> ActionSignal {
        ActionSignal {
            action: self.action(),
            target: self.target(),
        }
    }

    /// Generate the snapshot for the next tick.
    pub fn next_events(&mut self, world: &World) -> FrameEvents {
        let mut events = FrameEvents::default();

        if self.rng.f32() < 0.1 {
            let signal = self.action_signal();
            events.action_down.push(signal);
        }
        if self.rng.f32() < 0.1 {
            let signal = self.action_signal();
            events.action_up.push(signal);
        }
        if !self.cubes.is_empty() {
            if self.rng.f32() < 0.05 {
                let cube = self.cubes[self.rng.usize(..self.cubes.len())];
                events.hover_enter.push(cube);
            }
            if self.rng.f32() < 0.05 {
                let cube = self.cubes[self.rng.usize(..self.cubes.len())];
                events.hover_leave.push(cube);
            }
        }

        let mut volumes = self.volumes.clone();
        volumes.extend(
            self.slots
                .iter()
                .filter_map(|slot| world.get::<ToggleSlot>(*slot).and_then(|s| s.current)),
        );
        self.inside
            .retain(|volume, _| world.get::<TriggerVolume>(*volume).is_some());

        for volume in volumes {
            let mut inside = self.inside.get(&volume).copied().unwrap_or(LayerMask::EMPTY);
            if self.rng.f32() < 0.05 {
                let layer = self.layer();
                inside = inside.with(layer);
                events.trigger_enter.push(TriggerSignal { volume, layer });
            }
            if self.rng.f32() < 0.05 {
                let layer = self.layer();
                inside = inside.without(layer);
                events.trigger_exit.push(TriggerSignal { volume, layer });
            }
            for layer in inside.iter() {
                events.trigger_stay.push(TriggerSignal { volume, layer });
            }
            self.inside.insert(volume, inside);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::benchconfig::BenchConfig;
    use crate::scene::{SceneDescription, spawn_scene};

    fn builtin_world() -> World {
        let mut world = World::new();
        spawn_scene(&mut world, &SceneDescription::builtin(), &BenchConfig::new()).unwrap();
        world
    }

    #[test]
    fn test_resolves_names_and_skips_unknown() {
        let world = builtin_world();
        let script = ReplayScript::from_json(
            r#"{ "frames": [
                { "tick": 2,
                  "action_down": [{ "action": "jump", "target": "jump_cube" },
                                  { "action": "jump", "target": "nope" },
                                  { "action": "reload" }],
                  "trigger_enter": [{ "volume": "player_zone", "layer": "player" },
                                    { "volume": "missing", "layer": "player" }] },
                { "tick": 2, "hover_enter": ["jump_cube"] }
            ] }"#,
        )
        .unwrap();

        let registry = world.resource::<FixtureRegistry>();
        let jump_cube = registry.get("jump_cube").unwrap();
        let zone = registry.get("player_zone").unwrap();

        assert!(script.events_for(0, &world).is_empty());
        let events = script.events_for(2, &world);
        assert_eq!(events.action_down.len(), 2);
        assert_eq!(events.action_down[0].target, Some(jump_cube));
        assert_eq!(events.action_down[1].target, None);
        assert_eq!(events.trigger_enter.len(), 1);
        assert_eq!(events.trigger_enter[0].volume, zone);
        assert_eq!(events.hover_enter, vec![jump_cube]);
        assert_eq!(script.last_tick(), Some(2));
    }

    #[test]
    fn test_absent_toggle_slot_instance_is_skipped() {
        let world = builtin_world();
        let script = ReplayScript::from_json(
            r#"{ "frames": [{ "tick": 0,
                "trigger_enter": [{ "volume": "blinking_zone", "layer": "player" }] }] }"#,
        )
        .unwrap();
        assert!(script.events_for(0, &world).trigger_enter.is_empty());
    }

    #[test]
    fn test_soak_is_deterministic_per_seed() {
        let world = builtin_world();
        let mut a = SoakGenerator::new(7, &world);
        let mut b = SoakGenerator::new(7, &world);
        for _ in 0..200 {
            assert_eq!(a.next_events(&world), b.next_events(&world));
        }
    }

    #[test]
    fn test_soak_never_enters_blocked_volumes() {
        let world = builtin_world();
        let blocked = world.resource::<FixtureRegistry>().get("blocked_zone").unwrap();
        let mut soak = SoakGenerator::new(1, &world);
        for _ in 0..500 {
            let events = soak.next_events(&world);
            assert!(events.trigger_enter.iter().all(|s| s.volume != blocked));
        }
    }
}
