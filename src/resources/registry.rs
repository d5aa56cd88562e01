//! Fixture name registry.
//!
//! [`FixtureRegistry`] maps catalog names to the entities spawned for them.
//! Replay scripts and the soak generator address fixtures by name and resolve
//! them here. Entries are not removed when an entity is destroyed; a stale
//! entry resolves to a handle whose signals are ignored by the systems.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::error::FixtureError;

/// Kind of fixture a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    InputCube,
    TriggerVolume,
    Spawner,
    ToggleSlot,
    Prop,
}

#[derive(Debug, Clone, Default, Resource)]
pub struct FixtureRegistry {
    entries: FxHashMap<String, (FixtureKind, Entity)>,
}

impl FixtureRegistry {
    /// Register a fixture. Names must be unique.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: FixtureKind,
        entity: Entity,
    ) -> Result<(), FixtureError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(FixtureError::DuplicateName(name));
        }
        self.entries.insert(name, (kind, entity));
        Ok(())
    }

    /// Get an entity by name.
    pub fn get(&self, name: &str) -> Option<Entity> {
        self.entries.get(name).map(|(_, e)| *e)
    }

    /// Get an entity by name, only if it is of the given kind.
    pub fn get_kind(&self, name: &str, kind: FixtureKind) -> Option<Entity> {
        match self.entries.get(name) {
            Some((k, e)) if *k == kind => Some(*e),
            _ => None,
        }
    }

    /// Entities of one kind, sorted by name for deterministic iteration.
    pub fn of_kind(&self, kind: FixtureKind) -> Vec<(String, Entity)> {
        let mut out: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(name, (_, e))| (name.clone(), *e))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_register_and_lookup() {
        let mut world = World::new();
        let cube = world.spawn_empty().id();
        let volume = world.spawn_empty().id();
        let mut registry = FixtureRegistry::default();
        registry.register("cube", FixtureKind::InputCube, cube).unwrap();
        registry
            .register("zone", FixtureKind::TriggerVolume, volume)
            .unwrap();

        assert_eq!(registry.get("cube"), Some(cube));
        assert_eq!(registry.get_kind("cube", FixtureKind::InputCube), Some(cube));
        assert_eq!(registry.get_kind("cube", FixtureKind::TriggerVolume), None);
        assert_eq!(registry.get("missing"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut registry = FixtureRegistry::default();
        registry.register("a", FixtureKind::Prop, e).unwrap();
        let err = registry.register("a", FixtureKind::Prop, e).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateName(n) if n == "a"));
    }

    #[test]
    fn test_of_kind_is_sorted() {
        let mut world = World::new();
        let mut registry = FixtureRegistry::default();
        for name in ["c", "a", "b"] {
            let e = world.spawn_empty().id();
            registry.register(name, FixtureKind::InputCube, e).unwrap();
        }
        let names: Vec<_> = registry
            .of_kind(FixtureKind::InputCube)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
