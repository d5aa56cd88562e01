//! Spawn pool lifecycle events.
//!
//! Triggered by the spawner systems when entities are created or destroyed:
//! - [`ItemSpawned`] / [`ItemDespawned`] for periodic spawner items
//! - [`SlotToggled`] for single-slot toggling fixtures
//!
//! # Related
//!
//! - [`crate::systems::spawner`] – the systems that emit these events

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpawned {
    pub spawner: Entity,
    pub item: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDespawned {
    pub spawner: Entity,
    pub item: Entity,
}

/// `instance` is the freshly created entity, or `None` after a deletion.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotToggled {
    pub slot: Entity,
    pub instance: Option<Entity>,
}
