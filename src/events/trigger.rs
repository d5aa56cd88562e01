//! Collision layers and trigger-volume callbacks.
//!
//! The collision layer reports which participant type crossed a volume
//! boundary. A volume filters layers with a [`LayerMask`]; every qualifying
//! participant type fires its own [`TriggerEntered`] / [`TriggerExited`]
//! while the volume keeps a single `occupied` flag.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TriggerEntered>| {
//!     log::info!("{:?} entered by {:?}", trigger.event().volume, trigger.event().layer);
//! });
//! ```

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Participant type classification used by trigger filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionLayer {
    Player,
    Physics,
    Pointer,
}

impl CollisionLayer {
    pub const ALL: [CollisionLayer; 3] = [
        CollisionLayer::Player,
        CollisionLayer::Physics,
        CollisionLayer::Pointer,
    ];

    fn bit(self) -> u8 {
        match self {
            CollisionLayer::Player => 1,
            CollisionLayer::Physics => 1 << 1,
            CollisionLayer::Pointer => 1 << 2,
        }
    }
}

/// Small bit set of [`CollisionLayer`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayerMask(u8);

impl LayerMask {
    pub const EMPTY: LayerMask = LayerMask(0);

    pub fn of(layers: &[CollisionLayer]) -> Self {
        layers
            .iter()
            .fold(LayerMask::EMPTY, |mask, layer| mask.with(*layer))
    }
    pub fn with(self, layer: CollisionLayer) -> Self {
        LayerMask(self.0 | layer.bit())
    }
    pub fn without(self, layer: CollisionLayer) -> Self {
        LayerMask(self.0 & !layer.bit())
    }
    pub fn contains(self, layer: CollisionLayer) -> bool {
        self.0 & layer.bit() != 0
    }
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    pub fn iter(self) -> impl Iterator<Item = CollisionLayer> {
        CollisionLayer::ALL
            .into_iter()
            .filter(move |layer| self.contains(*layer))
    }
}

/// Triggered once per participant type entering a volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEntered {
    pub volume: Entity,
    pub layer: CollisionLayer,
}

/// Triggered once per participant type leaving a volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerExited {
    pub volume: Entity,
    pub layer: CollisionLayer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_set_operations() {
        let mask = LayerMask::of(&[CollisionLayer::Player, CollisionLayer::Physics]);
        assert!(mask.contains(CollisionLayer::Player));
        assert!(mask.contains(CollisionLayer::Physics));
        assert!(!mask.contains(CollisionLayer::Pointer));

        let mask = mask.without(CollisionLayer::Player);
        assert!(!mask.contains(CollisionLayer::Player));
        assert!(!mask.is_empty());
        assert!(mask.without(CollisionLayer::Physics).is_empty());
    }

    #[test]
    fn test_mask_iterates_in_layer_order() {
        let mask = LayerMask::EMPTY
            .with(CollisionLayer::Pointer)
            .with(CollisionLayer::Player);
        let layers: Vec<_> = mask.iter().collect();
        assert_eq!(layers, vec![CollisionLayer::Player, CollisionLayer::Pointer]);
    }
}
