//! Trigger volume occupancy tracking.
//!
//! A trigger volume is a non-solid region reporting overlap signals. Each
//! volume carries:
//!
//! - [`TriggerVolume`] – which collision layers it reacts to
//! - [`TriggerOccupancy`] – the `occupied` flag, the stay counter and the set of
//!   participant types currently inside
//! - optionally [`OccupancyStyle`] (inside/outside colors) and [`StayCounter`]
//!   (mirror `stay_ticks` into the hover text)
//!
//! # Invariants
//!
//! - `stay_ticks == 0` whenever `occupied == false`
//! - `occupied == !inside.is_empty()`
//!
//! A solid collider sharing the shape of a volume can keep participants from
//! ever producing an Enter signal. That is expected; nothing here synthesizes
//! signals to compensate.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::tint::Rgba;
use crate::events::trigger::{CollisionLayer, LayerMask};

/// Layer filter of a trigger volume.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerVolume {
    pub layers: LayerMask,
}

impl TriggerVolume {
    pub fn new(layers: LayerMask) -> Self {
        Self { layers }
    }
    pub fn accepts(&self, layer: CollisionLayer) -> bool {
        self.layers.contains(layer)
    }
}

/// What an Enter signal did to a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// That participant type was already inside.
    AlreadyInside,
    /// A new participant type entered. `first` is set when the volume went
    /// from unoccupied to occupied.
    Entered { first: bool },
}

/// What an Exit signal did to a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitOutcome {
    NotInside,
    /// A participant type left. `last` is set when the volume became empty.
    Exited { last: bool },
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerOccupancy {
    pub occupied: bool,
    /// Ticks spent occupied since the last Enter transition.
    pub stay_ticks: u32,
    inside: LayerMask,
}

impl TriggerOccupancy {
    /// Occupancy resumed with the given participant types already inside.
    pub fn resumed(inside: LayerMask) -> Self {
        Self {
            occupied: !inside.is_empty(),
            stay_ticks: 0,
            inside,
        }
    }

    pub fn inside(&self) -> LayerMask {
        self.inside
    }

    pub fn enter(&mut self, layer: CollisionLayer) -> EnterOutcome {
        if self.inside.contains(layer) {
            return EnterOutcome::AlreadyInside;
        }
        self.inside = self.inside.with(layer);
        let first = !self.occupied;
        if first {
            self.occupied = true;
            self.stay_ticks = 0;
        }
        EnterOutcome::Entered { first }
    }

    pub fn exit(&mut self, layer: CollisionLayer) -> ExitOutcome {
        if !self.inside.contains(layer) {
            return ExitOutcome::NotInside;
        }
        self.inside = self.inside.without(layer);
        let last = self.inside.is_empty();
        if last {
            self.occupied = false;
            self.stay_ticks = 0;
        }
        ExitOutcome::Exited { last }
    }

    /// Count one tick of presence. Ignored while unoccupied.
    pub fn stay(&mut self) -> bool {
        if !self.occupied {
            return false;
        }
        self.stay_ticks = self.stay_ticks.saturating_add(1);
        true
    }
}

/// Material colors swapped on occupancy transitions.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStyle {
    pub outside: Rgba,
    pub inside: Rgba,
}

impl Default for OccupancyStyle {
    fn default() -> Self {
        Self {
            outside: Rgba::new(0, 121, 241, 96),
            inside: Rgba::new(0, 228, 48, 160),
        }
    }
}

impl OccupancyStyle {
    pub fn color_for(&self, occupied: bool) -> Rgba {
        if occupied { self.inside } else { self.outside }
    }
}

/// Marker: show `stay_ticks` as a live counter in the volume's hover text.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct StayCounter;

/// Marker: the volume shares its shape with a solid collider, so participants
/// are stopped before they can overlap it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SolidOverlap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_resets_stay_counter() {
        let mut occ = TriggerOccupancy::default();
        assert_eq!(
            occ.enter(CollisionLayer::Player),
            EnterOutcome::Entered { first: true }
        );
        occ.stay();
        occ.stay();
        assert_eq!(occ.stay_ticks, 2);
        assert_eq!(occ.exit(CollisionLayer::Player), ExitOutcome::Exited { last: true });
        assert_eq!(occ.stay_ticks, 0);
        occ.enter(CollisionLayer::Player);
        assert_eq!(occ.stay_ticks, 0);
        occ.stay();
        assert_eq!(occ.stay_ticks, 1);
    }

    #[test]
    fn test_duplicate_signals_are_noops() {
        let mut occ = TriggerOccupancy::default();
        occ.enter(CollisionLayer::Player);
        occ.stay();
        assert_eq!(occ.enter(CollisionLayer::Player), EnterOutcome::AlreadyInside);
        assert_eq!(occ.stay_ticks, 1);
        occ.exit(CollisionLayer::Player);
        assert_eq!(occ.exit(CollisionLayer::Player), ExitOutcome::NotInside);
        assert!(!occ.occupied);
    }

    #[test]
    fn test_stay_ignored_while_outside() {
        let mut occ = TriggerOccupancy::default();
        assert!(!occ.stay());
        assert_eq!(occ.stay_ticks, 0);
    }

    #[test]
    fn test_single_flag_across_layers() {
        let mut occ = TriggerOccupancy::default();
        occ.enter(CollisionLayer::Player);
        occ.stay();
        assert_eq!(
            occ.enter(CollisionLayer::Physics),
            EnterOutcome::Entered { first: false }
        );
        // Second participant type does not restart the session.
        assert_eq!(occ.stay_ticks, 1);
        assert_eq!(
            occ.exit(CollisionLayer::Player),
            ExitOutcome::Exited { last: false }
        );
        assert!(occ.occupied);
        assert_eq!(
            occ.exit(CollisionLayer::Physics),
            ExitOutcome::Exited { last: true }
        );
        assert!(!occ.occupied);
        assert_eq!(occ.stay_ticks, 0);
    }

    #[test]
    fn test_resumed_keeps_layers_but_not_stay_count() {
        let occ = TriggerOccupancy::resumed(LayerMask::of(&[CollisionLayer::Physics]));
        assert!(occ.occupied);
        assert_eq!(occ.stay_ticks, 0);
        assert!(occ.inside().contains(CollisionLayer::Physics));
        assert!(!TriggerOccupancy::resumed(LayerMask::EMPTY).occupied);
    }

    #[test]
    fn test_filter_accepts_only_configured_layers() {
        let volume = TriggerVolume::new(LayerMask::of(&[CollisionLayer::Player]));
        assert!(volume.accepts(CollisionLayer::Player));
        assert!(!volume.accepts(CollisionLayer::Physics));
    }
}
