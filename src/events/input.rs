//! Input actions and the reaction events fired by input fixtures.
//!
//! [`ActionId`] lists every logical action the engine under test exposes.
//! Input cubes bind a subset of them; the master cube binds all of them.
//!
//! [`ActionPressed`] and [`ActionReleased`] are triggered when a cube changes
//! state, so observers can follow the test run without polling components.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::tint::Rgba;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
    Crouch,
    Sprint,
    Interact,
    PrimaryFire,
    SecondaryFire,
    Reload,
    Menu,
}

impl ActionId {
    /// The full action set, in display order.
    pub const ALL: [ActionId; 12] = [
        ActionId::MoveForward,
        ActionId::MoveBack,
        ActionId::MoveLeft,
        ActionId::MoveRight,
        ActionId::Jump,
        ActionId::Crouch,
        ActionId::Sprint,
        ActionId::Interact,
        ActionId::PrimaryFire,
        ActionId::SecondaryFire,
        ActionId::Reload,
        ActionId::Menu,
    ];

    /// Human readable name used in hover text.
    pub fn name(self) -> &'static str {
        match self {
            ActionId::MoveForward => "Move Forward",
            ActionId::MoveBack => "Move Back",
            ActionId::MoveLeft => "Move Left",
            ActionId::MoveRight => "Move Right",
            ActionId::Jump => "Jump",
            ActionId::Crouch => "Crouch",
            ActionId::Sprint => "Sprint",
            ActionId::Interact => "Interact",
            ActionId::PrimaryFire => "Primary Fire",
            ActionId::SecondaryFire => "Secondary Fire",
            ActionId::Reload => "Reload",
            ActionId::Menu => "Menu",
        }
    }

    /// Color a cube turns while this action is held.
    pub fn default_color(self) -> Rgba {
        match self {
            ActionId::MoveForward => Rgba::BLUE,
            ActionId::MoveBack => Rgba::CYAN,
            ActionId::MoveLeft => Rgba::PURPLE,
            ActionId::MoveRight => Rgba::PINK,
            ActionId::Jump => Rgba::GREEN,
            ActionId::Crouch => Rgba::BROWN,
            ActionId::Sprint => Rgba::ORANGE,
            ActionId::Interact => Rgba::YELLOW,
            ActionId::PrimaryFire => Rgba::RED,
            ActionId::SecondaryFire => Rgba::MAGENTA,
            ActionId::Reload => Rgba::LIME,
            ActionId::Menu => Rgba::WHITE,
        }
    }
}

/// Triggered when a cube enters `Pressed` or switches to another action.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPressed {
    pub cube: Entity,
    pub action: ActionId,
}

/// Triggered when a cube returns to `Idle`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReleased {
    pub cube: Entity,
    pub action: ActionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_actions_are_distinct() {
        let set: rustc_hash::FxHashSet<ActionId> = ActionId::ALL.into_iter().collect();
        assert_eq!(set.len(), ActionId::ALL.len());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ActionId::PrimaryFire).unwrap();
        assert_eq!(json, "\"primary_fire\"");
        let back: ActionId = serde_json::from_str("\"move_left\"").unwrap();
        assert_eq!(back, ActionId::MoveLeft);
    }

    #[test]
    fn test_action_colors_differ_from_neutral() {
        for action in ActionId::ALL {
            assert_ne!(action.default_color(), Rgba::NEUTRAL, "{:?}", action);
        }
    }
}
