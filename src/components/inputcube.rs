//! Input reaction state machine for interactive cubes.
//!
//! Two orthogonal axes are tracked per cube:
//!
//! - [`InputCube`] – `Idle` / `Pressed(action)`. Entered on action-down for a
//!   bound action, left on the matching action-up. A second action-down while
//!   pressed overwrites the active action (last writer wins, no queueing).
//! - [`HoverState`] – `Hovered` / `NotHovered`, driven by pointer hover signals.
//!   It only affects the emissive overlay and never the press axis.
//!
//! The transition methods are pure so the systems in
//! [`crate::systems::inputreaction`] stay thin and the state machine can be
//! tested without a world.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::components::tint::Rgba;
use crate::error::FixtureError;
use crate::events::input::ActionId;

/// Default hover text of a cube bound to the full action set.
pub const MASTER_PROMPT: &str = "press any key";

/// One action a cube reacts to.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionBinding {
    pub action: ActionId,
    /// Color the cube turns while the action is held.
    pub color: Rgba,
    /// Static hover text shown while idle.
    pub prompt: String,
}

impl ActionBinding {
    pub fn new(action: ActionId) -> Self {
        Self {
            action,
            color: action.default_color(),
            prompt: format!("Press {}", action.name()),
        }
    }
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

/// Result of feeding an action-down signal to a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The action is not bound to this cube.
    Unbound,
    /// Already pressed with this very action.
    Unchanged,
    /// Went from idle to pressed.
    Pressed { index: usize },
    /// Was pressed with another action, which got overwritten.
    Switched { previous: usize, index: usize },
}

#[derive(Component, Clone, Debug)]
pub struct InputCube {
    /// Bound actions. Never empty.
    pub bindings: SmallVec<[ActionBinding; 4]>,
    pub pressed: bool,
    /// Index into `bindings` of the action that last fired.
    pub active_action: Option<usize>,
    /// Bound to the full action set, with the "press any key" prompt.
    pub is_master: bool,
    pub neutral_color: Rgba,
    /// Emissive color while hovered and idle.
    pub hover_color: Rgba,
}

impl InputCube {
    /// Build a cube for the given bindings.
    ///
    /// Fails with [`FixtureError::EmptyActionSet`] if `bindings` is empty.
    /// A cube whose bindings cover every [`ActionId`] is a master cube.
    pub fn new(
        name: &str,
        bindings: impl IntoIterator<Item = ActionBinding>,
    ) -> Result<Self, FixtureError> {
        let bindings: SmallVec<[ActionBinding; 4]> = bindings.into_iter().collect();
        if bindings.is_empty() {
            return Err(FixtureError::EmptyActionSet(name.to_string()));
        }
        let is_master = ActionId::ALL
            .iter()
            .all(|action| bindings.iter().any(|b| b.action == *action));
        Ok(Self {
            bindings,
            pressed: false,
            active_action: None,
            is_master,
            neutral_color: Rgba::NEUTRAL,
            hover_color: Rgba::HIGHLIGHT,
        })
    }

    /// Cube reacting to every action in [`ActionId::ALL`].
    pub fn master() -> Self {
        Self {
            bindings: ActionId::ALL.into_iter().map(ActionBinding::new).collect(),
            pressed: false,
            active_action: None,
            is_master: true,
            neutral_color: Rgba::NEUTRAL,
            hover_color: Rgba::HIGHLIGHT,
        }
    }

    pub fn with_neutral_color(mut self, color: Rgba) -> Self {
        self.neutral_color = color;
        self
    }

    pub fn with_hover_color(mut self, color: Rgba) -> Self {
        self.hover_color = color;
        self
    }

    pub fn binding_index(&self, action: ActionId) -> Option<usize> {
        self.bindings.iter().position(|b| b.action == action)
    }

    pub fn active_binding(&self) -> Option<&ActionBinding> {
        self.active_action.and_then(|i| self.bindings.get(i))
    }

    /// Feed an action-down signal.
    pub fn press(&mut self, action: ActionId) -> PressOutcome {
        let Some(index) = self.binding_index(action) else {
            return PressOutcome::Unbound;
        };
        match (self.pressed, self.active_action) {
            (true, Some(current)) if current == index => PressOutcome::Unchanged,
            (true, Some(previous)) => {
                self.active_action = Some(index);
                PressOutcome::Switched { previous, index }
            }
            _ => {
                self.pressed = true;
                self.active_action = Some(index);
                PressOutcome::Pressed { index }
            }
        }
    }

    /// Feed an action-up signal. Returns the released action, if the signal
    /// matched the active one.
    pub fn release(&mut self, action: ActionId) -> Option<ActionId> {
        let active = self.active_binding()?.action;
        if !self.pressed || active != action {
            return None;
        }
        self.pressed = false;
        self.active_action = None;
        Some(active)
    }

    /// Base color for the current press state.
    pub fn current_color(&self) -> Rgba {
        self.active_binding()
            .map(|b| b.color)
            .unwrap_or(self.neutral_color)
    }

    /// Emissive overlay for the given hover state. Composes with the press
    /// color: a hovered, pressed cube glows in its active action's color.
    pub fn emissive(&self, hovered: bool) -> Option<Rgba> {
        if !hovered {
            return None;
        }
        Some(
            self.active_binding()
                .map(|b| b.color)
                .unwrap_or(self.hover_color),
        )
    }

    /// Hover text shown while idle.
    pub fn default_prompt(&self) -> String {
        if self.is_master {
            return MASTER_PROMPT.to_string();
        }
        self.bindings
            .iter()
            .map(|b| b.prompt.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Hover text for the current press state.
    pub fn label(&self) -> String {
        match self.active_binding() {
            Some(binding) => format!("Pressed: {}", binding.action.name()),
            None => self.default_prompt(),
        }
    }
}

/// Pointer hover axis of an input cube.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: bool,
    /// Text currently shown by the cube's hover label.
    pub last_action_label: String,
}

impl HoverState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            hovered: false,
            last_action_label: label.into(),
        }
    }
    /// Returns `true` if the state changed.
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }
    /// Returns `true` if the state changed.
    pub fn leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_action_cube() -> InputCube {
        InputCube::new(
            "cube",
            [
                ActionBinding::new(ActionId::Jump),
                ActionBinding::new(ActionId::Crouch),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_action_set_is_rejected() {
        let err = InputCube::new("empty", std::iter::empty()).unwrap_err();
        assert!(matches!(err, FixtureError::EmptyActionSet(name) if name == "empty"));
    }

    #[test]
    fn test_press_then_release_returns_to_idle() {
        let mut cube = two_action_cube();
        assert_eq!(cube.press(ActionId::Jump), PressOutcome::Pressed { index: 0 });
        assert!(cube.pressed);
        assert_eq!(cube.current_color(), ActionId::Jump.default_color());

        assert_eq!(cube.release(ActionId::Jump), Some(ActionId::Jump));
        assert!(!cube.pressed);
        assert_eq!(cube.active_action, None);
        assert_eq!(cube.current_color(), Rgba::NEUTRAL);
    }

    #[test]
    fn test_repeated_press_is_noop() {
        let mut cube = two_action_cube();
        cube.press(ActionId::Crouch);
        assert_eq!(cube.press(ActionId::Crouch), PressOutcome::Unchanged);
        assert_eq!(cube.active_action, Some(1));
    }

    #[test]
    fn test_second_action_overwrites_first() {
        let mut cube = two_action_cube();
        cube.press(ActionId::Jump);
        assert_eq!(
            cube.press(ActionId::Crouch),
            PressOutcome::Switched {
                previous: 0,
                index: 1
            }
        );
        assert_eq!(cube.active_action, Some(1));
        // Releasing the overwritten action does nothing.
        assert_eq!(cube.release(ActionId::Jump), None);
        assert!(cube.pressed);
        assert_eq!(cube.release(ActionId::Crouch), Some(ActionId::Crouch));
        assert!(!cube.pressed);
    }

    #[test]
    fn test_unbound_actions_are_ignored() {
        let mut cube = two_action_cube();
        assert_eq!(cube.press(ActionId::Reload), PressOutcome::Unbound);
        assert!(!cube.pressed);
        assert_eq!(cube.release(ActionId::Reload), None);
    }

    #[test]
    fn test_emissive_follows_active_action() {
        let mut cube = two_action_cube();
        assert_eq!(cube.emissive(false), None);
        assert_eq!(cube.emissive(true), Some(Rgba::HIGHLIGHT));
        cube.press(ActionId::Crouch);
        assert_eq!(cube.emissive(true), Some(ActionId::Crouch.default_color()));
        assert_eq!(cube.emissive(false), None);
    }

    #[test]
    fn test_labels() {
        let mut cube = two_action_cube();
        assert_eq!(cube.label(), "Press Jump / Press Crouch");
        cube.press(ActionId::Jump);
        assert_eq!(cube.label(), "Pressed: Jump");

        let mut master = InputCube::master();
        assert_eq!(master.label(), MASTER_PROMPT);
        master.press(ActionId::Reload);
        assert_eq!(master.label(), "Pressed: Reload");
    }

    #[test]
    fn test_full_binding_set_gets_master_prompt() {
        let cube = InputCube::new(
            "all",
            ActionId::ALL.into_iter().rev().map(ActionBinding::new),
        )
        .unwrap();
        assert!(cube.is_master);
        assert_eq!(cube.default_prompt(), MASTER_PROMPT);

        let partial = InputCube::new(
            "most",
            ActionId::ALL[1..].iter().copied().map(ActionBinding::new),
        )
        .unwrap();
        assert!(!partial.is_master);
        assert_ne!(partial.default_prompt(), MASTER_PROMPT);
    }

    #[test]
    fn test_hover_transitions_report_changes() {
        let mut hover = HoverState::new("x");
        assert!(hover.enter());
        assert!(!hover.enter());
        assert!(hover.leave());
        assert!(!hover.leave());
    }
}
