//! Per-tick signal snapshot.
//!
//! The host (or a replay script, or a test) fills a [`FrameEvents`] with
//! everything observed during one frame and hands it to
//! [`BehaviorScheduler::tick`](crate::tick::BehaviorScheduler::tick). Systems
//! only read from the snapshot, which makes every tick deterministic and
//! replayable without a live host.
//!
//! # Design
//!
//! Signals are grouped by kind, in the order the scheduler polls them:
//! - `action_down` / `action_up` – input actions, global or aimed at one cube
//! - `hover_enter` / `hover_leave` – pointer hover over a cube
//! - `trigger_enter` / `trigger_exit` / `trigger_stay` – overlap with a volume
//!
//! Within a kind, signals are handled in insertion order.
//!
//! # Example
//!
//! ```ignore
//! let events = FrameEvents::default()
//!     .with_action_down(ActionId::Jump)
//!     .with_hover_enter(cube)
//!     .with_trigger_enter(volume, CollisionLayer::Player);
//! scheduler.tick(&mut world, 1.0 / 60.0, events);
//! ```

use bevy_ecs::prelude::*;

use crate::events::input::ActionId;
use crate::events::trigger::CollisionLayer;

/// An input action observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSignal {
    pub action: ActionId,
    /// `None` for global input (keyboard); `Some` when aimed at one cube.
    pub target: Option<Entity>,
}

impl ActionSignal {
    /// Whether this signal concerns `cube`.
    pub fn reaches(&self, cube: Entity) -> bool {
        self.target.is_none_or(|target| target == cube)
    }
}

/// An overlap signal observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSignal {
    pub volume: Entity,
    pub layer: CollisionLayer,
}

/// Frozen snapshot of every signal observed during one tick.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    pub action_down: Vec<ActionSignal>,
    pub action_up: Vec<ActionSignal>,
    pub hover_enter: Vec<Entity>,
    pub hover_leave: Vec<Entity>,
    pub trigger_enter: Vec<TriggerSignal>,
    pub trigger_exit: Vec<TriggerSignal>,
    pub trigger_stay: Vec<TriggerSignal>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        self.action_down.is_empty()
            && self.action_up.is_empty()
            && self.hover_enter.is_empty()
            && self.hover_leave.is_empty()
            && self.trigger_enter.is_empty()
            && self.trigger_exit.is_empty()
            && self.trigger_stay.is_empty()
    }

    pub fn clear(&mut self) {
        self.action_down.clear();
        self.action_up.clear();
        self.hover_enter.clear();
        self.hover_leave.clear();
        self.trigger_enter.clear();
        self.trigger_exit.clear();
        self.trigger_stay.clear();
    }

    pub fn with_action_down(mut self, action: ActionId) -> Self {
        self.action_down.push(ActionSignal {
            action,
            target: None,
        });
        self
    }

    pub fn with_action_down_on(mut self, cube: Entity, action: ActionId) -> Self {
        self.action_down.push(ActionSignal {
            action,
            target: Some(cube),
        });
        self
    }

    pub fn with_action_up(mut self, action: ActionId) -> Self {
        self.action_up.push(ActionSignal {
            action,
            target: None,
        });
        self
    }

    pub fn with_action_up_on(mut self, cube: Entity, action: ActionId) -> Self {
        self.action_up.push(ActionSignal {
            action,
            target: Some(cube),
        });
        self
    }

    pub fn with_hover_enter(mut self, cube: Entity) -> Self {
        self.hover_enter.push(cube);
        self
    }

    pub fn with_hover_leave(mut self, cube: Entity) -> Self {
        self.hover_leave.push(cube);
        self
    }

    pub fn with_trigger_enter(mut self, volume: Entity, layer: CollisionLayer) -> Self {
        self.trigger_enter.push(TriggerSignal { volume, layer });
        self
    }

    pub fn with_trigger_exit(mut self, volume: Entity, layer: CollisionLayer) -> Self {
        self.trigger_exit.push(TriggerSignal { volume, layer });
        self
    }

    pub fn with_trigger_stay(mut self, volume: Entity, layer: CollisionLayer) -> Self {
        self.trigger_stay.push(TriggerSignal { volume, layer });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FrameEvents::default().is_empty());
    }

    #[test]
    fn test_builders_and_clear() {
        let mut world = World::new();
        let cube = world.spawn_empty().id();
        let mut events = FrameEvents::default()
            .with_action_down(ActionId::Jump)
            .with_action_up_on(cube, ActionId::Jump)
            .with_hover_enter(cube)
            .with_trigger_stay(cube, CollisionLayer::Physics);
        assert!(!events.is_empty());
        assert_eq!(events.action_down[0].target, None);
        assert_eq!(events.action_up[0].target, Some(cube));
        assert_eq!(events.trigger_stay.len(), 1);

        events.clear();
        assert!(events.is_empty());
    }

    #[test]
    fn test_global_signal_reaches_every_cube() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let global = ActionSignal {
            action: ActionId::Jump,
            target: None,
        };
        let aimed = ActionSignal {
            action: ActionId::Jump,
            target: Some(a),
        };
        assert!(global.reaches(a) && global.reaches(b));
        assert!(aimed.reaches(a));
        assert!(!aimed.reaches(b));
    }
}
