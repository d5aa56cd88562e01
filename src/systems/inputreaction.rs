//! Input reaction systems.
//!
//! Each system consumes one signal kind from the tick's
//! [`FrameEvents`](crate::resources::frameevents::FrameEvents) and drives the
//! [`InputCube`] / [`HoverState`] state machines:
//!
//! - [`action_down_system`] – `Idle → Pressed`, or overwrite the active action
//! - [`action_up_system`] – `Pressed → Idle` on the matching action
//! - [`hover_enter_system`] / [`hover_leave_system`] – the hover axis
//!
//! The scheduler runs them in that order, so a press and a release of the same
//! action in one tick resolve as press-then-release. Colors are not written
//! here; [`crate::systems::visuals`] derives them from the resulting state.
//!
//! Signals aimed at an entity that no longer exists (or is not a cube) are
//! ignored.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::fixturename::FixtureName;
use crate::components::inputcube::{HoverState, InputCube, PressOutcome};
use crate::events::input::{ActionId, ActionPressed, ActionReleased};
use crate::resources::frameevents::FrameEvents;

fn display_name(entity: Entity, name: Option<&FixtureName>) -> String {
    name.map(|n| n.0.clone())
        .unwrap_or_else(|| format!("{:?}", entity))
}

fn press_cube(
    entity: Entity,
    cube: &mut InputCube,
    hover: &mut HoverState,
    name: Option<&FixtureName>,
    action: ActionId,
    commands: &mut Commands,
) {
    match cube.press(action) {
        PressOutcome::Unbound | PressOutcome::Unchanged => {}
        PressOutcome::Pressed { .. } => {
            info!("{} pressed: {}", display_name(entity, name), action.name());
            hover.last_action_label = cube.label();
            commands.trigger(ActionPressed {
                cube: entity,
                action,
            });
        }
        PressOutcome::Switched { previous, .. } => {
            debug!(
                "{} switched from {} to {}",
                display_name(entity, name),
                cube.bindings[previous].action.name(),
                action.name()
            );
            hover.last_action_label = cube.label();
            commands.trigger(ActionPressed {
                cube: entity,
                action,
            });
        }
    }
}

fn release_cube(
    entity: Entity,
    cube: &mut InputCube,
    hover: &mut HoverState,
    name: Option<&FixtureName>,
    action: ActionId,
    commands: &mut Commands,
) {
    if let Some(released) = cube.release(action) {
        info!("{} released: {}", display_name(entity, name), released.name());
        hover.last_action_label = cube.label();
        commands.trigger(ActionReleased {
            cube: entity,
            action: released,
        });
    }
}

/// Apply this tick's action-down signals.
pub fn action_down_system(
    events: Res<FrameEvents>,
    mut cubes: Query<(
        Entity,
        &mut InputCube,
        &mut HoverState,
        Option<&FixtureName>,
    )>,
    mut commands: Commands,
) {
    for signal in &events.action_down {
        match signal.target {
            Some(target) => match cubes.get_mut(target) {
                Ok((entity, mut cube, mut hover, name)) => press_cube(
                    entity,
                    &mut cube,
                    &mut hover,
                    name,
                    signal.action,
                    &mut commands,
                ),
                Err(_) => debug!("action down for missing cube {:?}", target),
            },
            None => {
                for (entity, mut cube, mut hover, name) in cubes.iter_mut() {
                    press_cube(
                        entity,
                        &mut cube,
                        &mut hover,
                        name,
                        signal.action,
                        &mut commands,
                    );
                }
            }
        }
    }
}

/// Apply this tick's action-up signals.
pub fn action_up_system(
    events: Res<FrameEvents>,
    mut cubes: Query<(
        Entity,
        &mut InputCube,
        &mut HoverState,
        Option<&FixtureName>,
    )>,
    mut commands: Commands,
) {
    for signal in &events.action_up {
        for (entity, mut cube, mut hover, name) in cubes.iter_mut() {
            if !signal.reaches(entity) {
                continue;
            }
            release_cube(
                entity,
                &mut cube,
                &mut hover,
                name,
                signal.action,
                &mut commands,
            );
        }
    }
}

/// Apply this tick's hover-enter signals.
pub fn hover_enter_system(events: Res<FrameEvents>, mut hovers: Query<&mut HoverState>) {
    for &cube in &events.hover_enter {
        match hovers.get_mut(cube) {
            Ok(mut hover) => {
                if hover.enter() {
                    debug!("hover enter {:?}", cube);
                }
            }
            Err(_) => debug!("hover enter for missing cube {:?}", cube),
        }
    }
}

/// Apply this tick's hover-leave signals.
pub fn hover_leave_system(events: Res<FrameEvents>, mut hovers: Query<&mut HoverState>) {
    for &cube in &events.hover_leave {
        match hovers.get_mut(cube) {
            Ok(mut hover) => {
                if hover.leave() {
                    debug!("hover leave {:?}", cube);
                }
            }
            Err(_) => debug!("hover leave for missing cube {:?}", cube),
        }
    }
}
