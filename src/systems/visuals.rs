//! State-driven visual feedback.
//!
//! These are the only systems that write [`Tint`], [`Emissive`] and
//! [`HoverText`]. They derive everything from the behavior state, so they can
//! run every tick without tracking transitions. Writes go through
//! `set_if_neq` to keep change detection meaningful for the host.
//!
//! Transform and texture offset belong to the animation systems and are never
//! touched here.

use bevy_ecs::prelude::*;

use crate::components::hovertext::HoverText;
use crate::components::inputcube::{HoverState, InputCube};
use crate::components::tint::{Emissive, Tint};
use crate::components::trigger::{OccupancyStyle, StayCounter, TriggerOccupancy};

/// Text shown by a volume with a live stay counter.
pub fn stay_label(stay_ticks: u32) -> String {
    format!("Stay: {}", stay_ticks)
}

/// Base tint follows the pressed action; emissive follows hover.
pub fn apply_cube_visuals(
    mut cubes: Query<(
        &InputCube,
        &HoverState,
        &mut Tint,
        &mut Emissive,
        Option<&mut HoverText>,
    )>,
) {
    for (cube, hover, mut tint, mut emissive, text) in cubes.iter_mut() {
        tint.set_if_neq(Tint::new(cube.current_color()));
        emissive.set_if_neq(Emissive {
            color: cube.emissive(hover.hovered),
        });
        if let Some(mut text) = text
            && text.content != hover.last_action_label
        {
            text.set_content(&hover.last_action_label);
        }
    }
}

/// Volumes swap between their inside/outside colors; counters mirror `stay_ticks`.
pub fn apply_trigger_visuals(
    mut volumes: Query<(
        &TriggerOccupancy,
        &OccupancyStyle,
        &mut Tint,
        Option<&mut HoverText>,
        Has<StayCounter>,
    )>,
) {
    for (occupancy, style, mut tint, text, has_counter) in volumes.iter_mut() {
        tint.set_if_neq(Tint::new(style.color_for(occupancy.occupied)));
        if !has_counter {
            continue;
        }
        if let Some(mut text) = text {
            let label = stay_label(occupancy.stay_ticks);
            if text.content != label {
                text.set_content(&label);
            }
        }
    }
}
