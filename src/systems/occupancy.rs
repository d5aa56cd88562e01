//! Occupancy tracking systems.
//!
//! - [`trigger_enter_system`] – mark participant types inside, open a session
//! - [`trigger_exit_system`] – unmark them, close the session when empty
//! - [`trigger_stay_system`] – count one stay tick per occupied volume
//!
//! Signals whose layer is not in the volume's filter are dropped, and so are
//! signals for volumes that were destroyed. Enter/exit callbacks are
//! [`TriggerEntered`] / [`TriggerExited`] observer events, fired once per
//! participant type.

use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::components::fixturename::FixtureName;
use crate::components::trigger::{EnterOutcome, ExitOutcome, TriggerOccupancy, TriggerVolume};
use crate::events::trigger::{TriggerEntered, TriggerExited};
use crate::resources::frameevents::FrameEvents;

fn display_name(entity: Entity, name: Option<&FixtureName>) -> String {
    name.map(|n| n.0.clone())
        .unwrap_or_else(|| format!("{:?}", entity))
}

pub fn trigger_enter_system(
    events: Res<FrameEvents>,
    mut volumes: Query<(&TriggerVolume, &mut TriggerOccupancy, Option<&FixtureName>)>,
    mut commands: Commands,
) {
    for signal in &events.trigger_enter {
        let Ok((volume, mut occupancy, name)) = volumes.get_mut(signal.volume) else {
            debug!("enter signal for missing volume {:?}", signal.volume);
            continue;
        };
        if !volume.accepts(signal.layer) {
            continue;
        }
        if let EnterOutcome::Entered { first } = occupancy.enter(signal.layer) {
            if first {
                info!(
                    "{} occupied by {:?}",
                    display_name(signal.volume, name),
                    signal.layer
                );
            }
            commands.trigger(TriggerEntered {
                volume: signal.volume,
                layer: signal.layer,
            });
        }
    }
}

pub fn trigger_exit_system(
    events: Res<FrameEvents>,
    mut volumes: Query<(&TriggerVolume, &mut TriggerOccupancy, Option<&FixtureName>)>,
    mut commands: Commands,
) {
    for signal in &events.trigger_exit {
        let Ok((volume, mut occupancy, name)) = volumes.get_mut(signal.volume) else {
            debug!("exit signal for missing volume {:?}", signal.volume);
            continue;
        };
        if !volume.accepts(signal.layer) {
            continue;
        }
        if let ExitOutcome::Exited { last } = occupancy.exit(signal.layer) {
            if last {
                info!("{} vacated", display_name(signal.volume, name));
            }
            commands.trigger(TriggerExited {
                volume: signal.volume,
                layer: signal.layer,
            });
        }
    }
}

/// Stay signals increment `stay_ticks` at most once per volume per tick.
pub fn trigger_stay_system(
    events: Res<FrameEvents>,
    mut volumes: Query<(&TriggerVolume, &mut TriggerOccupancy)>,
    mut counted: Local<FxHashSet<Entity>>,
) {
    counted.clear();
    for signal in &events.trigger_stay {
        if counted.contains(&signal.volume) {
            continue;
        }
        let Ok((volume, mut occupancy)) = volumes.get_mut(signal.volume) else {
            continue;
        };
        if volume.accepts(signal.layer) && occupancy.inside().contains(signal.layer) {
            occupancy.stay();
            counted.insert(signal.volume);
        }
    }
}
