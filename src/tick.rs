//! Behavior tick scheduler.
//!
//! [`BehaviorScheduler`] owns the single chained [`Schedule`] that drives every
//! fixture once per tick. The poll order is fixed:
//!
//! 1. input: action down, action up, hover enter, hover leave
//! 2. occupancy: trigger enter, trigger exit, trigger stay
//! 3. visual feedback for cubes and volumes
//! 4. spawn pools: periodic spawn, periodic despawn, toggle slots
//! 5. animation: tweens, then continuous motion
//!
//! Because action down runs before action up, a press and release of the same
//! action within one tick ends in the idle state.

use bevy_ecs::prelude::*;
use log::debug;

use crate::error::FixtureError;
use crate::resources::frameevents::FrameEvents;
use crate::resources::registry::FixtureRegistry;
use crate::resources::worldtime::WorldTime;
use crate::systems::inputreaction::{
    action_down_system, action_up_system, hover_enter_system, hover_leave_system,
};
use crate::systems::motion::continuous_motion_system;
use crate::systems::occupancy::{trigger_enter_system, trigger_exit_system, trigger_stay_system};
use crate::systems::spawner::{periodic_despawn_system, periodic_spawn_system, toggle_slot_system};
use crate::systems::time::update_world_time;
use crate::systems::tween::{tween_position_system, tween_rotation_system, tween_scale_system};
use crate::systems::visuals::{apply_cube_visuals, apply_trigger_visuals};

pub struct BehaviorScheduler {
    schedule: Schedule,
}

impl BehaviorScheduler {
    /// Build and initialize the schedule against `world`.
    ///
    /// Inserts the resources the systems need when they are missing.
    pub fn new(world: &mut World) -> Result<Self, FixtureError> {
        world.init_resource::<WorldTime>();
        world.init_resource::<FrameEvents>();
        world.init_resource::<FixtureRegistry>();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                (
                    action_down_system,
                    action_up_system,
                    hover_enter_system,
                    hover_leave_system,
                )
                    .chain(),
                (trigger_enter_system, trigger_exit_system, trigger_stay_system).chain(),
                (apply_cube_visuals, apply_trigger_visuals).chain(),
                (periodic_spawn_system, periodic_despawn_system, toggle_slot_system).chain(),
                (
                    tween_position_system,
                    tween_rotation_system,
                    tween_scale_system,
                    continuous_motion_system,
                )
                    .chain(),
            )
                .chain(),
        );
        schedule
            .initialize(world)
            .map_err(|e| FixtureError::Schedule(ToString::to_string(&e)))?;

        Ok(Self { schedule })
    }

    /// Run one tick: advance time by `dt`, consume `events`, then clear them.
    ///
    /// Commands issued by the systems (spawns, despawns, observer triggers)
    /// are applied before this returns.
    pub fn tick(&mut self, world: &mut World, dt: f32, events: FrameEvents) {
        update_world_time(world, dt);
        world.insert_resource(events);

        self.schedule.run(world);

        world.resource_mut::<FrameEvents>().clear();
        world.clear_trackers();

        let time = world.resource::<WorldTime>();
        debug!("tick {} done at t={:.3}", time.frame_count, time.elapsed);
    }
}
