//! fixturebench library.
//!
//! Behavior engine for the interactive fixtures of a movement/input test
//! scene: input-reactive cubes, trigger volumes with occupancy tracking,
//! timed spawn/despawn pools and animated props. Fixtures are ECS entities;
//! a [`tick::BehaviorScheduler`] drives them once per frame from an explicit
//! [`resources::frameevents::FrameEvents`] snapshot.
//!
//! # Project Structure
//!
//! - [`components`] – per-fixture state and the visual properties the host renders
//! - [`events`] – signal vocabulary and observer events
//! - [`resources`] – world clock, signal snapshot, name registry, runner config
//! - [`systems`] – the behavior systems, in tick order
//! - [`tick`] – the scheduler
//! - [`scene`] – fixture catalog loading and spawning
//! - [`replay`] – scripted and seeded-random signal drivers
//! - [`report`] – run summaries

pub mod components;
pub mod error;
pub mod events;
pub mod replay;
pub mod report;
pub mod resources;
pub mod scene;
pub mod systems;
pub mod tick;
