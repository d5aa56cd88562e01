//! Behavior systems.
//!
//! This module groups all ECS systems the tick scheduler runs, in the order it
//! runs them.
//!
//! Submodules overview
//! - [`time`] – advance the simulation clock from the tick's delta
//! - [`inputreaction`] – press/release and hover state of input cubes
//! - [`occupancy`] – enter/exit/stay bookkeeping of trigger volumes
//! - [`visuals`] – derive tint, emissive and hover text from behavior state
//! - [`spawner`] – periodic spawn/despawn pools and toggle slots
//! - [`tween`] – animate position, rotation, and scale over time
//! - [`motion`] – unbounded linear motion, spin and texture scroll

pub mod inputreaction;
pub mod motion;
pub mod occupancy;
pub mod spawner;
pub mod time;
pub mod tween;
pub mod visuals;
