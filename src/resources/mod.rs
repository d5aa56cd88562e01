//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the tick's signal snapshot, timing,
//! the fixture name registry, and runner configuration.
//!
//! Overview
//! - `benchconfig` – INI-backed runner settings
//! - `frameevents` – per-tick snapshot of input, hover, and overlap signals
//! - `registry` – fixture name to entity lookup for replay and soak drivers
//! - `worldtime` – simulation time and delta
pub mod benchconfig;
pub mod frameevents;
pub mod registry;
pub mod worldtime;
