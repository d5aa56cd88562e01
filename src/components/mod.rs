//! ECS components for fixtures.
//!
//! This module groups all component types that can be attached to fixture
//! entities. Behavior components hold per-entity state machine data; visual
//! components are the properties the host renders.
//!
//! Submodules overview:
//! - [`fixturename`] – catalog name used in logs and replay scripts
//! - [`hovertext`] – floating text next to a fixture
//! - [`inputcube`] – input reaction state machine (press axis and hover axis)
//! - [`motion`] – unbounded linear motion, spin, and texture scrolling
//! - [`spawner`] – periodic spawn/despawn pools and single-slot toggles
//! - [`tint`] – base color and emissive overlay
//! - [`transform`] – translation, rotation, scale, and texture offset
//! - [`trigger`] – trigger volume filter and occupancy tracking
//! - [`tween`] – bounded interpolation of position, rotation, and scale

pub mod fixturename;
pub mod hovertext;
pub mod inputcube;
pub mod motion;
pub mod spawner;
pub mod tint;
pub mod transform;
pub mod trigger;
pub mod tween;
