//! Event types triggered by the behavior systems.
//!
//! These are the "registered callbacks" of the fixtures: observers subscribe
//! to them instead of polling components.
//!
//! Submodules:
//! - [`input`] – logical actions and press/release notifications of input cubes
//! - [`spawner`] – item creation/destruction and toggle slot flips
//! - [`trigger`] – collision layers and per-participant enter/exit notifications
pub mod input;
pub mod spawner;
pub mod trigger;
