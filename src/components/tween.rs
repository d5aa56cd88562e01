//! Bounded tween components for animated props.
//!
//! This module provides components for smoothly animating transform
//! properties over time:
//! - [`TweenPosition`] – animate [`Transform::translation`](super::transform::Transform)
//! - [`TweenRotation`] – animate [`Transform::rotation`](super::transform::Transform) from Euler degrees
//! - [`TweenScale`] – animate [`Transform::scale`](super::transform::Transform)
//!
//! Each tween supports multiple [`Easing`] functions and [`LoopMode`] settings.
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Play once and stop.
    #[default]
    Once,
    /// Jump back to the start when finished.
    Restart,
    /// Reverse direction when reaching either end.
    Yoyo,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed (no easing).
    #[default]
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Playback cursor shared by all tween kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenClock {
    /// Duration in seconds.
    pub duration: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
}

impl TweenClock {
    pub fn new(duration: f32) -> Result<Self, FixtureError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(FixtureError::InvalidTween(format!(
                "duration must be positive, got {}",
                duration
            )));
        }
        Ok(Self {
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        })
    }
}

macro_rules! tween_builders {
    ($ty:ident) => {
        impl $ty {
            pub fn with_easing(mut self, easing: Easing) -> Self {
                self.clock.easing = easing;
                self
            }
            pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
                self.clock.loop_mode = loop_mode;
                self
            }
            pub fn with_backwards(mut self) -> Self {
                self.clock.time = self.clock.duration;
                self.clock.forward = false;
                self
            }
        }
    };
}

/// Animates an entity's translation between two points.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    pub from: Vec3,
    pub to: Vec3,
    pub clock: TweenClock,
}

impl TweenPosition {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Result<Self, FixtureError> {
        Ok(TweenPosition {
            from,
            to,
            clock: TweenClock::new(duration)?,
        })
    }
}
tween_builders!(TweenPosition);

/// Animates an entity's rotation between two sets of XYZ Euler angles (degrees).
#[derive(Component, Clone, Debug)]
pub struct TweenRotation {
    pub from: Vec3,
    pub to: Vec3,
    pub clock: TweenClock,
}

impl TweenRotation {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Result<Self, FixtureError> {
        Ok(TweenRotation {
            from,
            to,
            clock: TweenClock::new(duration)?,
        })
    }
}
tween_builders!(TweenRotation);

/// Animates an entity's scale between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    pub from: Vec3,
    pub to: Vec3,
    pub clock: TweenClock,
}

impl TweenScale {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Result<Self, FixtureError> {
        Ok(TweenScale {
            from,
            to,
            clock: TweenClock::new(duration)?,
        })
    }
}
tween_builders!(TweenScale);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_position_new() {
        let tw = TweenPosition::new(Vec3::ZERO, Vec3::new(100.0, 200.0, 0.0), 2.0).unwrap();
        assert_eq!(tw.clock.duration, 2.0);
        assert_eq!(tw.clock.easing, Easing::Linear);
        assert_eq!(tw.clock.loop_mode, LoopMode::Once);
        assert!(tw.clock.playing);
        assert_eq!(tw.clock.time, 0.0);
        assert!(tw.clock.forward);
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        assert!(TweenPosition::new(Vec3::ZERO, Vec3::ONE, 0.0).is_err());
        assert!(TweenRotation::new(Vec3::ZERO, Vec3::ONE, -1.0).is_err());
        assert!(TweenScale::new(Vec3::ONE, Vec3::ONE, f32::INFINITY).is_err());
    }

    #[test]
    fn test_builder_chaining() {
        let tw = TweenRotation::new(Vec3::ZERO, Vec3::new(0.0, 360.0, 0.0), 1.5)
            .unwrap()
            .with_easing(Easing::CubicOut)
            .with_loop_mode(LoopMode::Yoyo)
            .with_backwards();
        assert_eq!(tw.clock.easing, Easing::CubicOut);
        assert_eq!(tw.clock.loop_mode, LoopMode::Yoyo);
        assert_eq!(tw.clock.time, 1.5);
        assert!(!tw.clock.forward);
    }

    #[test]
    fn test_loop_mode_serde_names() {
        let mode: LoopMode = serde_json::from_str("\"yoyo\"").unwrap();
        assert_eq!(mode, LoopMode::Yoyo);
        let easing: Easing = serde_json::from_str("\"quad_in_out\"").unwrap();
        assert_eq!(easing, Easing::QuadInOut);
    }
}
