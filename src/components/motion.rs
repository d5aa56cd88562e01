//! Continuous (unbounded) motion components.
//!
//! Unlike tweens these have no duration and never loop: they integrate a
//! constant rate every tick.
//!
//! - [`LinearMotion`] – constant velocity along a unit direction
//! - [`Spin`] – constant angular speed around an axis
//! - [`TextureScroll`] – constant UV velocity (conveyor belts, flowing water)

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};

use crate::error::FixtureError;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct LinearMotion {
    /// Unit vector.
    pub direction: Vec3,
    /// Units per second.
    pub speed: f32,
}

impl LinearMotion {
    pub fn new(direction: Vec3, speed: f32) -> Result<Self, FixtureError> {
        let direction = direction.try_normalize().ok_or(FixtureError::InvalidDirection {
            what: "motion direction",
        })?;
        Ok(Self { direction, speed })
    }
    pub fn velocity(&self) -> Vec3 {
        self.direction * self.speed
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Unit rotation axis.
    pub axis: Vec3,
    pub degrees_per_second: f32,
}

impl Spin {
    pub fn new(axis: Vec3, degrees_per_second: f32) -> Result<Self, FixtureError> {
        let axis = axis
            .try_normalize()
            .ok_or(FixtureError::InvalidDirection { what: "spin axis" })?;
        Ok(Self {
            axis,
            degrees_per_second,
        })
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TextureScroll {
    /// UV units per second.
    pub velocity: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_normalized() {
        let motion = LinearMotion::new(Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
        assert_eq!(motion.velocity(), Vec3::new(0.0, 0.0, 2.0));
        let spin = Spin::new(Vec3::new(0.0, 3.0, 0.0), 90.0).unwrap();
        assert_eq!(spin.axis, Vec3::Y);
    }

    #[test]
    fn test_zero_vectors_rejected() {
        assert!(LinearMotion::new(Vec3::ZERO, 1.0).is_err());
        assert!(Spin::new(Vec3::ZERO, 1.0).is_err());
    }
}
