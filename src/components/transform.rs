//! Local transform and texture offset written by the animation systems.
//!
//! Only the tween and motion systems mutate these. State-driven visuals live in
//! separate components ([`Tint`](super::tint::Tint),
//! [`Emissive`](super::tint::Emissive)) so the two layers never reset each other.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec2, Vec3};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }
}

/// UV offset of a scrolling material, kept in `[0, 1)`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct TextureOffset {
    pub uv: Vec2,
}
