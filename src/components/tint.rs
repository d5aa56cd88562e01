//! Color components written by the behavior systems.
//!
//! The host reads these as material properties:
//! - [`Tint`] – base color of the fixture's material
//! - [`Emissive`] – optional emissive overlay layered on top of the tint
//!
//! Neither component is touched by the animation systems, so recoloring a
//! fixture never interferes with a running tween or continuous motion.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Neutral material color of idle fixtures.
    pub const NEUTRAL: Rgba = Rgba::new(160, 160, 160, 255);
    pub const HIGHLIGHT: Rgba = Rgba::new(255, 255, 200, 255);
    pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
    pub const GREEN: Rgba = Rgba::new(0, 228, 48, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const YELLOW: Rgba = Rgba::new(253, 249, 0, 255);
    pub const ORANGE: Rgba = Rgba::new(255, 161, 0, 255);
    pub const PURPLE: Rgba = Rgba::new(200, 122, 255, 255);
    pub const CYAN: Rgba = Rgba::new(0, 220, 220, 255);
    pub const MAGENTA: Rgba = Rgba::new(255, 0, 255, 255);
    pub const PINK: Rgba = Rgba::new(255, 109, 194, 255);
    pub const LIME: Rgba = Rgba::new(150, 240, 40, 255);
    pub const BROWN: Rgba = Rgba::new(127, 106, 79, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Rgba> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// Base material color of a fixture.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tint {
    pub color: Rgba,
}

impl Tint {
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }
}

/// Emissive overlay. `None` means the material glows with nothing.
///
/// The host composes the overlay on top of [`Tint`]; it never replaces it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Emissive {
    pub color: Option<Rgba>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#ff8000"), Some(Rgba::new(255, 128, 0, 255)));
        assert_eq!(Rgba::from_hex("10203040"), Some(Rgba::new(16, 32, 48, 64)));
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#zz0000"), None);
    }

    #[test]
    fn test_default_emissive_is_off() {
        assert_eq!(Emissive::default().color, None);
        assert_eq!(Tint::default().color, Rgba::WHITE);
    }
}
