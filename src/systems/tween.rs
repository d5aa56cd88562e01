//! Tween animation systems.
//!
//! These systems update entity transforms over time based on tween components:
//! - [`tween_position_system`] – animates [`Transform::translation`]
//! - [`tween_rotation_system`] – animates [`Transform::rotation`] from Euler degrees
//! - [`tween_scale_system`] – animates [`Transform::scale`]
//!
//! Each tween component specifies start/end values, duration, easing function,
//! and loop mode. The systems read delta time from [`WorldTime`] and
//! interpolate the property accordingly. They only ever write [`Transform`],
//! so a tween keeps running undisturbed while the fixture's tint changes.

use bevy_ecs::prelude::*;
use glam::{EulerRot, Quat, Vec3};

use crate::components::transform::Transform;
use crate::components::tween::{
    Easing, LoopMode, TweenClock, TweenPosition, TweenRotation, TweenScale,
};
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(clock: &mut TweenClock, dt: f32) {
    let dir = if clock.forward { 1.0 } else { -1.0 };
    clock.time += dt * dir;

    let finished_forward = clock.forward && clock.time >= clock.duration;
    let finished_backward = !clock.forward && clock.time <= 0.0;

    if finished_forward || finished_backward {
        match clock.loop_mode {
            LoopMode::Once => {
                clock.playing = false;
                clock.time = clock.time.clamp(0.0, clock.duration);
            }
            LoopMode::Restart => {
                clock.time = if finished_forward { 0.0 } else { clock.duration };
            }
            LoopMode::Yoyo => {
                clock.forward = !clock.forward;
                clock.time = clock.time.clamp(0.0, clock.duration);
            }
        }
    }
}

/// Advance a playing clock and return the eased progress, or `None` when stopped.
fn step(clock: &mut TweenClock, dt: f32) -> Option<f32> {
    if !clock.playing {
        return None;
    }
    advance(clock, dt);
    Some(ease(clock.easing, clock.time / clock.duration))
}

/// Rotation for a set of XYZ Euler angles in degrees.
pub(crate) fn euler_degrees(angles: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        angles.x.to_radians(),
        angles.y.to_radians(),
        angles.z.to_radians(),
    )
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_position_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Transform, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut transform, mut tw) in query.iter_mut() {
        if let Some(t) = step(&mut tw.clock, dt) {
            transform.translation = tw.from.lerp(tw.to, t);
        }
    }
}

/// Animate entity rotations based on [`TweenRotation`] components.
pub fn tween_rotation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Transform, &mut TweenRotation)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut transform, mut tw) in query.iter_mut() {
        if let Some(t) = step(&mut tw.clock, dt) {
            transform.rotation = euler_degrees(tw.from.lerp(tw.to, t));
        }
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Transform, &mut TweenScale)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut transform, mut tw) in query.iter_mut() {
        if let Some(t) = step(&mut tw.clock, dt) {
            transform.scale = tw.from.lerp(tw.to, t);
        }
    }
}
