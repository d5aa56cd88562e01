//! Unbounded continuous motion.
//!
//! Spawned items travel with [`LinearMotion`], props may [`Spin`] in place and
//! scrolling materials slide their [`TextureOffset`]. None of these ever stop on
//! their own; the owning spawn pool or the scene decides when the entity goes.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec2};

use crate::components::motion::{LinearMotion, Spin, TextureScroll};
use crate::components::transform::{TextureOffset, Transform};
use crate::resources::worldtime::WorldTime;

/// Wrap a UV offset into `[0, 1)` on both axes.
pub(crate) fn wrap_uv(uv: Vec2) -> Vec2 {
    Vec2::new(uv.x.rem_euclid(1.0), uv.y.rem_euclid(1.0))
}

pub fn continuous_motion_system(
    time: Res<WorldTime>,
    mut movers: Query<
        (&mut Transform, Option<&LinearMotion>, Option<&Spin>),
        Or<(With<LinearMotion>, With<Spin>)>,
    >,
    mut scrollers: Query<(&mut TextureOffset, &TextureScroll)>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut transform, motion, spin) in movers.iter_mut() {
        if let Some(motion) = motion {
            transform.translation += motion.velocity() * dt;
        }
        if let Some(spin) = spin {
            let angle = (spin.degrees_per_second * dt).to_radians();
            transform.rotation = (Quat::from_axis_angle(spin.axis, angle) * transform.rotation).normalize();
        }
    }
    for (mut offset, scroll) in scrollers.iter_mut() {
        offset.uv = wrap_uv(offset.uv + scroll.velocity * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(continuous_motion_system);
        schedule.run(world);
    }

    #[test]
    fn test_wrap_uv() {
        let uv = wrap_uv(Vec2::new(1.25, -0.25));
        assert!((uv.x - 0.25).abs() < 1e-6);
        assert!((uv.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_linear_motion_moves_along_direction() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        let e = world
            .spawn((
                Transform::default(),
                LinearMotion::new(Vec3::new(0.0, 0.0, 2.0), 4.0).unwrap(),
            ))
            .id();
        run(&mut world);
        let t = world.get::<Transform>(e).unwrap();
        assert!(t.translation.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-6));
    }

    #[test]
    fn test_spin_and_scroll() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 1.0,
            ..Default::default()
        });
        let spinner = world
            .spawn((Transform::default(), Spin::new(Vec3::Y, 90.0).unwrap()))
            .id();
        let scroller = world
            .spawn((
                TextureOffset::default(),
                TextureScroll {
                    velocity: Vec2::new(0.75, 0.0),
                },
            ))
            .id();
        run(&mut world);
        run(&mut world);

        let rotation = world.get::<Transform>(spinner).unwrap().rotation;
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(180f32.to_radians()), 1e-4));
        let uv = world.get::<TextureOffset>(scroller).unwrap().uv;
        assert!((uv.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((
                Transform::default(),
                LinearMotion::new(Vec3::X, 1.0).unwrap(),
            ))
            .id();
        run(&mut world);
        assert_eq!(world.get::<Transform>(e).unwrap().translation, Vec3::ZERO);
    }
}
