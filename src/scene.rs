//! Fixture scene catalog.
//!
//! A [`SceneDescription`] lists every interactive fixture of a test scene:
//! input cubes, the master cube, trigger volumes, periodic spawners, toggle
//! slots and animated props. It is plain serde data and can be loaded from or
//! dumped to JSON. [`SceneDescription::builtin`] provides the default scene the
//! runner uses when no file is given.
//!
//! [`spawn_scene`] validates the whole description before it creates a single
//! entity, so a bad catalog never leaves a half-built world behind. Each
//! spawned fixture is registered by name in the
//! [`FixtureRegistry`](crate::resources::registry::FixtureRegistry).
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "input_cubes": [
//!     { "name": "jump_cube", "position": [0.0, 0.5, 0.0],
//!       "bindings": [{ "action": "jump" }] }
//!   ],
//!   "master_cube": { "name": "master_cube", "position": [0.0, 0.5, -3.0] },
//!   "trigger_volumes": [
//!     { "name": "player_zone", "layers": ["player"], "stay_counter": true }
//!   ],
//!   "spawners": [
//!     { "name": "bullets", "direction": [0.0, 0.0, 1.0], "speed": 8.0,
//!       "spawn_interval": 1.0, "item_lifetime": 2.0 }
//!   ],
//!   "toggle_slots": [
//!     { "name": "blinker", "interval": 2.0, "layers": ["player"], "carry_over": "inherit" }
//!   ],
//!   "props": [
//!     { "name": "bobber", "tweens": [{ "target": "position", "from": [0,0,0],
//!       "to": [0,1,0], "duration": 1.5, "loop_mode": "yoyo" }] }
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::components::fixturename::FixtureName;
use crate::components::hovertext::HoverText;
use crate::components::inputcube::{ActionBinding, HoverState, InputCube};
use crate::components::motion::{Spin, TextureScroll};
use crate::components::spawner::{OccupancyCarryOver, PeriodicSpawner, SpawnerConfig, ToggleSlot};
use crate::components::tint::{Emissive, Rgba, Tint};
use crate::components::transform::{TextureOffset, Transform};
use crate::components::trigger::{
    OccupancyStyle, SolidOverlap, StayCounter, TriggerOccupancy, TriggerVolume,
};
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenRotation, TweenScale};
use crate::error::FixtureError;
use crate::events::input::ActionId;
use crate::events::trigger::{CollisionLayer, LayerMask};
use crate::resources::benchconfig::BenchConfig;
use crate::resources::registry::{FixtureKind, FixtureRegistry};
use crate::systems::visuals::stay_label;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BindingDesc {
    pub action: ActionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputCubeDesc {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
    pub bindings: Vec<BindingDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<Rgba>,
}

/// Cube bound to every action, showing the "press any key" prompt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MasterCubeDesc {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TriggerVolumeDesc {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
    pub layers: Vec<CollisionLayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<OccupancyStyle>,
    #[serde(default)]
    pub stay_counter: bool,
    /// The volume overlaps a solid collider of the same shape.
    #[serde(default)]
    pub solid_overlap: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpawnerDesc {
    pub name: String,
    #[serde(default)]
    pub origin: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub spawn_interval: f32,
    pub item_lifetime: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_color: Option<Rgba>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToggleSlotDesc {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
    pub interval: f32,
    pub layers: Vec<CollisionLayer>,
    /// Falls back to the runner configuration when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry_over: Option<OccupancyCarryOver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<OccupancyStyle>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TweenTarget {
    Position,
    Rotation,
    Scale,
}

/// Bounded tween. Rotation values are XYZ Euler angles in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TweenDesc {
    pub target: TweenTarget,
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub loop_mode: LoopMode,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpinDesc {
    pub axis: Vec3,
    pub degrees_per_second: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropDesc {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tweens: Vec<TweenDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spin: Option<SpinDesc>,
    /// Texture scroll velocity in UV units per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<Vec2>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SceneDescription {
    pub input_cubes: Vec<InputCubeDesc>,
    pub master_cube: Option<MasterCubeDesc>,
    pub trigger_volumes: Vec<TriggerVolumeDesc>,
    pub spawners: Vec<SpawnerDesc>,
    pub toggle_slots: Vec<ToggleSlotDesc>,
    pub props: Vec<PropDesc>,
}

/// Offset of the `index`-th fixture in a row starting at `origin`.
fn row(origin: Vec3, index: usize) -> Vec3 {
    origin + Vec3::new(index as f32 * 3.0, 0.0, 0.0)
}

impl SceneDescription {
    /// The default fixture scene.
    pub fn builtin() -> Self {
        let cube_row = Vec3::new(-6.0, 0.5, 0.0);
        let cube = |index: usize, name: &str, actions: &[ActionId]| InputCubeDesc {
            name: name.to_string(),
            position: row(cube_row, index),
            bindings: actions
                .iter()
                .map(|&action| BindingDesc {
                    action,
                    color: None,
                    prompt: None,
                })
                .collect(),
            hover_color: None,
        };

        let zone_row = Vec3::new(-6.0, 1.0, 8.0);
        let zone = |index: usize, name: &str, layers: &[CollisionLayer]| TriggerVolumeDesc {
            name: name.to_string(),
            position: row(zone_row, index),
            layers: layers.to_vec(),
            style: None,
            stay_counter: false,
            solid_overlap: false,
        };

        let prop_row = Vec3::new(-6.0, 0.0, 16.0);

        Self {
            input_cubes: vec![
                cube(
                    0,
                    "move_cube",
                    &[
                        ActionId::MoveForward,
                        ActionId::MoveBack,
                        ActionId::MoveLeft,
                        ActionId::MoveRight,
                    ],
                ),
                cube(1, "jump_cube", &[ActionId::Jump]),
                cube(2, "crouch_cube", &[ActionId::Crouch, ActionId::Sprint]),
                cube(3, "interact_cube", &[ActionId::Interact]),
                cube(
                    4,
                    "fire_cube",
                    &[
                        ActionId::PrimaryFire,
                        ActionId::SecondaryFire,
                        ActionId::Reload,
                    ],
                ),
            ],
            master_cube: Some(MasterCubeDesc {
                name: "master_cube".to_string(),
                position: Vec3::new(0.0, 0.5, -4.0),
            }),
            trigger_volumes: vec![
                TriggerVolumeDesc {
                    stay_counter: true,
                    ..zone(0, "player_zone", &[CollisionLayer::Player])
                },
                zone(1, "physics_zone", &[CollisionLayer::Physics]),
                TriggerVolumeDesc {
                    stay_counter: true,
                    ..zone(
                        2,
                        "shared_zone",
                        &[CollisionLayer::Player, CollisionLayer::Physics],
                    )
                },
                zone(3, "pointer_zone", &[CollisionLayer::Pointer]),
                TriggerVolumeDesc {
                    solid_overlap: true,
                    ..zone(4, "blocked_zone", &[CollisionLayer::Player])
                },
            ],
            spawners: vec![SpawnerDesc {
                name: "bullet_spawner".to_string(),
                origin: Vec3::new(10.0, 1.0, 0.0),
                direction: Vec3::Z,
                speed: 8.0,
                spawn_interval: 1.0,
                item_lifetime: 2.0,
                item_color: None,
            }],
            toggle_slots: vec![ToggleSlotDesc {
                name: "blinking_zone".to_string(),
                position: Vec3::new(10.0, 1.0, 8.0),
                interval: 2.0,
                layers: vec![CollisionLayer::Player],
                carry_over: None,
                style: None,
            }],
            props: vec![
                PropDesc {
                    name: "bobbing_platform".to_string(),
                    position: row(prop_row, 0),
                    color: None,
                    tweens: vec![TweenDesc {
                        target: TweenTarget::Position,
                        from: row(prop_row, 0),
                        to: row(prop_row, 0) + Vec3::Y * 2.0,
                        duration: 2.0,
                        easing: Easing::QuadInOut,
                        loop_mode: LoopMode::Yoyo,
                    }],
                    spin: None,
                    scroll: None,
                },
                PropDesc {
                    name: "swinging_door".to_string(),
                    position: row(prop_row, 1),
                    color: Some(Rgba::BROWN),
                    tweens: vec![TweenDesc {
                        target: TweenTarget::Rotation,
                        from: Vec3::ZERO,
                        to: Vec3::new(0.0, 90.0, 0.0),
                        duration: 1.5,
                        easing: Easing::CubicInOut,
                        loop_mode: LoopMode::Yoyo,
                    }],
                    spin: None,
                    scroll: None,
                },
                PropDesc {
                    name: "pulsing_pad".to_string(),
                    position: row(prop_row, 2),
                    color: Some(Rgba::PINK),
                    tweens: vec![TweenDesc {
                        target: TweenTarget::Scale,
                        from: Vec3::ONE,
                        to: Vec3::splat(1.5),
                        duration: 0.75,
                        easing: Easing::Linear,
                        loop_mode: LoopMode::Restart,
                    }],
                    spin: None,
                    scroll: None,
                },
                PropDesc {
                    name: "turntable".to_string(),
                    position: row(prop_row, 3),
                    color: Some(Rgba::LIME),
                    tweens: Vec::new(),
                    spin: Some(SpinDesc {
                        axis: Vec3::Y,
                        degrees_per_second: 45.0,
                    }),
                    scroll: None,
                },
                PropDesc {
                    name: "conveyor".to_string(),
                    position: row(prop_row, 4),
                    color: Some(Rgba::YELLOW),
                    tweens: Vec::new(),
                    spin: None,
                    scroll: Some(Vec2::new(0.0, 0.5)),
                },
            ],
        }
    }

    /// Loads a scene description from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the scene description as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Number of fixtures the description will spawn.
    pub fn fixture_count(&self) -> usize {
        self.input_cubes.len()
            + usize::from(self.master_cube.is_some())
            + self.trigger_volumes.len()
            + self.spawners.len()
            + self.toggle_slots.len()
            + self.props.len()
    }
}

/// Animation attachments of a prop.
#[derive(Default)]
struct PropAnimation {
    position: Option<TweenPosition>,
    rotation: Option<TweenRotation>,
    scale: Option<TweenScale>,
    spin: Option<Spin>,
    scroll: Option<TextureScroll>,
}

enum FixtureBody {
    Cube(InputCube),
    Volume {
        volume: TriggerVolume,
        style: OccupancyStyle,
        stay_counter: bool,
        solid_overlap: bool,
    },
    Spawner(PeriodicSpawner),
    Slot(ToggleSlot),
    Prop {
        color: Rgba,
        animation: PropAnimation,
    },
}

impl FixtureBody {
    fn kind(&self) -> FixtureKind {
        match self {
            FixtureBody::Cube(_) => FixtureKind::InputCube,
            FixtureBody::Volume { .. } => FixtureKind::TriggerVolume,
            FixtureBody::Spawner(_) => FixtureKind::Spawner,
            FixtureBody::Slot(_) => FixtureKind::ToggleSlot,
            FixtureBody::Prop { .. } => FixtureKind::Prop,
        }
    }
}

/// A fixture that passed validation and only needs spawning.
struct PreparedFixture {
    name: String,
    position: Vec3,
    body: FixtureBody,
}

fn layer_filter(name: &str, layers: &[CollisionLayer]) -> Result<LayerMask, FixtureError> {
    let mask = LayerMask::of(layers);
    if mask.is_empty() {
        return Err(FixtureError::EmptyLayerFilter(name.to_string()));
    }
    Ok(mask)
}

fn prepare_cube(desc: &InputCubeDesc, config: &BenchConfig) -> Result<InputCube, FixtureError> {
    let bindings = desc.bindings.iter().map(|b| {
        let mut binding = ActionBinding::new(b.action);
        if let Some(color) = b.color {
            binding = binding.with_color(color);
        }
        if let Some(prompt) = &b.prompt {
            binding = binding.with_prompt(prompt.clone());
        }
        binding
    });
    let mut cube = InputCube::new(&desc.name, bindings)?.with_neutral_color(config.neutral_color);
    if let Some(hover) = desc.hover_color {
        cube = cube.with_hover_color(hover);
    }
    Ok(cube)
}

fn prepare_prop(desc: &PropDesc) -> Result<PropAnimation, FixtureError> {
    let mut animation = PropAnimation::default();
    let mut seen = FxHashSet::default();
    for tween in &desc.tweens {
        if !seen.insert(tween.target) {
            return Err(FixtureError::InvalidTween(format!(
                "prop `{}` animates {:?} twice",
                desc.name, tween.target
            )));
        }
        match tween.target {
            TweenTarget::Position => {
                animation.position = Some(
                    TweenPosition::new(tween.from, tween.to, tween.duration)?
                        .with_easing(tween.easing)
                        .with_loop_mode(tween.loop_mode),
                );
            }
            TweenTarget::Rotation => {
                animation.rotation = Some(
                    TweenRotation::new(tween.from, tween.to, tween.duration)?
                        .with_easing(tween.easing)
                        .with_loop_mode(tween.loop_mode),
                );
            }
            TweenTarget::Scale => {
                animation.scale = Some(
                    TweenScale::new(tween.from, tween.to, tween.duration)?
                        .with_easing(tween.easing)
                        .with_loop_mode(tween.loop_mode),
                );
            }
        }
    }
    if let Some(spin) = &desc.spin {
        // a rotation tween writes absolute rotations and would swallow the spin
        if animation.rotation.is_some() {
            return Err(FixtureError::InvalidTween(format!(
                "prop `{}` has both a rotation tween and a spin",
                desc.name
            )));
        }
        animation.spin = Some(Spin::new(spin.axis, spin.degrees_per_second)?);
    }
    if let Some(velocity) = desc.scroll {
        if !velocity.is_finite() {
            return Err(FixtureError::InvalidTween(format!(
                "prop `{}` has a non-finite scroll velocity",
                desc.name
            )));
        }
        animation.scroll = Some(TextureScroll { velocity });
    }
    Ok(animation)
}

/// Validate every fixture of `desc`, in catalog order.
fn prepare(
    desc: &SceneDescription,
    config: &BenchConfig,
    registry: &FixtureRegistry,
) -> Result<Vec<PreparedFixture>, FixtureError> {
    let mut prepared = Vec::with_capacity(desc.fixture_count());

    for cube in &desc.input_cubes {
        prepared.push(PreparedFixture {
            name: cube.name.clone(),
            position: cube.position,
            body: FixtureBody::Cube(prepare_cube(cube, config)?),
        });
    }
    if let Some(master) = &desc.master_cube {
        prepared.push(PreparedFixture {
            name: master.name.clone(),
            position: master.position,
            body: FixtureBody::Cube(InputCube::master().with_neutral_color(config.neutral_color)),
        });
    }
    for volume in &desc.trigger_volumes {
        prepared.push(PreparedFixture {
            name: volume.name.clone(),
            position: volume.position,
            body: FixtureBody::Volume {
                volume: TriggerVolume::new(layer_filter(&volume.name, &volume.layers)?),
                style: volume.style.unwrap_or_default(),
                stay_counter: volume.stay_counter,
                solid_overlap: volume.solid_overlap,
            },
        });
    }
    for spawner in &desc.spawners {
        let mut spawner_config = SpawnerConfig::new(
            spawner.origin,
            spawner.direction,
            spawner.speed,
            spawner.spawn_interval,
            spawner.item_lifetime,
        )?;
        if let Some(color) = spawner.item_color {
            spawner_config = spawner_config.with_item_color(color);
        }
        prepared.push(PreparedFixture {
            name: spawner.name.clone(),
            position: spawner.origin,
            body: FixtureBody::Spawner(PeriodicSpawner::new(spawner_config)),
        });
    }
    for slot in &desc.toggle_slots {
        let layers = layer_filter(&slot.name, &slot.layers)?;
        let toggle = ToggleSlot::new(slot.position, slot.interval, layers)?
            .with_carry_over(slot.carry_over.unwrap_or(config.toggle_occupancy))
            .with_style(slot.style.unwrap_or_default());
        prepared.push(PreparedFixture {
            name: slot.name.clone(),
            position: slot.position,
            body: FixtureBody::Slot(toggle),
        });
    }
    for prop in &desc.props {
        prepared.push(PreparedFixture {
            name: prop.name.clone(),
            position: prop.position,
            body: FixtureBody::Prop {
                color: prop.color.unwrap_or(Rgba::WHITE),
                animation: prepare_prop(prop)?,
            },
        });
    }

    let mut names = FxHashSet::default();
    for fixture in &prepared {
        if fixture.name.trim().is_empty() {
            return Err(FixtureError::Config("fixture name must not be empty".into()));
        }
        if !names.insert(fixture.name.as_str()) || registry.get(&fixture.name).is_some() {
            return Err(FixtureError::DuplicateName(fixture.name.clone()));
        }
    }
    Ok(prepared)
}

fn spawn_fixture(world: &mut World, fixture: PreparedFixture) -> Entity {
    let mut entity = world.spawn((
        FixtureName::new(fixture.name),
        Transform::from_translation(fixture.position),
    ));
    match fixture.body {
        FixtureBody::Cube(cube) => {
            let prompt = cube.default_prompt();
            entity.insert((
                Tint::new(cube.current_color()),
                Emissive::default(),
                HoverText::new(prompt.clone()),
                HoverState::new(prompt),
                cube,
            ));
        }
        FixtureBody::Volume {
            volume,
            style,
            stay_counter,
            solid_overlap,
        } => {
            entity.insert((
                volume,
                TriggerOccupancy::default(),
                Tint::new(style.color_for(false)),
                style,
            ));
            if stay_counter {
                entity.insert((StayCounter, HoverText::new(stay_label(0))));
            }
            if solid_overlap {
                entity.insert(SolidOverlap);
            }
        }
        FixtureBody::Spawner(spawner) => {
            entity.insert(spawner);
        }
        FixtureBody::Slot(slot) => {
            entity.insert(slot);
        }
        FixtureBody::Prop { color, animation } => {
            entity.insert(Tint::new(color));
            if let Some(tween) = animation.position {
                entity.insert(tween);
            }
            if let Some(tween) = animation.rotation {
                entity.insert(tween);
            }
            if let Some(tween) = animation.scale {
                entity.insert(tween);
            }
            if let Some(spin) = animation.spin {
                entity.insert(spin);
            }
            if let Some(scroll) = animation.scroll {
                entity.insert((scroll, TextureOffset::default()));
            }
        }
    }
    entity.id()
}

/// Validate `desc` and spawn all of its fixtures into `world`.
///
/// Nothing is spawned if any fixture is invalid or any name is already taken.
/// Returns the number of fixtures spawned.
pub fn spawn_scene(
    world: &mut World,
    desc: &SceneDescription,
    config: &BenchConfig,
) -> Result<usize, FixtureError> {
    world.init_resource::<FixtureRegistry>();
    let prepared = prepare(desc, config, world.resource::<FixtureRegistry>())?;
    let count = prepared.len();

    for fixture in prepared {
        let name = fixture.name.clone();
        let kind = fixture.body.kind();
        let entity = spawn_fixture(world, fixture);
        world
            .resource_mut::<FixtureRegistry>()
            .register(name, kind, entity)?;
    }

    info!("Spawned {} fixtures", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scene_spawns_everything() {
        let mut world = World::new();
        let desc = SceneDescription::builtin();
        let count = spawn_scene(&mut world, &desc, &BenchConfig::new()).unwrap();
        assert_eq!(count, desc.fixture_count());

        let registry = world.resource::<FixtureRegistry>();
        assert_eq!(registry.len(), count);
        let master = registry
            .get_kind("master_cube", FixtureKind::InputCube)
            .unwrap();
        let text = world.get::<HoverText>(master).unwrap();
        assert_eq!(text.content, "press any key");

        let zone = registry.get("player_zone").unwrap();
        assert!(world.get::<StayCounter>(zone).is_some());
        assert_eq!(world.get::<HoverText>(zone).unwrap().content, "Stay: 0");
        let blocked = registry.get("blocked_zone").unwrap();
        assert!(world.get::<SolidOverlap>(blocked).is_some());
    }

    #[test]
    fn test_builtin_scene_json_round_trip() {
        let desc = SceneDescription::builtin();
        let json = serde_json::to_string(&desc).unwrap();
        let back: SceneDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let desc: SceneDescription = serde_json::from_str(
            r#"{ "toggle_slots": [{ "name": "slot", "interval": 1.0, "layers": ["player"] }] }"#,
        )
        .unwrap();
        let mut config = BenchConfig::new();
        config.toggle_occupancy = OccupancyCarryOver::Inherit;

        let mut world = World::new();
        spawn_scene(&mut world, &desc, &config).unwrap();
        let slot = world.resource::<FixtureRegistry>().get("slot").unwrap();
        let slot = world.get::<ToggleSlot>(slot).unwrap();
        assert_eq!(slot.carry_over, OccupancyCarryOver::Inherit);
        assert_eq!(slot.position, Vec3::ZERO);
    }

    #[test]
    fn test_invalid_fixture_spawns_nothing() {
        let mut desc = SceneDescription::builtin();
        desc.spawners[0].item_lifetime = 0.0;

        let mut world = World::new();
        let err = spawn_scene(&mut world, &desc, &BenchConfig::new()).unwrap_err();
        assert!(matches!(err, FixtureError::NonPositiveLifetime(_)));
        assert_eq!(world.query::<&FixtureName>().iter(&world).count(), 0);
        assert!(world.resource::<FixtureRegistry>().is_empty());
    }

    #[test]
    fn test_empty_bindings_and_layers_rejected() {
        let mut desc = SceneDescription::default();
        desc.input_cubes.push(InputCubeDesc {
            name: "mute".into(),
            position: Vec3::ZERO,
            bindings: Vec::new(),
            hover_color: None,
        });
        let mut world = World::new();
        assert!(matches!(
            spawn_scene(&mut world, &desc, &BenchConfig::new()),
            Err(FixtureError::EmptyActionSet(_))
        ));

        let mut desc = SceneDescription::default();
        desc.trigger_volumes.push(TriggerVolumeDesc {
            name: "deaf".into(),
            position: Vec3::ZERO,
            layers: Vec::new(),
            style: None,
            stay_counter: false,
            solid_overlap: false,
        });
        assert!(matches!(
            spawn_scene(&mut world, &desc, &BenchConfig::new()),
            Err(FixtureError::EmptyLayerFilter(_))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut desc = SceneDescription::builtin();
        desc.props[0].name = "jump_cube".into();
        let mut world = World::new();
        assert!(matches!(
            spawn_scene(&mut world, &desc, &BenchConfig::new()),
            Err(FixtureError::DuplicateName(name)) if name == "jump_cube"
        ));

        let mut world = World::new();
        spawn_scene(&mut world, &SceneDescription::builtin(), &BenchConfig::new()).unwrap();
        assert!(spawn_scene(&mut world, &SceneDescription::builtin(), &BenchConfig::new()).is_err());
    }

    #[test]
    fn test_rotation_tween_with_spin_rejected() {
        let desc: SceneDescription = serde_json::from_str(
            r#"{ "props": [{
                "name": "wobbler",
                "tweens": [{ "target": "rotation", "from": [0, 0, 0],
                             "to": [0, 90, 0], "duration": 1.0 }],
                "spin": { "axis": [0, 1, 0], "degrees_per_second": 45.0 }
            }] }"#,
        )
        .unwrap();
        let mut world = World::new();
        let err = spawn_scene(&mut world, &desc, &BenchConfig::new()).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidTween(msg) if msg.contains("wobbler")));
        assert!(world.resource::<FixtureRegistry>().is_empty());

        // spin alongside a position tween is fine
        let desc: SceneDescription = serde_json::from_str(
            r#"{ "props": [{
                "name": "bobbing_spinner",
                "tweens": [{ "target": "position", "from": [0, 0, 0],
                             "to": [0, 1, 0], "duration": 1.0 }],
                "spin": { "axis": [0, 1, 0], "degrees_per_second": 45.0 }
            }] }"#,
        )
        .unwrap();
        assert_eq!(spawn_scene(&mut world, &desc, &BenchConfig::new()).unwrap(), 1);
    }

    #[test]
    fn test_repeated_tween_target_rejected() {
        let mut desc = SceneDescription::builtin();
        let tween = desc.props[0].tweens[0].clone();
        desc.props[0].tweens.push(tween);
        let mut world = World::new();
        assert!(matches!(
            spawn_scene(&mut world, &desc, &BenchConfig::new()),
            Err(FixtureError::InvalidTween(_))
        ));
    }
}
