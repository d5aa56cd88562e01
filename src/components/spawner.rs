//! Timed spawn/despawn pools.
//!
//! Two timing patterns are supported:
//!
//! - [`PeriodicSpawner`] creates one item every `spawn_interval` seconds at the
//!   spawner origin, attaches an unbounded linear motion, and destroys the item
//!   once its absolute death time has passed.
//! - [`ToggleSlot`] owns at most one live trigger-volume instance and flips
//!   between "exists" and "absent" every `interval` seconds.
//!
//! # Timing
//!
//! Both timers reset to zero when they fire instead of subtracting the period.
//! A long frame therefore produces a single spawn or toggle and drops the
//! remainder; there is no catch-up burst.
//!
//! # Related
//!
//! - [`crate::systems::spawner`] – systems that advance these timers

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::tint::Rgba;
use crate::components::trigger::OccupancyStyle;
use crate::error::FixtureError;
use crate::events::trigger::LayerMask;

fn positive_interval(what: &'static str, value: f32) -> Result<f32, FixtureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FixtureError::NonPositiveInterval { what, value })
    }
}

/// Immutable parameters of a periodic spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnerConfig {
    pub origin: Vec3,
    /// Unit vector.
    pub direction: Vec3,
    pub speed: f32,
    pub spawn_interval: f32,
    pub item_lifetime: f32,
    pub item_color: Rgba,
}

impl SpawnerConfig {
    /// Validate and build a spawner configuration.
    ///
    /// `direction` is normalized; interval and lifetime must be positive.
    pub fn new(
        origin: Vec3,
        direction: Vec3,
        speed: f32,
        spawn_interval: f32,
        item_lifetime: f32,
    ) -> Result<Self, FixtureError> {
        let spawn_interval = positive_interval("spawner", spawn_interval)?;
        if !(item_lifetime.is_finite() && item_lifetime > 0.0) {
            return Err(FixtureError::NonPositiveLifetime(item_lifetime));
        }
        let direction = direction.try_normalize().ok_or(FixtureError::InvalidDirection {
            what: "spawner direction",
        })?;
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(FixtureError::Config(format!(
                "spawner speed must be finite and non-negative, got {}",
                speed
            )));
        }
        Ok(Self {
            origin,
            direction,
            speed,
            spawn_interval,
            item_lifetime,
            item_color: Rgba::ORANGE,
        })
    }

    pub fn with_item_color(mut self, color: Rgba) -> Self {
        self.item_color = color;
        self
    }
}

/// A live item owned by a spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolItem {
    pub item: Entity,
    /// Absolute world time after which the item is destroyed.
    pub death_time: f32,
}

/// Runtime state of a periodic continuous-motion spawner.
#[derive(Component, Debug, Clone)]
pub struct PeriodicSpawner {
    pub config: SpawnerConfig,
    pub time_since_last_spawn: f32,
    /// Insertion ordered, oldest first. Lifetime is constant per spawner, so
    /// this is also death-time order.
    pub active_items: VecDeque<PoolItem>,
    pub spawned_total: u64,
    /// Items removed from the pool, including ones destroyed elsewhere first.
    pub despawned_total: u64,
}

impl PeriodicSpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            time_since_last_spawn: 0.0,
            active_items: VecDeque::new(),
            spawned_total: 0,
            despawned_total: 0,
        }
    }

    /// Advance the spawn timer. Returns `true` when an item is due this tick.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.time_since_last_spawn += dt;
        if self.time_since_last_spawn >= self.config.spawn_interval {
            self.time_since_last_spawn = 0.0;
            return true;
        }
        false
    }

    /// Record a freshly spawned item. Its death time lies strictly in the future.
    pub fn track(&mut self, item: Entity, now: f32) {
        self.active_items.push_back(PoolItem {
            item,
            death_time: now + self.config.item_lifetime,
        });
        self.spawned_total += 1;
    }

    /// Remove and return every item whose death time has passed (`death_time < now`).
    ///
    /// Stops at the first item still alive.
    pub fn drain_expired(&mut self, now: f32) -> Vec<Entity> {
        let mut expired = Vec::new();
        while let Some(front) = self.active_items.front() {
            if front.death_time >= now {
                break;
            }
            expired.push(front.item);
            self.active_items.pop_front();
        }
        self.despawned_total += expired.len() as u64;
        expired
    }
}

/// Marks an entity as owned by a spawn pool.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedBy(pub Entity);

/// What a toggle slot remembers about occupancy when its instance is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyCarryOver {
    /// The next incarnation starts unoccupied.
    #[default]
    Reset,
    /// The next incarnation starts with whoever was inside at deletion.
    Inherit,
}

impl std::str::FromStr for OccupancyCarryOver {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(OccupancyCarryOver::Reset),
            "inherit" => Ok(OccupancyCarryOver::Inherit),
            other => Err(FixtureError::Config(format!(
                "unknown occupancy carry-over `{}` (expected reset or inherit)",
                other
            ))),
        }
    }
}

/// Single-slot create/delete fixture with a 50% duty cycle.
#[derive(Component, Debug, Clone)]
pub struct ToggleSlot {
    pub position: Vec3,
    pub interval: f32,
    pub timer: f32,
    /// The live instance, if any.
    pub current: Option<Entity>,
    /// Participant types inside the last instance when it was deleted, after
    /// applying `carry_over`.
    pub last_known: LayerMask,
    pub carry_over: OccupancyCarryOver,
    /// Layer filter given to every instance.
    pub layers: LayerMask,
    pub style: OccupancyStyle,
}

impl ToggleSlot {
    pub fn new(position: Vec3, interval: f32, layers: LayerMask) -> Result<Self, FixtureError> {
        Ok(Self {
            position,
            interval: positive_interval("toggle slot", interval)?,
            timer: 0.0,
            current: None,
            last_known: LayerMask::EMPTY,
            carry_over: OccupancyCarryOver::Reset,
            layers,
            style: OccupancyStyle::default(),
        })
    }

    pub fn with_carry_over(mut self, carry_over: OccupancyCarryOver) -> Self {
        self.carry_over = carry_over;
        self
    }

    pub fn with_style(mut self, style: OccupancyStyle) -> Self {
        self.style = style;
        self
    }

    /// Advance the toggle timer. Returns `true` when the slot flips this tick.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer >= self.interval {
            self.timer = 0.0;
            return true;
        }
        false
    }

    pub fn last_known_occupancy(&self) -> bool {
        !self.last_known.is_empty()
    }

    /// Remember the occupancy of an instance about to be deleted.
    pub fn remember(&mut self, inside: LayerMask) {
        self.last_known = match self.carry_over {
            OccupancyCarryOver::Reset => LayerMask::EMPTY,
            OccupancyCarryOver::Inherit => inside,
        };
    }
}
