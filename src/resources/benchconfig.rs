//! Bench configuration resource.
//!
//! Manages runner settings loaded from an INI configuration file. Provides
//! defaults for a safe headless run and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [tick]
//! dt = 0.016666
//! ticks = 600
//! time_scale = 1.0
//!
//! [fixtures]
//! toggle_occupancy = reset
//! neutral_color = a0a0a0
//!
//! [report]
//! summary_every = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::spawner::OccupancyCarryOver;
use crate::components::tint::Rgba;
use crate::error::FixtureError;

/// Default safe values for startup
const DEFAULT_DT: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 600;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_SUMMARY_EVERY: u64 = 60;
const DEFAULT_CONFIG_PATH: &str = "./fixturebench.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Seconds per tick for the headless runner.
    pub dt: f32,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Multiplier applied to every tick's delta.
    pub time_scale: f32,
    /// Carry-over policy given to toggle slots that do not set their own.
    pub toggle_occupancy: OccupancyCarryOver,
    /// Idle color of input cubes, as `rrggbb` or `rrggbbaa` hex (no `#`, the
    /// INI parser treats it as a comment marker).
    pub neutral_color: Rgba,
    /// Log a summary every N ticks (0 disables).
    pub summary_every: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            dt: DEFAULT_DT,
            ticks: DEFAULT_TICKS,
            time_scale: DEFAULT_TIME_SCALE,
            toggle_occupancy: OccupancyCarryOver::Reset,
            neutral_color: Rgba::NEUTRAL,
            summary_every: DEFAULT_SUMMARY_EVERY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Present but
    /// invalid values are rejected.
    pub fn load_from_file(&mut self) -> Result<(), FixtureError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| FixtureError::Config(format!("failed to load config file: {}", e)))?;
        self.apply(&config)?;

        info!(
            "Loaded config: dt={}, ticks={}, time_scale={}, toggle_occupancy={:?}",
            self.dt, self.ticks, self.time_scale, self.toggle_occupancy
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), FixtureError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| FixtureError::Config(format!("failed to parse config: {}", e)))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), FixtureError> {
        // [tick] section
        if let Some(dt) = config.getfloat("tick", "dt").map_err(FixtureError::Config)? {
            let dt = dt as f32;
            if !(dt.is_finite() && dt > 0.0) {
                return Err(FixtureError::NonPositiveInterval {
                    what: "tick",
                    value: dt,
                });
            }
            self.dt = dt;
        }
        if let Some(ticks) = config.getuint("tick", "ticks").map_err(FixtureError::Config)? {
            self.ticks = ticks;
        }
        if let Some(scale) = config
            .getfloat("tick", "time_scale")
            .map_err(FixtureError::Config)?
        {
            if !(scale.is_finite() && scale >= 0.0) {
                return Err(FixtureError::Config(format!(
                    "time_scale must be finite and non-negative, got {}",
                    scale
                )));
            }
            self.time_scale = scale as f32;
        }

        // [fixtures] section
        if let Some(policy) = config.get("fixtures", "toggle_occupancy") {
            self.toggle_occupancy = policy.parse()?;
        }
        if let Some(hex) = config.get("fixtures", "neutral_color") {
            self.neutral_color = Rgba::from_hex(&hex)
                .ok_or_else(|| FixtureError::Config(format!("bad color `{}`", hex)))?;
        }

        // [report] section
        if let Some(every) = config
            .getuint("report", "summary_every")
            .map_err(FixtureError::Config)?
        {
            self.summary_every = every;
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), FixtureError> {
        let mut config = Ini::new();

        config.set("tick", "dt", Some(self.dt.to_string()));
        config.set("tick", "ticks", Some(self.ticks.to_string()));
        config.set("tick", "time_scale", Some(self.time_scale.to_string()));

        let policy = match self.toggle_occupancy {
            OccupancyCarryOver::Reset => "reset",
            OccupancyCarryOver::Inherit => "inherit",
        };
        config.set("fixtures", "toggle_occupancy", Some(policy.to_string()));
        let c = self.neutral_color;
        config.set(
            "fixtures",
            "neutral_color",
            Some(format!("{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)),
        );

        config.set("report", "summary_every", Some(self.summary_every.to_string()));

        config.write(&self.config_path).map_err(|source| FixtureError::Io {
            path: self.config_path.display().to_string(),
            source,
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::new();
        assert_eq!(config.ticks, DEFAULT_TICKS);
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.toggle_occupancy, OccupancyCarryOver::Reset);
        assert_eq!(config.neutral_color, Rgba::NEUTRAL);
    }

    #[test]
    fn test_partial_ini_keeps_defaults() {
        let mut config = BenchConfig::new();
        config
            .load_from_str("[tick]\nticks = 10\n[fixtures]\ntoggle_occupancy = inherit\n")
            .unwrap();
        assert_eq!(config.ticks, 10);
        assert_eq!(config.dt, DEFAULT_DT);
        assert_eq!(config.toggle_occupancy, OccupancyCarryOver::Inherit);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = BenchConfig::new();
        assert!(config.load_from_str("[tick]\ndt = 0\n").is_err());
        assert!(config.load_from_str("[tick]\ndt = fast\n").is_err());
        assert!(config.load_from_str("[fixtures]\ntoggle_occupancy = maybe\n").is_err());
        assert!(config.load_from_str("[fixtures]\nneutral_color = 12\n").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = BenchConfig::with_path("/nonexistent/fixturebench.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, BenchConfig::with_path("/nonexistent/fixturebench.ini"));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "fixturebench_config_{}.ini",
            std::process::id()
        ));
        let mut saved = BenchConfig::with_path(&path);
        saved.ticks = 42;
        saved.time_scale = 0.5;
        saved.toggle_occupancy = OccupancyCarryOver::Inherit;
        saved.neutral_color = Rgba::new(1, 2, 3, 4);
        saved.save_to_file().unwrap();

        let mut loaded = BenchConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.ticks, 42);
        assert_eq!(loaded.time_scale, 0.5);
        assert_eq!(loaded.toggle_occupancy, OccupancyCarryOver::Inherit);
        assert_eq!(loaded.neutral_color, Rgba::new(1, 2, 3, 4));
    }
}
