//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 1000
//! height = 480
//!
//! [timing]
//! target_fps = 60
//! animation_speed = 4
//!
//! [world]
//! scroll_speed = 8
//! hazard_spacing_min = 300
//! hazard_spacing_max = 500
//! distance_unit = 50
//! seed = 0
//!
//! [player]
//! fly_acceleration = -0.5
//! fall_acceleration = 0.5
//! start_x_fraction = 0.125
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 1000;
const DEFAULT_SCREEN_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ANIMATION_SPEED: u32 = 4;
const DEFAULT_SCROLL_SPEED: f32 = 8.0;
const DEFAULT_HAZARD_SPACING_MIN: u32 = 300;
const DEFAULT_HAZARD_SPACING_MAX: u32 = 500;
const DEFAULT_DISTANCE_UNIT: u32 = 50;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_FLY_ACCELERATION: f32 = -0.5;
const DEFAULT_FALL_ACCELERATION: f32 = 0.5;
const DEFAULT_START_X_FRACTION: f32 = 0.125;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the playfield size, tick pacing, world tuning and player physics.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Playfield width in pixels.
    pub screen_width: u32,
    /// Playfield height in pixels.
    pub screen_height: u32,
    /// Ticks per second the driver aims for.
    pub target_fps: u32,
    /// Ticks per animation frame.
    pub animation_speed: u32,
    /// World scroll in pixels per tick.
    pub scroll_speed: f32,
    pub hazard_spacing_min: u32,
    pub hazard_spacing_max: u32,
    /// Pixels per scoreboard distance unit.
    pub distance_unit: u32,
    /// Seed for hazard placement.
    pub seed: u64,
    /// Vertical acceleration while the jetpack is on (negative is up).
    pub fly_acceleration: f32,
    /// Vertical acceleration otherwise.
    pub fall_acceleration: f32,
    /// Player x position as a fraction of the screen width.
    pub start_x_fraction: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            hazard_spacing_min: DEFAULT_HAZARD_SPACING_MIN,
            hazard_spacing_max: DEFAULT_HAZARD_SPACING_MAX,
            distance_unit: DEFAULT_DISTANCE_UNIT,
            seed: DEFAULT_SEED,
            fly_acceleration: DEFAULT_FLY_ACCELERATION,
            fall_acceleration: DEFAULT_FALL_ACCELERATION,
            start_x_fraction: DEFAULT_START_X_FRACTION,
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
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [timing] section
        if let Some(fps) = config.getuint("timing", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(speed) = config.getuint("timing", "animation_speed").ok().flatten() {
            self.animation_speed = speed as u32;
        }

        // [world] section
        if let Some(speed) = config.getfloat("world", "scroll_speed").ok().flatten() {
            self.scroll_speed = speed as f32;
        }
        if let Some(min) = config.getuint("world", "hazard_spacing_min").ok().flatten() {
            self.hazard_spacing_min = min as u32;
        }
        if let Some(max) = config.getuint("world", "hazard_spacing_max").ok().flatten() {
            self.hazard_spacing_max = max as u32;
        }
        if let Some(unit) = config.getuint("world", "distance_unit").ok().flatten() {
            self.distance_unit = unit as u32;
        }
        if let Some(seed) = config.getuint("world", "seed").ok().flatten() {
            self.seed = seed;
        }

        // [player] section
        if let Some(accel) = config.getfloat("player", "fly_acceleration").ok().flatten() {
            self.fly_acceleration = accel as f32;
        }
        if let Some(accel) = config.getfloat("player", "fall_acceleration").ok().flatten() {
            self.fall_acceleration = accel as f32;
        }
        if let Some(fraction) = config.getfloat("player", "start_x_fraction").ok().flatten() {
            self.start_x_fraction = fraction as f32;
        }

        info!(
            "Loaded config: {}x{} screen, fps={}, anim_speed={}, scroll={}, spacing={}..={}, seed={}",
            self.screen_width,
            self.screen_height,
            self.target_fps,
            self.animation_speed,
            self.scroll_speed,
            self.hazard_spacing_min,
            self.hazard_spacing_max,
            self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [screen] section
        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        // [timing] section
        config.set("timing", "target_fps", Some(self.target_fps.to_string()));
        config.set("timing", "animation_speed", Some(self.animation_speed.to_string()));

        // [world] section
        config.set("world", "scroll_speed", Some(self.scroll_speed.to_string()));
        config.set("world", "hazard_spacing_min", Some(self.hazard_spacing_min.to_string()));
        config.set("world", "hazard_spacing_max", Some(self.hazard_spacing_max.to_string()));
        config.set("world", "distance_unit", Some(self.distance_unit.to_string()));
        config.set("world", "seed", Some(self.seed.to_string()));

        // [player] section
        config.set("player", "fly_acceleration", Some(self.fly_acceleration.to_string()));
        config.set("player", "fall_acceleration", Some(self.fall_acceleration.to_string()));
        config.set("player", "start_x_fraction", Some(self.start_x_fraction.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the screen size.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    /// Seconds per tick for a frame limiter, `None` when unlimited.
    pub fn frame_duration(&self) -> Option<std::time::Duration> {
        (self.target_fps > 0).then(|| std::time::Duration::from_secs_f64(1.0 / self.target_fps as f64))
    }
}
