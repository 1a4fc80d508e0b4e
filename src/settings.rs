//! Game settings
//!
//! Static values are fixed for the process lifetime and may be overridden from
//! a JSON file. Dynamic values are reset at the start of every game and scaled
//! up each time the player clears a fleet.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// RGB color triple
pub type Rgb = (u8, u8, u8);

/// Values that change while a game is played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicSettings {
    /// World units per tick
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_bullet_speed: f32,
    /// 1.0 moves the fleet right, -1.0 moves it left
    pub fleet_direction: f32,
    /// Points awarded per alien destroyed
    pub alien_points: u32,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: 0.7,
            bullet_speed: 1.5,
            alien_speed: 0.2,
            alien_bullet_speed: 0.5,
            fleet_direction: 1.0,
            alien_points: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    // === Ship ===
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_color: Rgb,
    pub ship_limit: u32,

    // === Bullets ===
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,
    pub alien_bullet_color: Rgb,
    /// Alien bullets cost the player a ship when they hit it
    pub alien_bullets_hit_ship: bool,

    // === Aliens ===
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_color: Rgb,
    pub shooter_color: Rgb,
    pub fleet_drop_speed: i32,
    /// One slot in this many becomes a shooter
    pub shooter_chance: u32,
    /// Seconds between alien volleys, sampled per volley
    pub alien_timer_min: f32,
    pub alien_timer_max: f32,

    // === Progression ===
    /// How quickly the game speeds up
    pub speedup_scale: f32,
    /// How quickly alien point values increase
    pub score_scale: f32,

    // === Loop ===
    pub ship_hit_pause_ms: u64,
    pub ticks_per_frame: u32,
    pub frame_ms: u64,

    // === Files ===
    pub high_score_path: PathBuf,

    /// Dynamic values a new game starts from
    pub starting: DynamicSettings,
    /// Dynamic values for the game in progress
    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: (0, 0, 0),

            ship_width: 60,
            ship_height: 48,
            ship_color: (0, 200, 255),
            ship_limit: 3,

            bullet_width: 3,
            bullet_height: 15,
            bullet_color: (200, 200, 200),
            bullets_allowed: 8,
            alien_bullet_color: (204, 0, 0),
            alien_bullets_hit_ship: true,

            alien_width: 60,
            alien_height: 58,
            alien_color: (0, 220, 0),
            shooter_color: (255, 140, 0),
            fleet_drop_speed: 10,
            shooter_chance: 10,
            alien_timer_min: 2.0,
            alien_timer_max: 20.0,

            speedup_scale: 1.1,
            score_scale: 1.5,

            ship_hit_pause_ms: 1000,
            ticks_per_frame: 10,
            frame_ms: 16,

            high_score_path: PathBuf::from("high_score.txt"),

            starting: DynamicSettings::default(),
            dynamic: DynamicSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    ///
    /// Fields missing from the file keep their default values.
    pub fn load(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read settings file {}: {}", path.display(), err);
                Self::default()
            }
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset the values that change throughout a game
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = self.starting.clone();
    }

    /// Increase speed settings and alien point values
    pub fn increase_speed(&mut self) {
        let scale = self.speedup_scale;
        self.dynamic.ship_speed *= scale;
        self.dynamic.bullet_speed *= scale;
        self.dynamic.alien_speed *= scale;
        self.dynamic.alien_points = (self.dynamic.alien_points as f32 * self.score_scale) as u32;
    }

    pub fn change_fleet_direction(&mut self) {
        self.dynamic.fleet_direction = -self.dynamic.fleet_direction;
    }

    /// Wall-clock seconds covered by one simulation tick
    pub fn dt(&self) -> f32 {
        self.frame_ms as f32 / 1000.0 / self.ticks_per_frame.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 1200);
        assert_eq!(settings.screen_height, 800);
        assert_eq!(settings.bullets_allowed, 8);
        assert_eq!(settings.ship_limit, 3);
        assert_eq!(settings.dynamic.alien_points, 50);
        assert_eq!(settings.dynamic.fleet_direction, 1.0);
    }

    #[test]
    fn test_increase_speed() {
        let mut settings = Settings::default();
        settings.increase_speed();

        assert!(approx_eq(settings.dynamic.ship_speed, 0.77));
        assert!(approx_eq(settings.dynamic.bullet_speed, 1.65));
        assert!(approx_eq(settings.dynamic.alien_speed, 0.22));
        assert_eq!(settings.dynamic.alien_points, 75);
        // Alien bullets keep their pace
        assert!(approx_eq(settings.dynamic.alien_bullet_speed, 0.5));
    }

    #[test]
    fn test_alien_points_truncate() {
        let mut settings = Settings::default();
        settings.increase_speed();
        settings.increase_speed();
        // 75 * 1.5 = 112.5
        assert_eq!(settings.dynamic.alien_points, 112);
    }

    #[test]
    fn test_initialize_dynamic_settings_resets() {
        let mut settings = Settings::default();
        settings.increase_speed();
        settings.change_fleet_direction();
        settings.initialize_dynamic_settings();
        assert_eq!(settings.dynamic, DynamicSettings::default());
    }

    #[test]
    fn test_dt_follows_loop_timing() {
        let mut settings = Settings::default();
        assert!(approx_eq(settings.dt(), 0.0016));

        settings.frame_ms = 20;
        settings.ticks_per_frame = 4;
        assert!(approx_eq(settings.dt(), 0.005));

        settings.ticks_per_frame = 0;
        assert!(approx_eq(settings.dt(), 0.02));
    }

    #[test]
    fn test_change_fleet_direction() {
        let mut settings = Settings::default();
        settings.change_fleet_direction();
        assert_eq!(settings.dynamic.fleet_direction, -1.0);
        settings.change_fleet_direction();
        assert_eq!(settings.dynamic.fleet_direction, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "bullets_allowed": 3, "starting": { "alien_points": 10 } }"#;
        let mut settings: Settings = serde_json::from_str(json).unwrap();
        settings.initialize_dynamic_settings();

        assert_eq!(settings.bullets_allowed, 3);
        assert_eq!(settings.screen_width, 1200);
        assert_eq!(settings.dynamic.alien_points, 10);
        assert!(approx_eq(settings.dynamic.ship_speed, 0.7));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("alien_invasion_missing_settings.json");
        let _ = fs::remove_file(&path);
        let settings = Settings::load(&path);
        assert_eq!(settings.bullets_allowed, 8);
        assert_eq!(settings.dynamic.alien_points, 50);
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "alien_invasion_bad_settings_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(settings.screen_height, 800);
    }
}
