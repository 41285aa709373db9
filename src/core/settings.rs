//! Scene configuration
//!
//! Read once at startup from `settings.json` in the platform config
//! directory. Every field is optional in the file; anything missing keeps
//! its default. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::orbital::SimulationSpeed;

pub const SETTINGS_FILE: &str = "settings.json";
/// Upper bound on spawned stars; each one is an entity.
pub const MAX_STARS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    pub count: usize,
    /// Edge length of the cube the stars are scattered in
    pub extent: f32,
    pub star_size: f32,
    pub seed: u64,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 10_000,
            extent: 2000.0,
            star_size: 0.7,
            seed: 0x5EED_57A2,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub window_title: String,
    pub initial_speed: f32,
    pub field_of_view_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Asset path of the sun's surface texture; flat colour when unset
    pub sun_texture: Option<String>,
    pub starfield: StarfieldSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            window_title: "Bevy Solar System".to_string(),
            initial_speed: 1.0,
            field_of_view_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            sun_texture: None,
            starfield: StarfieldSettings::default(),
        }
    }
}

impl SceneSettings {
    /// Platform settings path:
    /// - macOS: ~/Library/Application Support/bevysolar/settings.json
    /// - Linux: ~/.config/bevysolar/settings.json
    /// - Windows: %APPDATA%\bevysolar\config\settings.json
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Returns Ok(None) when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let settings: SceneSettings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(settings.validated()))
    }

    /// Replace values that parse but cannot drive the scene with their
    /// defaults. JSON numbers too large for `f32` arrive here as infinity.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        keep_or_default(
            "field_of_view_deg",
            &mut self.field_of_view_deg,
            defaults.field_of_view_deg,
            |fov| fov > 0.0 && fov < 180.0,
        );
        keep_or_default("near", &mut self.near, defaults.near, |near| near > 0.0);
        if !(self.far.is_finite() && self.far > self.near) {
            warn!(
                "Settings: far plane {} must exceed near plane {}, using {}..{}",
                self.far, self.near, defaults.near, defaults.far
            );
            self.near = defaults.near;
            self.far = defaults.far;
        }

        let starfield = &mut self.starfield;
        let star_defaults = defaults.starfield;
        keep_or_default("starfield.extent", &mut starfield.extent, star_defaults.extent, |e| {
            e > 0.0
        });
        keep_or_default(
            "starfield.star_size",
            &mut starfield.star_size,
            star_defaults.star_size,
            |size| size > 0.0,
        );
        if starfield.count > MAX_STARS {
            warn!("Settings: starfield.count {} capped at {}", starfield.count, MAX_STARS);
            starfield.count = MAX_STARS;
        }

        self
    }

    /// Load from the platform path, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(err) => {
                warn!("Using default settings: {err:#}");
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Ignoring unreadable settings: {err:#}");
                Self::default()
            }
        }
    }
}

fn keep_or_default(name: &str, value: &mut f32, default: f32, valid: impl Fn(f32) -> bool) {
    if value.is_finite() && valid(*value) {
        return;
    }
    warn!("Settings: {name} = {value} is out of range, using {default}");
    *value = default;
}

/// Inserts `SceneSettings` (unless one is already present) and seeds the
/// simulation speed from it.
pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SceneSettings>() {
            app.insert_resource(SceneSettings::load_or_default());
        }
        let initial_speed = app.world().resource::<SceneSettings>().initial_speed;
        app.insert_resource(SimulationSpeed::new(initial_speed))
            .add_systems(Startup, apply_window_title);
    }
}

fn apply_window_title(
    settings: Res<SceneSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    for mut window in &mut windows {
        window.title = settings.window_title.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "bevysolar-settings-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        dir
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = unique_temp_dir("missing");
        let result = SceneSettings::load_from(&dir.join(SETTINGS_FILE)).expect("load failed");
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = unique_temp_dir("partial");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{ "initial_speed": 2.5, "starfield": { "count": 42 } }"#)
            .expect("write failed");

        let settings = SceneSettings::load_from(&path)
            .expect("load failed")
            .expect("settings missing");
        assert_eq!(settings.initial_speed, 2.5);
        assert_eq!(settings.starfield.count, 42);
        assert_eq!(settings.starfield.extent, StarfieldSettings::default().extent);
        assert_eq!(settings.field_of_view_deg, 75.0);
        assert!(settings.sun_texture.is_none());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = unique_temp_dir("malformed");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, "{ not json").expect("write failed");

        let err = SceneSettings::load_from(&path).expect_err("malformed json accepted");
        assert!(format!("{err:#}").contains(SETTINGS_FILE));
    }

    #[test]
    fn test_overflowing_extent_falls_back() {
        let dir = unique_temp_dir("overflow");
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{ "starfield": { "count": 4, "extent": 1e39 } }"#)
            .expect("write failed");

        let settings = SceneSettings::load_from(&path)
            .expect("load failed")
            .expect("settings missing");
        assert_eq!(settings.starfield.extent, 2000.0);
        assert_eq!(settings.starfield.count, 4);
    }

    #[test]
    fn test_validated_repairs_projection_and_starfield() {
        let settings = SceneSettings {
            field_of_view_deg: f32::NAN,
            near: -1.0,
            far: 0.05,
            starfield: StarfieldSettings {
                count: usize::MAX,
                star_size: 0.0,
                ..default()
            },
            ..default()
        }
        .validated();

        let defaults = SceneSettings::default();
        assert_eq!(settings.field_of_view_deg, defaults.field_of_view_deg);
        assert_eq!(settings.near, defaults.near);
        assert_eq!(settings.far, defaults.far);
        assert_eq!(settings.starfield.count, MAX_STARS);
        assert_eq!(settings.starfield.star_size, defaults.starfield.star_size);
    }

    #[test]
    fn test_validated_keeps_sane_values() {
        let settings = SceneSettings {
            field_of_view_deg: 60.0,
            near: 1.0,
            far: 500.0,
            starfield: StarfieldSettings {
                count: 20,
                extent: 300.0,
                ..default()
            },
            ..default()
        };
        assert_eq!(settings.clone().validated(), settings);
    }

    #[test]
    fn test_plugin_clamps_initial_speed() {
        let mut app = App::new();
        app.insert_resource(SceneSettings {
            initial_speed: 12.0,
            ..default()
        });
        app.add_plugins(SettingsPlugin);
        assert_eq!(app.world().resource::<SimulationSpeed>().get(), 5.0);
    }

    #[test]
    fn test_defaults_round_trip_through_json() {
        let json = serde_json::to_string(&SceneSettings::default()).expect("serialize failed");
        let parsed: SceneSettings = serde_json::from_str(&json).expect("parse failed");
        assert_eq!(parsed, SceneSettings::default());
    }
}
