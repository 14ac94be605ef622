//! Scene configuration
//!
//! Every tunable constant of the scene lives in [`SceneConfig`]. Defaults match the
//! stock scene; a JSON file can override individual fields.

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "ORBITVIEW_CONFIG";

/// Scene configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub satellite_model_path: String,
    pub background_texture_path: String,
    pub earth_texture_path: String,
    pub earth_bump_path: String,
    pub earth_specular_path: String,
    /// Interchangeable satellite surface textures, in click order.
    pub satellite_texture_paths: Vec<String>,

    pub camera_distance: f32,
    pub camera_rotation_step: f32,
    pub camera_initial_theta: f32,
    pub camera_initial_phi: f32,
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,

    pub earth_radius: f32,
    pub earth_bump_scale: f32,
    pub background_radius: f32,
    pub orbit_radius: f32,
    pub model_scale: f32,

    /// Per-frame Euler increments (radians).
    pub earth_spin: Vec3,
    pub orbit_spin: Vec3,
    pub satellite_spin: Vec3,

    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    pub sun_direction: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            satellite_model_path: "models/satellite.glb".into(),
            background_texture_path: "textures/starfield.png".into(),
            earth_texture_path: "textures/earth_atmos_2048.jpg".into(),
            earth_bump_path: "textures/earth_bump_2048.jpg".into(),
            earth_specular_path: "textures/earth_specular_2048.jpg".into(),
            satellite_texture_paths: vec![
                "textures/sat_blue.jpg".into(),
                "textures/sat_black.png".into(),
                "textures/sat_white.jpg".into(),
            ],
            camera_distance: 10.0,
            camera_rotation_step: 0.05,
            camera_initial_theta: 0.0,
            camera_initial_phi: PI,
            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            earth_radius: 2.0,
            earth_bump_scale: 0.05,
            background_radius: 40.0,
            orbit_radius: 6.0,
            model_scale: 0.01,
            earth_spin: Vec3::new(0.0, 0.002, 0.0),
            orbit_spin: Vec3::new(0.0, 0.005, 0.0),
            satellite_spin: Vec3::new(0.005, 0.01, 0.0),
            ambient_brightness: 200.0,
            sun_illuminance: 4_000.0,
            sun_direction: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

impl SceneConfig {
    /// Resolve the config file location.
    ///
    /// `ORBITVIEW_CONFIG` wins; otherwise the platform config directory is used:
    /// - macOS: ~/Library/Application Support/orbitview/scene.json
    /// - Linux: ~/.config/orbitview/scene.json
    /// - Windows: %APPDATA%\orbitview\config\scene.json
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "orbitview").map(|dirs| dirs.config_dir().join("scene.json"))
    }

    /// Read a config file.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&contents)?;

        Ok(Some(config))
    }

    /// Load the config from its default location, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("Could not resolve config directory, using default scene config");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("Loaded scene config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(
                    "Ignoring scene config at {}: {err:#}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
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
            "orbitview-config-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_match_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.camera_distance, 10.0);
        assert_eq!(config.camera_rotation_step, 0.05);
        assert_eq!(config.camera_initial_phi, PI);
        assert_eq!(config.orbit_radius, 6.0);
        assert_eq!(config.model_scale, 0.01);
        assert_eq!(config.satellite_texture_paths.len(), 3);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = unique_temp_dir("missing");
        let loaded = SceneConfig::load_from(&dir.join("scene.json")).unwrap();
        assert!(loaded.is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = unique_temp_dir("partial");
        let path = dir.join("scene.json");
        fs::write(&path, r#"{ "camera_distance": 14.5, "orbit_radius": 8.0 }"#).unwrap();

        let loaded = SceneConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.camera_distance, 14.5);
        assert_eq!(loaded.orbit_radius, 8.0);
        assert_eq!(loaded.camera_rotation_step, 0.05);
        assert_eq!(loaded.satellite_model_path, "models/satellite.glb");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = unique_temp_dir("malformed");
        let path = dir.join("scene.json");
        fs::write(&path, "{ camera_distance: ").unwrap();

        assert!(SceneConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SceneConfig {
            camera_fov_deg: 60.0,
            ..SceneConfig::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
