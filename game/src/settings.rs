// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct PhysicsSettings {
    pub fixed_timestep: f32,
    pub max_frame_time: f32,
    pub max_gjk_iterations: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct VolumeSettings {
    pub half_extents: [f32; 3],
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct SceneSettings {
    pub cube_half_extent: f32,
    pub anchor_scale: f32,
    pub rover_scale: f32,
    pub rover_start_x: f32,
    pub rover_speed: f32,
    pub spin_degrees_per_tick: f32,
    pub run_seconds: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct SimSettings {
    pub physics: PhysicsSettings,
    pub volume: VolumeSettings,
    pub scene: SceneSettings,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            physics: PhysicsSettings {
                fixed_timestep: 0.012,
                max_frame_time: 0.25,
                max_gjk_iterations: engine::gjk::DEFAULT_MAX_ITERATIONS,
            },
            volume: VolumeSettings {
                half_extents: [1.35, 0.8, 1.0],
            },
            scene: SceneSettings {
                cube_half_extent: 0.25,
                anchor_scale: 0.85,
                rover_scale: 0.2,
                rover_start_x: -0.7,
                rover_speed: -0.9,
                spin_degrees_per_tick: 1.0,
                run_seconds: 10.0,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization Error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization Error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration Directory Not Found")]
    ConfigDirNotFound,
}

impl SimSettings {
    /// Path of the per-user settings file.
    fn user_settings_path() -> Result<PathBuf, SettingsError> {
        let config_dir = config_dir().ok_or(SettingsError::ConfigDirNotFound)?;
        Ok(config_dir.join("TumbleBox").join("settings.toml"))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: SimSettings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves to the given path, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads the user settings file, falling back to defaults. A missing
    /// file is the normal first-run case; an unreadable or malformed one is
    /// logged and defaults run anyway, since bad settings should never stop
    /// the simulation.
    pub fn load_user_settings() -> Self {
        let path = match Self::user_settings_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("settings: {e}, using defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("settings: failed to load {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
