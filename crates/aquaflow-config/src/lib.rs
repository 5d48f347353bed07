//! Configuration file handling for aquaflow.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/aquaflow/config.toml` on Linux). Every field is
//! optional; anything missing falls back to the built-in defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use aquaflow_core::{AquaParams, NetworkParams, SceneKind};
use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "aquaflow.log";

/// Lowest and highest accepted frame rates.
const FPS_RANGE: (u32, u32) = (1, 240);

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scene shown at startup.
    pub scene: SceneKind,
    /// Target frames per second.
    pub fps: u32,
    /// World units per terminal column.
    pub cell_width: f64,
    /// World units per terminal row.
    pub cell_height: f64,
    /// Opaque color everything is composited over.
    pub backdrop: [u8; 3],
    /// Log level written to the log file (`error` through `trace`).
    pub log_level: String,
    /// Bubble and bottle scene tunables.
    pub aqua: AquaParams,
    /// Particle network tunables.
    pub network: NetworkParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            fps: 60,
            cell_width: 8.0,
            cell_height: 16.0,
            // Sky 950
            backdrop: [8, 47, 73],
            log_level: "info".to_string(),
            aqua: AquaParams::default(),
            network: NetworkParams::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No config file was found.
    Defaults,
}

impl ConfigSource {
    /// The file at `path` when it exists, otherwise the built-in defaults.
    pub fn locate(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.exists() => Self::File(path),
            _ => Self::Defaults,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).wrap_err("invalid aquaflow configuration")
    }

    /// Load from the default location, falling back to defaults when no file exists.
    ///
    /// Also returns where the configuration came from, so it can be logged
    /// once a subscriber is installed.
    pub fn load() -> Result<(Self, ConfigSource)> {
        let source = ConfigSource::locate(config_path());
        let config = Self::load_source(&source)?;
        Ok((config, source))
    }

    /// Load the configuration described by `source`.
    pub fn load_source(source: &ConfigSource) -> Result<Self> {
        match source {
            ConfigSource::File(path) => Self::load_from(path),
            ConfigSource::Defaults => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Delay between frames derived from `fps`.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(FPS_RANGE.0, FPS_RANGE.1);
        Duration::from_millis(1000 / fps as u64)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "aquaflow")
}

/// Path of the configuration file, if a home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Path of the log file, if a home directory can be determined.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}
