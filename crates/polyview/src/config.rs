use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::warn;
use polyview_core::view::ViewConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "polyview.toml";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub view: ViewConfig,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 520.0,
        }
    }
}

impl Config {
    /// `polyview/polyview.toml` under the platform config directory, or the
    /// working directory when there is none.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("polyview").join(CONFIG_FILE_NAME),
            None => {
                warn!("No config directory available, using the working directory");
                PathBuf::from(CONFIG_FILE_NAME)
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let s = toml::to_string(self)?;
        fs::write(path, s)?;
        Ok(())
    }

    /// Loads the config at `path`, writing the default one if the file does
    /// not exist yet. Problems are logged and fall back to the default.
    pub fn load_or_create(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                warn!("{}, using default config", e);
                Self::default()
            })
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                warn!("Failed to write default config: {}", e);
            }
            config
        }
    }
}
