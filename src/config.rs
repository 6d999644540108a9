use crate::calendar::{FrostDates, MonthDay};
use crate::error::{GardenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".plantmontana.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub garden: GardenSettings,

    #[serde(default)]
    pub climate: ClimateSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenSettings {
    /// Data directory, relative to the project root.
    #[serde(default = "default_path")]
    pub path: String,

    /// Optional TOML catalog replacing the built-in plant list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_path() -> String {
    ".plantmontana".to_string()
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            catalog: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateSettings {
    #[serde(default = "default_zone")]
    pub zone: String,

    #[serde(default = "default_last_spring_frost")]
    pub last_spring_frost: String,

    #[serde(default = "default_first_fall_frost")]
    pub first_fall_frost: String,
}

fn default_zone() -> String {
    "4b-6a".to_string()
}

fn default_last_spring_frost() -> String {
    "May 17".to_string()
}

fn default_first_fall_frost() -> String {
    "Sep 22".to_string()
}

impl Default for ClimateSettings {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            last_spring_frost: default_last_spring_frost(),
            first_fall_frost: default_first_fall_frost(),
        }
    }
}

impl ClimateSettings {
    pub fn frost_dates(&self) -> Result<FrostDates> {
        let spring: MonthDay = self.last_spring_frost.parse().map_err(|e| {
            GardenError::Config(format!("climate.last_spring_frost: {}", e))
        })?;
        let fall: MonthDay = self
            .first_fall_frost
            .parse()
            .map_err(|e| GardenError::Config(format!("climate.first_fall_frost: {}", e)))?;
        FrostDates::new(spring, fall).map_err(|e| GardenError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl GardenConfig {
    /// Load the nearest config file at or above `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?.ok_or_else(|| {
            GardenError::Config(format!(
                "No {} found in {} or any parent directory",
                CONFIG_FILE,
                start_path.display()
            ))
        })?;
        Self::load_file(&config_path)
    }

    /// Like [`GardenConfig::load`], falling back to defaults rooted at
    /// `start_path` when no config file exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path)? {
            Some(config_path) => Self::load_file(&config_path),
            None => {
                tracing::debug!(path = %start_path.display(), "No config file, using defaults");
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: GardenConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| GardenError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(Some(config_path));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.garden.path)
    }

    pub fn layouts_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join("layouts")
    }

    pub fn catalog_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.garden
            .catalog
            .as_ref()
            .map(|catalog| project_root.join(catalog))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
