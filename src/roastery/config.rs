use crate::error::{Result, RoasteryError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATABASE: &str = "coffee.sqlite";

/// Configuration for roastery, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoasteryConfig {
    /// Database file. Relative paths resolve against the working directory.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for RoasteryConfig {
    fn default() -> Self {
        Self {
            database: None,
            color: default_color(),
        }
    }
}

impl RoasteryConfig {
    pub const KEYS: [&'static str; 2] = ["database", "color"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The database file to use when no explicit path was given.
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(self.database_path().display().to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(RoasteryError::Config("database path cannot be empty".into()));
                }
                self.database = Some(PathBuf::from(value));
            }
            "color" => {
                self.color = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(RoasteryError::Config(format!(
                            "color must be true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(RoasteryError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
