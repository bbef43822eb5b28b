use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    lookup::{WeatherTable, normalize_city},
    model::WeatherRecord,
};

fn default_include_builtin() -> bool {
    true
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether the built-in cities are part of the table.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,

    /// Example TOML:
    /// [cities.paris]
    /// temp_c = 18
    /// condition = "light rain"
    /// humidity = 77
    /// wind_kmh = 14
    /// pressure_mb = 1009
    #[serde(default)]
    pub cities: HashMap<String, WeatherRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self { include_builtin: true, cities: HashMap::new() }
    }
}

impl Config {
    /// Load config from the platform path, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), cities = cfg.cities.len(), "loaded config");
        Ok(cfg)
    }

    /// Save config to the platform path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-agent", "weather-agent")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the record for a city. The key is stored normalized.
    pub fn upsert_city(&mut self, city: &str, record: WeatherRecord) -> Result<()> {
        let key = normalize_city(city);
        if key.is_empty() {
            return Err(anyhow!("City name must not be empty"));
        }

        self.cities.retain(|existing, _| normalize_city(existing) != key);
        self.cities.insert(key, record);
        Ok(())
    }

    /// Build the lookup table: built-in cities (if enabled) overridden by configured ones.
    pub fn weather_table(&self) -> Result<WeatherTable> {
        let configured = WeatherTable::from_records(
            self.cities.iter().map(|(city, record)| (city.as_str(), record.clone())),
        )
        .context("Invalid [cities] section in config")?;

        let mut table =
            if self.include_builtin { WeatherTable::builtin() } else { WeatherTable::new() };
        table.merge(configured);

        Ok(table)
    }
}
