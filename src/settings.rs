use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::constants::{DEFAULT_IMAGES_DIR, DEFAULT_PORT, DEFAULT_TILE_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub images_dir: String,
    pub tile_url: String,
    /// When true, the panel shows the first catalog record on load instead
    /// of the empty placeholder state.
    #[serde(default)]
    pub select_first_on_load: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            select_first_on_load: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(&config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        if let Some(port_str) = config_map.get("port") {
            if let Ok(port) = port_str.parse::<u16>() {
                settings.port = port;
            }
        }
        if let Some(images_dir) = config_map.get("images_dir") {
            settings.images_dir = images_dir.trim_matches('"').to_string();
        }
        if let Some(tile_url) = config_map.get("tile_url") {
            settings.tile_url = tile_url.trim_matches('"').to_string();
        }
        if let Some(select_str) = config_map.get("select_first_on_load") {
            if let Ok(select) = select_str.parse::<bool>() {
                settings.select_first_on_load = select;
            }
        }

        Ok(settings)
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("chemmap.ini");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_without_config_file() {
        let settings = Settings::default();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.images_dir, "images");
        assert!(settings.tile_url.contains("{z}/{x}/{y}"));
        assert!(!settings.select_first_on_load);
    }
}
