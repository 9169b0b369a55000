use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::geo::{self, Point};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "aim";

/// Origin baked into QR payloads when none is configured. The desktop app
/// has no `window.location`, so the deployed site's origin lives here.
pub const DEFAULT_ORIGIN: &str = "https://aim.abington.psu.edu";

pub const DEFAULT_DATASET: &str = "assets/campus_locations.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Environment override for the position source, `"lat,lng"`.
pub const POSITION_ENV: &str = "AIM_POSITION";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Origin used when building deep-link payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// UI theme name, `psu` or `dark`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<AssetsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory the catalog's image paths are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    /// Path or URL of the geographic point dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    /// `"lat,lng"` override for the position source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `aim config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# AIM configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "origin" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    anyhow::bail!("Invalid origin: {value}. Must start with http:// or https://.");
                }
                self.origin = Some(value.trim_end_matches('/').to_string());
            }
            "theme" => {
                if value != "psu" && value != "dark" {
                    anyhow::bail!("Unknown theme: {value}. Valid themes: psu, dark");
                }
                self.theme = Some(value.to_string());
            }
            "assets.dir" => {
                self.assets.get_or_insert_with(AssetsConfig::default).dir =
                    Some(value.to_string());
            }
            "map.dataset" => {
                self.map.get_or_insert_with(MapConfig::default).dataset = Some(value.to_string());
            }
            "map.position" => {
                if geo::parse_lat_lng(value).is_none() {
                    anyhow::bail!("Invalid position: {value}. Expected \"lat,lng\".");
                }
                self.map.get_or_insert_with(MapConfig::default).position =
                    Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: origin, theme, assets.dir, map.dataset, map.position"
            ),
        }
        Ok(())
    }

    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN)
    }

    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or("psu")
    }

    pub fn assets_dir(&self) -> PathBuf {
        PathBuf::from(
            self.assets
                .as_ref()
                .and_then(|a| a.dir.as_deref())
                .unwrap_or(DEFAULT_ASSETS_DIR),
        )
    }

    pub fn dataset(&self) -> String {
        self.map
            .as_ref()
            .and_then(|m| m.dataset.clone())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string())
    }

    /// Configured position override, if any. The environment variable wins
    /// over the config file.
    pub fn position_override(&self) -> Option<Result<Point, String>> {
        let raw = std::env::var(POSITION_ENV).ok().or_else(|| {
            self.map
                .as_ref()
                .and_then(|m| m.position.clone())
        })?;
        Some(
            geo::parse_lat_lng(&raw)
                .ok_or_else(|| format!("position override {raw:?} is not \"lat,lng\"")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_fall_back_to_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.origin(), DEFAULT_ORIGIN);
        assert_eq!(config.dataset(), DEFAULT_DATASET);
        assert_eq!(config.assets_dir(), PathBuf::from(DEFAULT_ASSETS_DIR));
    }

    #[test]
    fn set_validates_origin_and_position() {
        let mut config = Config::default();
        assert!(config.set("origin", "example.org").is_err());
        config
            .set("origin", "https://example.org/")
            .expect("valid origin");
        assert_eq!(config.origin(), "https://example.org");

        assert!(config.set("map.position", "not-a-pair").is_err());
        config
            .set("map.position", "40.1406,-75.1652")
            .expect("valid position");
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(config.set("map.zoom", "15").is_err());
    }

    #[test]
    fn set_validates_theme_names() {
        let mut config = Config::default();
        assert_eq!(config.theme(), "psu");
        assert!(config.set("theme", "solarized").is_err());
        config.set("theme", "dark").expect("valid theme");
        assert_eq!(config.theme(), "dark");
    }

    #[test]
    fn config_roundtrips_through_yaml() {
        let mut config = Config::default();
        config.set("origin", "https://example.org").expect("set");
        config
            .set("map.dataset", "https://example.org/pois.json")
            .expect("set");
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let back: Config = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back.origin(), "https://example.org");
        assert_eq!(back.dataset(), "https://example.org/pois.json");
    }
}
