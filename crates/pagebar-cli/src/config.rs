//! User configuration
//!
//! Read from `~/.pagebar/config.toml` unless a path is given on the command
//! line. Every field has a default, so a missing file or a partial file both
//! load fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use pagebar_core::constants::pages::SEED_NAMES;
use pagebar_core::PlacementConfig;

/// Config directory name under the home directory
const CONFIG_DIR_NAME: &str = ".pagebar";

/// Root config directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Directory holding `pagebar.log`
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Starfield background settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub enabled: bool,
    pub stars: usize,
    pub shooting_stars: usize,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stars: 160,
            shooting_stars: 10,
        }
    }
}

/// Context menu offsets, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub gap: i32,
    pub margin: i32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { gap: 1, margin: 1 }
    }
}

impl From<MenuConfig> for PlacementConfig {
    fn from(menu: MenuConfig) -> Self {
        PlacementConfig {
            gap: menu.gap,
            margin: menu.margin,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagebarConfig {
    pub theme: String,
    pub seed_pages: Vec<String>,
    pub starfield: StarfieldConfig,
    pub menu: MenuConfig,
}

impl Default for PagebarConfig {
    fn default() -> Self {
        Self {
            theme: "pagebar".to_string(),
            seed_pages: SEED_NAMES.iter().map(|s| s.to_string()).collect(),
            starfield: StarfieldConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

impl PagebarConfig {
    /// Default config file path
    pub fn path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from the default path
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load from a specific path; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PagebarConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PagebarConfig::load_from_path(&dir.path().join("none.toml")).unwrap();
        assert_eq!(config, PagebarConfig::default());
        assert_eq!(config.seed_pages, vec!["Info", "Details", "Other", "Ending"]);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "theme = \"midnight\"\n\n[starfield]\nenabled = false\n",
        )
        .unwrap();

        let config = PagebarConfig::load_from_path(&path).unwrap();
        assert_eq!(config.theme, "midnight");
        assert!(!config.starfield.enabled);
        assert_eq!(config.starfield.shooting_stars, 10);
        assert_eq!(config.menu, MenuConfig::default());
    }

    #[test]
    fn test_seed_pages_and_menu_offsets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "seed_pages = [\"Welcome\", \"Survey\"]\n\n[menu]\ngap = 2\nmargin = 3\n",
        )
        .unwrap();

        let config = PagebarConfig::load_from_path(&path).unwrap();
        assert_eq!(config.seed_pages, vec!["Welcome", "Survey"]);
        let placement = PlacementConfig::from(config.menu);
        assert_eq!(placement.gap, 2);
        assert_eq!(placement.margin, 3);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = PagebarConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
