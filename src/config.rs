//! Project configuration (assetsuite.yaml).
//!
//! Holds the conversion defaults used by the CLI. Every field is optional;
//! command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};
use crate::legacy::MapOptions;

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "assetsuite.yaml";

/// Project configuration loaded from assetsuite.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Use per-frame durations when mapping to legacy items.
    pub enable_frame_durations: bool,

    /// Map every frame of each group instead of only the first.
    pub enable_frame_groups: bool,

    /// Mark frameless items as `Static`.
    pub idle_animation_as_static: bool,

    /// Tile edge in pixels used by `slice-sheet`.
    pub tile_size: u32,

    /// Default output directory.
    pub output: PathBuf,

    /// Extension of sprite sheet files inside a sheets directory.
    pub sheet_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_frame_durations: true,
            enable_frame_groups: true,
            idle_animation_as_static: false,
            tile_size: 32,
            output: PathBuf::from("dist"),
            sheet_extension: "sheet".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssetError::io_at(path, "Failed to read config", e))?;
        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).map_err(|e| AssetError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.tile_size == 0 {
            return Err(AssetError::Parse {
                message: "tile_size must be at least 1".to_string(),
                help: None,
            });
        }
        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, otherwise
    /// `assetsuite.yaml` in `dir` is used when present.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Mapping options described by this configuration.
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            enable_frame_durations: self.enable_frame_durations,
            enable_frame_groups: self.enable_frame_groups,
            idle_animation_as_static: self.idle_animation_as_static,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("idle_animation_as_static: true\ntile_size: 16").unwrap();

        assert!(config.idle_animation_as_static);
        assert!(config.enable_frame_groups);
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
enable_frame_durations: false
enable_frame_groups: false
idle_animation_as_static: true
tile_size: 64
output: build/assets
sheet_extension: spsh
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(
            config.map_options(),
            MapOptions {
                enable_frame_durations: false,
                enable_frame_groups: false,
                idle_animation_as_static: true,
            }
        );
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.output, PathBuf::from("build/assets"));
        assert_eq!(config.sheet_extension, "spsh");
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        assert!(Config::parse("tile_size: [").is_err());
        assert!(Config::parse("tile_size: 0").is_err());
    }

    #[test]
    fn test_resolve() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "tile_size: 8").unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap().tile_size, 8);

        let missing = dir.path().join("other.yaml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_default_map_options() {
        assert_eq!(Config::default().map_options(), MapOptions::default());
    }
}
