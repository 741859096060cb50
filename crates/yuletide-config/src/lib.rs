//! Configuration for the yuletide holiday scene.
//!
//! Settings live in `config.toml` under the platform configuration
//! directory. Every key is optional; a missing file yields the defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use yuletide_core::{AnimationSpeed, Rgb, SceneSettings, palette};

/// Application name used for platform directories.
const APP_NAME: &str = "yuletide";

/// Config file name inside the configuration directory.
const CONFIG_FILE: &str = "config.toml";

/// Log file name inside the data directory.
const LOG_FILE: &str = "yuletide.log";

/// Errors raised while loading, validating or saving the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid TOML for [`Config`].
    Parse(toml::de::Error),
    /// The config could not be serialized.
    Serialize(toml::ser::Error),
    /// An ornament colour is not a `#RRGGBB` string.
    InvalidColor(String),
    /// `ornament_colors` was given but empty.
    EmptyPalette,
    /// No platform configuration directory could be determined.
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Config I/O error at {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "Invalid config file: {}", e),
            ConfigError::Serialize(e) => write!(f, "Could not serialize config: {}", e),
            ConfigError::InvalidColor(value) => {
                write!(f, "Invalid ornament colour {:?}, expected #RRGGBB", value)
            }
            ConfigError::EmptyPalette => write!(f, "ornament_colors must not be empty"),
            ConfigError::NoConfigDir => write!(f, "No configuration directory available"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

/// Where a loaded [`Config`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from this file.
    File(PathBuf),
    /// No file at this path; defaults were used.
    Missing(PathBuf),
    /// No platform configuration directory; defaults were used.
    NoConfigDir,
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigOrigin::Missing(path) => {
                write!(f, "no config at {}, using defaults", path.display())
            }
            ConfigOrigin::NoConfigDir => write!(f, "no configuration directory, using defaults"),
        }
    }
}

/// User configuration, as stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of twinkling stars.
    pub star_count: usize,
    /// Number of falling snowflakes.
    pub snow_count: usize,
    /// Number of ornaments placed around the tree.
    pub ornament_count: usize,
    /// Fixed random seed. Absent means a fresh seed every run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Frame pacing.
    pub speed: AnimationSpeed,
    /// Recompute tree geometry and ornaments when the terminal is resized.
    pub relayout_on_resize: bool,
    /// Ornament colours as `#RRGGBB` strings.
    pub ornament_colors: Vec<String>,
    /// Log file location. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = SceneSettings::default();
        Self {
            star_count: defaults.star_count,
            snow_count: defaults.snow_count,
            ornament_count: defaults.ornament_count,
            seed: None,
            speed: AnimationSpeed::default(),
            relayout_on_resize: defaults.relayout_on_resize,
            ornament_colors: palette::ORNAMENTS.iter().map(|c| c.to_hex()).collect(),
            log_file: None,
        }
    }
}

impl Config {
    /// Path of the config file in the platform configuration directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config from the platform location, or defaults if there is no file.
    pub fn load() -> Result<(Self, ConfigOrigin), ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::default(), ConfigOrigin::NoConfigDir)),
        }
    }

    /// Load the config from `path`, returning defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigOrigin::Missing(path.to_path_buf())));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::parse(&contents)?;
        Ok((config, ConfigOrigin::File(path.to_path_buf())))
    }

    /// Parse and validate a TOML document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.ornament_palette()?;
        Ok(config)
    }

    /// Write the config to the platform location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write the config as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Parsed ornament colours.
    pub fn ornament_palette(&self) -> Result<Vec<Rgb>, ConfigError> {
        if self.ornament_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.ornament_colors
            .iter()
            .map(|hex| Rgb::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.clone())))
            .collect()
    }

    /// Scene settings described by this config.
    pub fn scene_settings(&self) -> Result<SceneSettings, ConfigError> {
        Ok(SceneSettings {
            star_count: self.star_count,
            snow_count: self.snow_count,
            ornament_count: self.ornament_count,
            ornament_colors: self.ornament_palette()?,
            relayout_on_resize: self.relayout_on_resize,
        })
    }

    /// Where log output goes: the configured file, else the platform data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_local_dir().join(LOG_FILE))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_scene_defaults() {
        let config = Config::default();
        let settings = config.scene_settings().unwrap();
        assert_eq!(settings, SceneSettings::default());
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("star_count = 50\nseed = 7\nspeed = \"fast\"\n").unwrap();
        assert_eq!(config.star_count, 50);
        assert_eq!(config.snow_count, 300);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.speed, AnimationSpeed::Fast);
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_color() {
        let result = Config::parse("ornament_colors = [\"#FF0000\", \"tomato\"]");
        assert!(matches!(result, Err(ConfigError::InvalidColor(c)) if c == "tomato"));
    }

    #[test]
    fn test_empty_palette() {
        let result = Config::parse("ornament_colors = []");
        assert!(matches!(result, Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_parse_error() {
        let result = Config::parse("star_count = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_custom_palette() {
        let config = Config::parse("ornament_colors = [\"#0A5311\", \"#fff\"]").unwrap();
        assert_eq!(
            config.ornament_palette().unwrap(),
            vec![palette::PINE, palette::WHITE]
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("yuletide-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);
        let config = Config {
            star_count: 12,
            seed: Some(99),
            relayout_on_resize: true,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(
            Config::load_from(&path).unwrap(),
            (config, ConfigOrigin::File(path.clone()))
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("yuletide-definitely-missing").join(CONFIG_FILE);
        let (config, origin) = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(origin, ConfigOrigin::Missing(path.clone()));
        assert!(origin.to_string().starts_with("no config at"));
    }

    #[test]
    fn test_explicit_log_path() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/tree.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/tree.log")));
    }
}
