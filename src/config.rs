//! Configuration file handling for pgm-ascii.
//!
//! Loads configuration from `<config dir>/pgm-ascii/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, CharacterRamp, DEFAULT_MAX_WIDTH};

/// Configuration file structure for pgm-ascii.
/// Loaded from the user config directory (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct PathsConfig {
    /// PGM file rendered when no INPUT is given
    pub input: Option<PathBuf>,
    /// Text file written when no --output is given (stdout otherwise)
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// Preset name: classic, standard, blocks or minimal
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp, overrides `charset`
    #[serde(default)]
    pub ramp: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            charset: None,
            ramp: None,
            invert: false,
        }
    }
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

impl RenderConfig {
    /// Resolve the configured ramp: `ramp` first, then `charset`, then the default preset.
    pub fn ramp(&self) -> Result<CharacterRamp, ConfigError> {
        if let Some(ramp) = &self.ramp {
            return ramp.parse().map_err(|_| ConfigError::InvalidValue {
                key: "render.ramp",
                message: "ramp must contain at least one character".to_string(),
            });
        }
        match &self.charset {
            Some(name) => CharSet::from_name(name)
                .map(|c| c.ramp())
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.charset",
                    message: format!(
                        "unknown charset '{}' (expected one of: classic, standard, blocks, minimal)",
                        name
                    ),
                }),
            None => Ok(CharacterRamp::default()),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::from_toml(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }

    /// Write this configuration to `path`, creating parent directories.
    /// Refuses to overwrite an existing file.
    pub fn write_new(&self, path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    SerializeError(toml::ser::Error),
    AlreadyExists(PathBuf),
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::AlreadyExists(path) => {
                write!(f, "Config file '{}' already exists", path.display())
            }
            ConfigError::InvalidValue { key, message } => {
                write!(f, "Invalid config value for {}: {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::SerializeError(e) => Some(e),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pgm-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pgm-ascii/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.render.max_width, 80);
        assert!(config.paths.input.is_none());
        assert!(!config.render.invert);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml("[render]\ninvert = true\n").unwrap();
        assert!(config.render.invert);
        assert_eq!(config.render.max_width, 80);
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            [paths]
            input = "face.pgm"
            output = "face.txt"

            [render]
            max_width = 120
            charset = "blocks"
            "#,
        )
        .unwrap();
        assert_eq!(config.paths.input, Some(PathBuf::from("face.pgm")));
        assert_eq!(config.paths.output, Some(PathBuf::from("face.txt")));
        assert_eq!(config.render.max_width, 120);
        assert_eq!(config.render.ramp().unwrap(), CharSet::Blocks.ramp());
    }

    #[test]
    fn test_ramp_overrides_charset() {
        let render = RenderConfig {
            charset: Some("blocks".into()),
            ramp: Some("xy".into()),
            ..RenderConfig::default()
        };
        assert_eq!(render.ramp().unwrap().to_string(), "xy");
    }

    #[test]
    fn test_unknown_charset() {
        let render = RenderConfig {
            charset: Some("braille".into()),
            ..RenderConfig::default()
        };
        assert!(matches!(
            render.ramp(),
            Err(ConfigError::InvalidValue {
                key: "render.charset",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_ramp_invalid() {
        let render = RenderConfig {
            ramp: Some(String::new()),
            ..RenderConfig::default()
        };
        assert!(render.ramp().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[render\nmax_width = ").is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_parse_error_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "max_width = [").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_write_new_round_trip_and_no_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.render.max_width = 64;
        config.write_new(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
        assert!(matches!(
            config.write_new(&path),
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
