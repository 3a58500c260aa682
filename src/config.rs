//! rpnc configuration (config.toml)
//!
//! Settings come from `~/.rpnc/config.toml` when present, then from the
//! environment (`RPNC_CAPACITY`, `RPNC_PRECISION`, `RPNC_BANNER`). Every key
//! is optional.

use crate::display::DEFAULT_PRECISION;
use crate::stack::STACK_CAPACITY;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of stack frames
    pub capacity: usize,

    /// Significant digits shown for results
    pub precision: usize,

    /// Print the startup banner in the REPL
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: STACK_CAPACITY,
            precision: DEFAULT_PRECISION,
            banner: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file (~/.rpnc/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".rpnc").join("config.toml"))
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the default config file and apply environment overrides.
    ///
    /// A bad override is reported and skipped; the file's settings are kept.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        let (config, rejected) = config.with_env_overrides(|key| env::var(key).ok());
        for e in rejected {
            eprintln!("Warning: {}; ignoring override", e);
        }
        Ok(config)
    }

    /// Apply `RPNC_*` overrides looked up through `lookup`.
    ///
    /// Each override is validated on its own. Rejected ones leave the
    /// setting untouched and are returned alongside the config.
    pub fn with_env_overrides<F>(self, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self;
        let mut rejected = Vec::new();

        if let Some(value) = lookup("RPNC_CAPACITY") {
            let candidate = parse_setting("RPNC_CAPACITY", &value).and_then(|capacity| {
                Config {
                    capacity,
                    ..config.clone()
                }
                .validate()
            });
            match candidate {
                Ok(c) => config = c,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(value) = lookup("RPNC_PRECISION") {
            let candidate = parse_setting("RPNC_PRECISION", &value).and_then(|precision| {
                Config {
                    precision,
                    ..config.clone()
                }
                .validate()
            });
            match candidate {
                Ok(c) => config = c,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(value) = lookup("RPNC_BANNER") {
            config.banner = value == "1";
        }
        (config, rejected)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        if !(1..=17).contains(&self.precision) {
            return Err(ConfigError::Invalid(format!(
                "precision must be between 1 and 17, got {}",
                self.precision
            )));
        }
        Ok(self)
    }
}

fn parse_setting(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{}: expected a number, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.capacity, 256);
        assert_eq!(config.precision, 10);
        assert!(!config.banner);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str("precision = 6").unwrap();
        assert_eq!(config.precision, 6);
        assert_eq!(config.capacity, 256);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str("capacity = 16\nprecision = 4\nbanner = true").unwrap();
        assert_eq!(
            config,
            Config {
                capacity: 16,
                precision: 4,
                banner: true
            }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::from_toml_str("depth = 4"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_toml_str("capacity = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("precision = 18"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 32").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.capacity, 32);
    }

    #[test]
    fn test_env_overrides() {
        let (config, rejected) = Config::new().with_env_overrides(|key| match key {
            "RPNC_CAPACITY" => Some("8".to_string()),
            "RPNC_BANNER" => Some("1".to_string()),
            _ => None,
        });
        assert!(rejected.is_empty());
        assert_eq!(config.capacity, 8);
        assert_eq!(config.precision, 10);
        assert!(config.banner);
    }

    #[test]
    fn test_bad_env_value() {
        let (config, rejected) = Config::new().with_env_overrides(|key| {
            (key == "RPNC_PRECISION").then(|| "many".to_string())
        });
        assert_eq!(rejected.len(), 1);
        assert!(matches!(rejected[0], ConfigError::Invalid(_)));
        assert_eq!(config.precision, 10);
    }

    #[test]
    fn test_bad_env_value_keeps_file_settings() {
        let file = Config::from_toml_str("capacity = 16\nprecision = 4").unwrap();
        let (config, rejected) = file.with_env_overrides(|key| match key {
            "RPNC_CAPACITY" => Some("0".to_string()),
            "RPNC_PRECISION" => Some("6".to_string()),
            _ => None,
        });
        assert_eq!(rejected.len(), 1);
        assert_eq!(config.capacity, 16);
        assert_eq!(config.precision, 6);
    }
}
