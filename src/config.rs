//! Application settings.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. a TOML file (`sortty.toml` in the working directory, or the path in
//!    `SORTTY_CONFIG`),
//! 3. `SORTTY_<KEY>` environment variables, e.g. `SORTTY_STEP_DELAY_MS=250`.
//!
//! A missing default config file is not an error; a missing file named by
//! `SORTTY_CONFIG` is.

use crate::algorithms::Algorithm;
use crate::constants::{
    DEFAULT_ARRAY_SIZE, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SNAPSHOT_LIMIT,
    DEFAULT_STEP_DELAY_MS, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS,
};
use crate::controller::SizeBounds;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "sortty.toml";
pub const ENV_PREFIX: &str = "SORTTY_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting '{key}': {message}")]
    Invalid { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Size of the first generated array
    pub array_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// Pause between replayed steps
    pub step_delay_ms: u64,
    /// Algorithm selected at startup
    pub algorithm: Algorithm,
    /// Fixed RNG seed for reproducible arrays
    pub seed: Option<u64>,
    /// Memory budget for one recorded run, in bytes
    pub snapshot_limit: usize,
    /// Write logs to this file; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            array_size: DEFAULT_ARRAY_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            algorithm: Algorithm::default(),
            seed: None,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            log_file: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn size_bounds(&self) -> Result<SizeBounds, ConfigError> {
        SizeBounds::new(self.min_size, self.max_size).map_err(|e| ConfigError::Invalid {
            key: "min_size/max_size".into(),
            message: e.to_string(),
        })
    }

    /// Parse settings from TOML text on top of the defaults
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `SORTTY_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(&format!("{}{}", ENV_PREFIX, key.to_ascii_uppercase()));

        if let Some(v) = var("array_size") {
            self.array_size = parse_value("array_size", &v)?;
        }
        if let Some(v) = var("min_size") {
            self.min_size = parse_value("min_size", &v)?;
        }
        if let Some(v) = var("max_size") {
            self.max_size = parse_value("max_size", &v)?;
        }
        if let Some(v) = var("step_delay_ms") {
            self.step_delay_ms = parse_value("step_delay_ms", &v)?;
        }
        if let Some(v) = var("algorithm") {
            self.algorithm = parse_value("algorithm", &v)?;
        }
        if let Some(v) = var("seed") {
            self.seed = Some(parse_value("seed", &v)?);
        }
        if let Some(v) = var("snapshot_limit") {
            self.snapshot_limit = parse_value("snapshot_limit", &v)?;
        }
        if let Some(v) = var("log_file") {
            self.log_file = Some(PathBuf::from(v));
        }
        if let Some(v) = var("log_filter") {
            self.log_filter = v;
        }
        Ok(())
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = self.size_bounds()?;
        if !bounds.contains(self.array_size) {
            return Err(ConfigError::Invalid {
                key: "array_size".into(),
                message: format!(
                    "{} is outside [{}, {}]",
                    self.array_size,
                    bounds.min(),
                    bounds.max()
                ),
            });
        }
        if !(MIN_STEP_DELAY_MS..=MAX_STEP_DELAY_MS).contains(&self.step_delay_ms) {
            return Err(ConfigError::Invalid {
                key: "step_delay_ms".into(),
                message: format!(
                    "{} is outside [{}, {}]",
                    self.step_delay_ms, MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS
                ),
            });
        }
        if self.snapshot_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "snapshot_limit".into(),
                message: "must be positive".into(),
            });
        }
        if let Err(e) = EnvFilter::try_new(&self.log_filter) {
            return Err(ConfigError::Invalid {
                key: "log_filter".into(),
                message: e.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.into(),
        message: e.to_string(),
    })
}

fn read_file(path: &Path, required: bool) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load settings from the config file and the process environment
pub fn load_settings() -> Result<Settings, ConfigError> {
    let explicit = std::env::var_os(format!("{}CONFIG", ENV_PREFIX)).map(PathBuf::from);
    let path = explicit
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut settings = match read_file(&path, explicit.is_some())? {
        Some(raw) => Settings::from_toml(&raw)?,
        None => Settings::default(),
    };
    settings.apply_env(|key| std::env::var(key).ok())?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.array_size, 20);
        assert_eq!(settings.step_delay(), Duration::from_millis(100));
        assert_eq!(settings.algorithm, Algorithm::Bubble);
    }

    #[test]
    fn test_toml_overrides_some_keys() {
        let settings = Settings::from_toml(
            r#"
            array_size = 30
            algorithm = "quick"
            seed = 99
            "#,
        )
        .unwrap();
        assert_eq!(settings.array_size, 30);
        assert_eq!(settings.algorithm, Algorithm::Quick);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.max_size, DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_toml_rejects_unknown_algorithm_and_keys() {
        assert!(matches!(
            Settings::from_toml(r#"algorithm = "bogo""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(Settings::from_toml("speed = 3").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SORTTY_STEP_DELAY_MS", "250"),
            ("SORTTY_ALGORITHM", "Radix Sort"),
            ("SORTTY_LOG_FILE", "/tmp/sortty.log"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.step_delay_ms, 250);
        assert_eq!(settings.algorithm, Algorithm::Radix);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/sortty.log")));
    }

    #[test]
    fn test_env_parse_error_names_key() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(|key| (key == "SORTTY_ARRAY_SIZE").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("array_size"));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let settings = Settings {
            min_size: 10,
            max_size: 5,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { .. })
        ));

        let settings = Settings {
            array_size: 80,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_step_delay_out_of_range() {
        for step_delay_ms in [0, MIN_STEP_DELAY_MS - 1, MAX_STEP_DELAY_MS + 1] {
            let settings = Settings {
                step_delay_ms,
                ..Settings::default()
            };
            let err = settings.validate().unwrap_err();
            assert!(err.to_string().contains("step_delay_ms"), "{}", err);
        }

        for step_delay_ms in [MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS] {
            let settings = Settings {
                step_delay_ms,
                ..Settings::default()
            };
            settings.validate().unwrap();
        }
    }

    #[test]
    fn test_env_zero_step_delay_fails_validation() {
        let mut settings = Settings::default();
        settings
            .apply_env(|key| (key == "SORTTY_STEP_DELAY_MS").then(|| "0".to_string()))
            .unwrap();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { ref key, .. }) if key == "step_delay_ms"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_log_filter() {
        let settings = Settings {
            log_filter: "sortty=loud".into(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { ref key, .. }) if key == "log_filter"
        ));

        let settings = Settings {
            log_filter: "sortty=debug,warn".into(),
            ..Settings::default()
        };
        settings.validate().unwrap();
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("sortty_missing_{suffix}.toml"));

        assert!(read_file(&path, false).unwrap().is_none());
        assert!(matches!(
            read_file(&path, true),
            Err(ConfigError::Io { .. })
        ));
    }
}
