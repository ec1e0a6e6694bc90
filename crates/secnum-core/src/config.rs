//! Configuration for outline numbering.
//!
//! Configuration is stored in TOML. Lookup order:
//!
//! 1. `$SECNUM_CONFIG` if set
//! 2. The platform config directory (`secnum/config.toml`)
//!
//! A missing file yields defaults.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [outline]
//! top_level = 2          # treat `##` as top-level sections
//! max_depth = 3          # leave `####` and deeper unnumbered
//! reset_per_document = true
//! ```
//!
//! ```rust,no_run
//! use secnum_core::{Config, Result};
//!
//! let config = Config::load()?;
//! println!("Top-level depth: {}", config.outline.top_level);
//! # Ok::<(), secnum_core::Error>(())
//! ```

use crate::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SECNUM_CONFIG";

/// Deepest heading markdown allows.
pub const MAX_HEADING_DEPTH: u8 = 6;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Outline numbering settings
    #[serde(default)]
    pub outline: OutlineConfig,
}

/// Controls which headings get numbers and at what level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Markdown depth numbered as a top-level section.
    ///
    /// Shallower headings (for example a single `#` title when this is `2`)
    /// are left unnumbered.
    pub top_level: u8,

    /// Deepest markdown depth that receives a number.
    pub max_depth: u8,

    /// Reset the counter before each document.
    ///
    /// When `false`, numbering continues across consecutive documents.
    pub reset_per_document: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            top_level: 1,
            max_depth: 2,
            reset_per_document: true,
        }
    }
}

impl OutlineConfig {
    /// Check that `1 <= top_level <= max_depth <= 6`.
    pub fn validate(&self) -> Result<()> {
        if self.top_level == 0 || self.top_level > MAX_HEADING_DEPTH {
            return Err(Error::Config(format!(
                "top_level must be between 1 and {MAX_HEADING_DEPTH}, got {}",
                self.top_level
            )));
        }
        if self.max_depth == 0 || self.max_depth > MAX_HEADING_DEPTH {
            return Err(Error::Config(format!(
                "max_depth must be between 1 and {MAX_HEADING_DEPTH}, got {}",
                self.max_depth
            )));
        }
        if self.top_level > self.max_depth {
            return Err(Error::Config(format!(
                "top_level ({}) cannot be deeper than max_depth ({})",
                self.top_level, self.max_depth
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load from `$SECNUM_CONFIG` or the platform config directory.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    /// Load `path`, or return defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(format!("config file {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        config.outline.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolved config file location.
    pub fn config_path() -> Result<PathBuf> {
        Self::config_path_from(std::env::var_os(CONFIG_ENV))
    }

    /// Config location given the value of `$SECNUM_CONFIG`.
    ///
    /// A blank value counts as unset.
    pub fn config_path_from(env_value: Option<OsString>) -> Result<PathBuf> {
        if let Some(path) = env_value {
            if !path.to_string_lossy().trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let project_dirs = ProjectDirs::from("dev", "outfitter", "secnum")
            .ok_or_else(|| Error::Config("Failed to determine config directory".into()))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.outline.top_level, 1);
        assert_eq!(config.outline.max_depth, 2);
        assert!(config.outline.reset_per_document);
        assert!(config.outline.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            outline: OutlineConfig {
                top_level: 2,
                max_depth: 4,
                reset_per_document: false,
            },
        };
        config.save(&path)?;

        assert_eq!(Config::load_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[outline]\nmax_depth = 3\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.outline.top_level, 1);
        assert_eq!(config.outline.max_depth, 3);
        assert!(config.outline.reset_per_document);
        Ok(())
    }

    #[test]
    fn test_empty_file_is_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "")?;

        assert_eq!(Config::load_from(&path)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_path_prefers_env_value() -> Result<()> {
        let path = Config::config_path_from(Some(OsString::from("/tmp/custom/secnum.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/custom/secnum.toml"));
        Ok(())
    }

    #[test]
    fn test_config_path_falls_back_to_platform_dir() {
        // No home directory in some sandboxes; only check the shape when one resolves.
        for env_value in [None, Some(OsString::from("   "))] {
            match Config::config_path_from(env_value) {
                Ok(path) => {
                    assert!(path.ends_with("config.toml"));
                    assert!(path.to_string_lossy().contains("secnum"));
                },
                Err(e) => assert_eq!(e.category(), "config"),
            }
        }
    }

    #[test]
    fn test_load_or_default_missing_file() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_or_default_reads_existing_file() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[outline]\ntop_level = 2\nmax_depth = 2\n")?;

        let config = Config::load_or_default(&path)?;
        assert_eq!(config.outline.top_level, 2);
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_config_parse_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[outline\ntop_level = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_rejects_inverted_depths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[outline]\ntop_level = 3\nmax_depth = 2\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("cannot be deeper"));
    }

    #[test]
    fn test_validate_bounds() {
        let bad = [(0, 2), (7, 7), (1, 0), (1, 7)];
        for (top_level, max_depth) in bad {
            let config = OutlineConfig {
                top_level,
                max_depth,
                reset_per_document: true,
            };
            assert!(
                config.validate().is_err(),
                "{top_level}/{max_depth} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_valid_depths_roundtrip(top_level in 1u8..=6, extra in 0u8..=5, reset in any::<bool>()) {
            let max_depth = (top_level + extra).min(MAX_HEADING_DEPTH);
            let config = Config {
                outline: OutlineConfig { top_level, max_depth, reset_per_document: reset },
            };
            prop_assert!(config.outline.validate().is_ok());

            let toml = toml::to_string(&config).unwrap();
            let parsed: Config = toml::from_str(&toml).unwrap();
            prop_assert_eq!(parsed, config);
        }
    }
}
