//! Configuration management for termfolio.
//!
//! Loads configuration from ${TERMFOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for termfolio configuration and data directories.
    //!
    //! TERMFOLIO_HOME resolution order:
    //! 1. TERMFOLIO_HOME environment variable (if set)
    //! 2. ~/.config/termfolio (default)
    //! 3. ./.termfolio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the termfolio home directory.
    pub fn termfolio_home() -> PathBuf {
        if let Ok(home) = std::env::var("TERMFOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".termfolio"),
            |h| h.join(".config").join("termfolio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        termfolio_home().join("config.toml")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        termfolio_home().join("logs")
    }
}

/// Typewriter timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Base delay between revealed characters.
    pub char_interval_ms: u64,
    /// Delay between boot banner lines.
    pub boot_interval_ms: u64,
    /// Pause before the boot prompt appears.
    pub prompt_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            char_interval_ms: 6,
            boot_interval_ms: 120,
            prompt_delay_ms: 300,
        }
    }
}

impl TypewriterConfig {
    pub fn char_interval(&self) -> Duration {
        // A zero interval would spin the timer.
        Duration::from_millis(self.char_interval_ms.max(1))
    }

    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.boot_interval_ms.max(1))
    }

    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }
}

/// Audio cue settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Minimum gap between two cues.
    pub debounce_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { debounce_ms: 25 }
    }
}

impl AudioConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial color theme
    pub theme: Theme,

    /// Keystroke sound cues
    pub sound: bool,

    /// Start at the prompt instead of the boot banner
    pub skip_boot: bool,

    /// Optional TOML file replacing the built-in portfolio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_file: Option<PathBuf>,

    /// Path or URL opened by the `resume` command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,

    pub typewriter: TypewriterConfig,

    pub audio: AudioConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            sound: true,
            skip_boot: false,
            portfolio_file: None,
            resume: None,
            typewriter: TypewriterConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, Theme::Green);
        assert!(config.sound);
        assert_eq!(config.typewriter.char_interval_ms, 6);
        assert_eq!(config.audio.debounce_ms, 25);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "theme = \"amber\"\n[typewriter]\nboot_interval_ms = 10\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, Theme::Amber);
        assert_eq!(config.typewriter.boot_interval_ms, 10);
        assert_eq!(config.typewriter.char_interval_ms, 6);
        assert!(!config.skip_boot);
    }

    #[test]
    fn test_load_invalid_theme_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "theme = \"magenta\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# portfolio_file ="));
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_char_interval_is_clamped() {
        let typewriter = TypewriterConfig {
            char_interval_ms: 0,
            ..TypewriterConfig::default()
        };
        assert_eq!(typewriter.char_interval(), Duration::from_millis(1));
    }
}
