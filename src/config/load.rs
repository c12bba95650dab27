//! The main config loading module for lsr.
//!
//! Handles loading and deserializing settings from `lsr.toml`.
//!
//! Provides the main [Config] struct and the internal [RawConfig] used for parsing.
//! A missing file is not an error: the internal defaults are used.

use crate::config::General;
use crate::utils::get_home;

use log::{debug, warn};
use serde::Deserialize;

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
}

/// Main configuration struct for lsr.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    general: General,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    warn!("error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    /// Determine the default configuration file path.
    /// Checks the LSR_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lsr/lsr.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LSR_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lsr/lsr.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lsr/lsr.toml");
        }
        PathBuf::from("lsr.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = r##"# lsr.toml - default configuration for lsr
# Command-line flags are applied on top of these values.

[general]
# show_hidden = false      # like -a
# long_format = false      # like -l
# reverse = false          # like -r
# human_sizes = false      # like -h
# sort = "name"            # "name", "time" (-t) or "size" (-S)
"##;

        fs::write(path, toml)?;
        debug!("default config written to {}", path.display());
        Ok(())
    }
}
