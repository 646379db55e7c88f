//! User settings for the command line front end.
//!
//! Settings come from an optional JSON file and are then overridden by
//! command line flags. The converter itself has nothing to configure.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Print generated numerals in lowercase.
    pub lowercase: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Location of the settings file in the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "innumerati")
            .context("Failed to get project directories")?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Loads settings from `explicit` when given, otherwise from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => {
                let settings = Self::load_from(path)?;
                Ok((settings, Some(path.to_path_buf())))
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    let settings = Self::load_from(&path)?;
                    Ok((settings, Some(path)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(contents).context("Failed to parse settings JSON")
    }

    /// Applies command line overrides on top of the loaded values.
    ///
    /// `None` keeps the loaded value, so `Some(false)` can switch off a file's
    /// `"lowercase": true`.
    pub fn with_overrides(mut self, lowercase: Option<bool>, format: Option<OutputFormat>) -> Self {
        if let Some(lowercase) = lowercase {
            self.lowercase = lowercase;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
