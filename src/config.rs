use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suggestion radius used when nothing else is configured.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

pub const DEFAULT_CORRECTION_LOG: &str = "custom_dictionary.txt";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Largest edit distance at which a dictionary word is still offered as a suggestion.
    pub max_distance: usize,
    /// Where learned corrections are appended, one word per line.
    pub correction_log: PathBuf,
    /// Word list to load at startup, if any.
    pub word_list: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            correction_log: PathBuf::from(DEFAULT_CORRECTION_LOG),
            word_list: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
