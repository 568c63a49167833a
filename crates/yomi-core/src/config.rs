use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use yomi_text::DictionaryProvider;

use crate::error::YomiError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sort: SortSettings,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// Settings consumed by [`ComparatorFactory`](crate::comparator::ComparatorFactory).
///
/// `Default` turns every option off; the shipped `default.toml` turns them on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
    /// Compare embedded digit runs by numeric value.
    pub sort_alphanum: bool,
    /// Order albums by release year before name.
    pub sort_albums_by_year: bool,
    /// Disable year ordering under parents named with a variable prefix.
    pub prohibit_sort_various: bool,
    /// Lowercase prefixes identifying compilation-style parents.
    pub variable_prefixes: Vec<String>,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            sort_alphanum: false,
            sort_albums_by_year: false,
            prohibit_sort_various: false,
            variable_prefixes: vec!["various".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// TOML file with extra readings layered over the built-in dictionary.
    pub user_dictionary: Option<PathBuf>,
}

impl AppConfig {
    /// Load config: user file (if exists), otherwise built-in defaults.
    pub fn load() -> Result<Self, YomiError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::parse(DEFAULT_CONFIG)
        }
    }

    /// Load config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, YomiError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| YomiError::Config(e.to_string()))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, YomiError> {
        toml::from_str(content).map_err(|e| YomiError::Config(e.to_string()))
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), YomiError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), YomiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| YomiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the reading provider, layering the user dictionary if configured.
    pub fn reading_provider(&self) -> Result<DictionaryProvider, YomiError> {
        match &self.dictionary.user_dictionary {
            Some(path) => Ok(DictionaryProvider::load(path)?),
            None => Ok(DictionaryProvider::builtin()),
        }
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "yomi")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
