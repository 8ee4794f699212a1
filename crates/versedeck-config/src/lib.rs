use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use versedeck_engine::SplitLimits;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown size profile '{0}' (built-in: compact, roomy)")]
    UnknownProfile(String),
}

/// Splitter ceilings for one screen class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub max_paragraph_chars: usize,
    pub max_list_items: usize,
    pub max_list_chars: usize,
}

impl Profile {
    pub const COMPACT: &'static str = "compact";
    pub const ROOMY: &'static str = "roomy";

    pub fn compact() -> Self {
        SplitLimits::compact().into()
    }

    pub fn roomy() -> Self {
        SplitLimits::roomy().into()
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            Self::COMPACT => Some(Self::compact()),
            Self::ROOMY => Some(Self::roomy()),
            _ => None,
        }
    }
}

impl From<SplitLimits> for Profile {
    fn from(limits: SplitLimits) -> Self {
        Self {
            max_paragraph_chars: limits.max_paragraph_chars,
            max_list_items: limits.max_list_items,
            max_list_chars: limits.max_list_chars,
        }
    }
}

impl From<Profile> for SplitLimits {
    fn from(profile: Profile) -> Self {
        Self {
            max_paragraph_chars: profile.max_paragraph_chars,
            max_list_items: profile.max_list_items,
            max_list_chars: profile.max_list_chars,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document opened when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,
    /// Name of the active size profile.
    pub profile: String,
    /// Fixed slide budget; derived from the viewport when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_budget: Option<usize>,
    /// Give sections with no body a heading-only slide.
    pub title_only_slides: bool,
    /// User-defined profiles; these shadow the built-in ones.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: None,
            profile: Profile::ROOMY.to_string(),
            size_budget: None,
            title_only_slides: true,
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Reads a config file. A missing file is not an error: `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.document_path = config.document_path.map(expand_path);
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/versedeck");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The profile named by `profile`, user tables first, then built-ins.
    pub fn active_profile(&self) -> Result<Profile, ConfigError> {
        self.profiles
            .get(&self.profile)
            .copied()
            .or_else(|| Profile::builtin(&self.profile))
            .ok_or_else(|| ConfigError::UnknownProfile(self.profile.clone()))
    }
}

/// Expands `~` and `$VARS`; an unexpandable path is returned unchanged.
fn expand_path(path: PathBuf) -> PathBuf {
    shellexpand::full(&path.to_string_lossy())
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .unwrap_or(path)
}
