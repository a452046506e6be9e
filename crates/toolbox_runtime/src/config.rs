//! Runtime configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quiet window applied to search input before the query takes effect.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Number of recent tools shown on the home summary.
pub const DEFAULT_HOME_RECENT_PREVIEW: usize = 4;

/// Which tool fields the search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Match the tool name only.
    Name,
    /// Match the tool name or its description.
    #[default]
    NameOrDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub search_debounce_ms: u64,
    pub search_scope: SearchScope,
    pub home_recent_preview: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            search_scope: SearchScope::default(),
            home_recent_preview: DEFAULT_HOME_RECENT_PREVIEW,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RuntimeConfig {
    /// Parses a TOML document; missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or mistyped values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}
