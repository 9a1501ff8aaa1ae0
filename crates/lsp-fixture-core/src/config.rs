//! Configuration types and loading.
//!
//! The configuration holds the raw inputs of the two users the entry
//! sequence constructs. Entries are not validated on load:
//! [`User::new`](crate::User::new) is the single validation point.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "LSP_FIXTURE_CONFIG";

/// File name searched for in the current and user config directories.
pub const CONFIG_FILE_NAME: &str = "lsp-fixture.toml";

/// Raw constructor inputs for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// Name passed to the constructor.
    pub name: String,
    /// Age passed to the constructor; may be negative.
    pub age: i64,
    /// Email passed to the constructor.
    #[serde(default)]
    pub email: String,
}

impl UserEntry {
    /// Build an entry from literal inputs.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// Inputs for the entry sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// The user whose failure aborts the run.
    #[serde(default = "default_primary")]
    pub primary: UserEntry,

    /// The user whose failure is discarded.
    #[serde(default = "default_secondary")]
    pub secondary: UserEntry,
}

fn default_primary() -> UserEntry {
    UserEntry::new("John Doe", 30, "john@example.com")
}

fn default_secondary() -> UserEntry {
    UserEntry::new("Jane", 25, "jane@example.com")
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from the default locations.
    ///
    /// Paths checked in order:
    /// 1. `$LSP_FIXTURE_CONFIG`
    /// 2. `./lsp-fixture.toml`
    /// 3. `<config dir>/lsp-fixture/lsp-fixture.toml`
    ///
    /// Falls back to the built-in inputs when none exists. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if a found file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("lsp-fixture").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
        }

        tracing::debug!("no configuration file found, using built-in inputs");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Render the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
