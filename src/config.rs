//! Configuration file support
//!
//! Handles parsing of `.fc-analytics.toml` configuration files and
//! environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::import::rows::{DEFAULT_NULL_SENTINELS, LOCAL2_COLUMN, MECANISMO_COLUMN};
use crate::import::PositionalFallback;

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".fc-analytics.toml";

/// Default directory (relative to the workspace) holding the persisted stores
pub const DEFAULT_STORE_ROOT: &str = ".fc-analytics";

/// Environment variable for the store root directory
pub const ENV_STORE_ROOT: &str = "FC_ANALYTICS_STORE_ROOT";

/// Environment variable toggling the positional column fallback
pub const ENV_POSITIONAL_FALLBACK: &str = "FC_ANALYTICS_POSITIONAL_FALLBACK";

/// Environment variable toggling the `.csv` file name check
pub const ENV_REQUIRE_CSV_EXTENSION: &str = "FC_ANALYTICS_REQUIRE_CSV_EXTENSION";

/// Error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Ingestion configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestSection {
    /// Cell values mapped to null, compared verbatim
    #[serde(default = "default_null_sentinels")]
    pub null_sentinels: Vec<String>,

    /// Reject uploads whose file name does not end in `.csv`
    #[serde(default = "default_true")]
    pub require_csv_extension: bool,
}

fn default_null_sentinels() -> Vec<String> {
    DEFAULT_NULL_SENTINELS.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            null_sentinels: default_null_sentinels(),
            require_csv_extension: true,
        }
    }
}

/// Positional column fallback section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// 0-based column copied to `mecanismo_direto`
    #[serde(default = "default_mecanismo_column")]
    pub mecanismo_column: usize,

    /// 0-based column copied to `local2_direto`
    #[serde(default = "default_local2_column")]
    pub local2_column: usize,
}

fn default_mecanismo_column() -> usize {
    MECANISMO_COLUMN
}

fn default_local2_column() -> usize {
    LOCAL2_COLUMN
}

impl Default for PositionalSection {
    fn default() -> Self {
        Self {
            enabled: true,
            mecanismo_column: MECANISMO_COLUMN,
            local2_column: LOCAL2_COLUMN,
        }
    }
}

impl PositionalSection {
    /// Fallback columns, or `None` when disabled
    pub fn fallback(&self) -> Option<PositionalFallback> {
        self.enabled.then_some(PositionalFallback {
            mecanismo_column: self.mecanismo_column,
            local2_column: self.local2_column,
        })
    }
}

/// Storage configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the persisted stores (relative to workspace, or absolute)
    #[serde(default = "default_store_root")]
    pub root: String,
}

fn default_store_root() -> String {
    DEFAULT_STORE_ROOT.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            root: default_store_root(),
        }
    }
}

/// Main configuration structure
///
/// Represents the `.fc-analytics.toml` configuration file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IngestConfig {
    #[serde(default)]
    pub ingest: IngestSection,

    #[serde(default)]
    pub positional: PositionalSection,

    #[serde(default)]
    pub storage: StorageSection,
}

impl IngestConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a workspace directory
    ///
    /// Looks for `.fc-analytics.toml` in the workspace directory.
    /// Falls back to defaults if not found.
    pub fn load(workspace_path: &Path) -> ConfigResult<Self> {
        let config_path = workspace_path.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::Io(format!("Failed to read config: {}", e)))?;

            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a workspace directory
    pub fn save(&self, workspace_path: &Path) -> ConfigResult<()> {
        let config_path = workspace_path.join(CONFIG_FILENAME);
        let content = self.to_toml()?;

        std::fs::write(&config_path, content)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var(ENV_STORE_ROOT) {
            self.storage.root = root;
        }

        if let Ok(flag) = std::env::var(ENV_POSITIONAL_FALLBACK)
            && let Ok(enabled) = flag.parse()
        {
            self.positional.enabled = enabled;
        }

        if let Ok(flag) = std::env::var(ENV_REQUIRE_CSV_EXTENSION)
            && let Ok(required) = flag.parse()
        {
            self.ingest.require_csv_extension = required;
        }
    }

    /// Get the store directory for a workspace
    pub fn store_root(&self, workspace_path: &Path) -> PathBuf {
        if self.storage.root.is_empty() {
            workspace_path.join(DEFAULT_STORE_ROOT)
        } else if Path::new(&self.storage.root).is_absolute() {
            PathBuf::from(&self.storage.root)
        } else {
            workspace_path.join(&self.storage.root)
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# FC Analytics SDK Configuration

[ingest]
# Cell values treated as "no data" (compared verbatim)
null_sentinels = ["", "NA", "N/A", "-"]

# Only accept uploads whose file name ends in .csv
require_csv_extension = true

[positional]
# Copy fixed columns of wide injury exports to mecanismo_direto / local2_direto
enabled = true
mecanismo_column = 17
local2_column = 18

[storage]
# Directory holding the persisted stores (relative to workspace, or absolute)
root = ".fc-analytics"
"#
}
