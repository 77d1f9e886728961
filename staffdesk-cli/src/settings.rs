//! User settings.
//!
//! Override hierarchy: defaults → `config.toml` → command-line flags.
//! The file lives at [`paths::config_file`](crate::paths::config_file).
//! A missing file means defaults; a malformed one is an error.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde::Serialize;
use staffdesk_table::PageSize;
use staffdesk_table::TableError;
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`. Every field is optional.
///
/// ```toml
/// page_size = 20
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Rows per page: 5, 10, 20 or 50.
    pub page_size: Option<usize>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configured page size, or the default when unset.
    pub fn page_size(&self) -> Result<PageSize, TableError> {
        self.page_size
            .map(PageSize::try_from)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Configured log level, or `info` when unset or unrecognised.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or(LevelFilter::Info)
    }
}

/// Parses a level name case-insensitively.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(name.trim()).ok()
}
