use std::path::PathBuf;

use staffdesk_table::TableError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records in {path}: {source}")]
    Records {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("column {0:?} cannot be sorted")]
    NotSortable(String),
}
