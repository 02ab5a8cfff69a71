use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while reading or writing dashboard settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path} could not be accessed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings could not be encoded")]
    Encode(#[from] serde_json::Error),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
