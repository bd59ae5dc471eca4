use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a recording target.
///
/// Storage failures keep the platform `io::Error` as their source so callers
/// see exactly what the filesystem (or storage provider) reported.
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("temporary storage unavailable: {0}")]
    TemporaryStorageUnavailable(#[source] io::Error),

    #[error("failed to create {}: {source}", path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage task failed: {0}")]
    StorageTask(String),
}

impl RecorderError {
    /// The underlying I/O error, if this failure came from storage.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::TemporaryStorageUnavailable(source) | Self::FileCreation { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
