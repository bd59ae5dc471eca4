//! Temporary storage for packaged (MSIX/UWP) Windows apps.
//!
//! Packaged apps get a per-app temp folder from `ApplicationData`. The
//! recording file is created there up front with `ReplaceExisting`, so a
//! stale recording from a previous run is discarded.
//!
//! Unpackaged desktop apps have no package identity and `ApplicationData`
//! fails for them. Use `CreatingTempPathResolver` from the core crate there.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use windows::core::HSTRING;
use windows::Storage::{ApplicationData, CreationCollisionOption, StorageFolder};

use audio_recorder_core::{RecorderError, TempPathResolver};

/// Resolves recording paths inside `ApplicationData.Current.TemporaryFolder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagedTempFolderResolver;

impl PackagedTempFolderResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TempPathResolver for PackagedTempFolderResolver {
    fn name(&self) -> &'static str {
        "packaged-temp-folder"
    }

    fn temp_directory(&self) -> Result<PathBuf, RecorderError> {
        let folder = temp_folder()?;
        folder_path(&folder)
    }

    async fn resolve(&self, file_name: &str) -> Result<PathBuf, RecorderError> {
        let file_name = file_name.to_string();
        // CreateFileAsync completes on a WinRT worker; wait for it off the runtime.
        tokio::task::spawn_blocking(move || create_replacing(&file_name))
            .await
            .map_err(|e| RecorderError::StorageTask(e.to_string()))?
    }
}

fn temp_folder() -> Result<StorageFolder, RecorderError> {
    ApplicationData::Current()
        .and_then(|data| data.TemporaryFolder())
        .map_err(|e| RecorderError::TemporaryStorageUnavailable(io::Error::from(e)))
}

fn folder_path(folder: &StorageFolder) -> Result<PathBuf, RecorderError> {
    let path = folder
        .Path()
        .map_err(|e| RecorderError::TemporaryStorageUnavailable(io::Error::from(e)))?;
    Ok(PathBuf::from(path.to_os_string()))
}

fn create_replacing(file_name: &str) -> Result<PathBuf, RecorderError> {
    let folder = temp_folder()?;
    let target = folder_path(&folder)?.join(file_name);

    let file = folder
        .CreateFileAsync(&HSTRING::from(file_name), CreationCollisionOption::ReplaceExisting)
        .and_then(|operation| operation.get())
        .map_err(|e| RecorderError::FileCreation {
            path: target.clone(),
            source: io::Error::from(e),
        })?;

    let path = file.Path().map_err(|e| RecorderError::FileCreation {
        path: target,
        source: io::Error::from(e),
    })?;

    log::debug!("Created packaged temp file {}", path);
    Ok(PathBuf::from(path.to_os_string()))
}
