use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::error::RecorderError;

/// Resolves where a recording lands when the caller did not pick a path.
///
/// One implementation per storage model:
/// - `DirectTempPathResolver` (plain filesystem, e.g. iOS, Linux, macOS)
/// - `CreatingTempPathResolver` (create-or-replace, the Windows default)
/// - `PackagedTempFolderResolver` in `audio-recorder-windows` (WinRT app temp folder)
///
/// `resolve` is async for every implementation. Resolvers that only compute a
/// path complete without suspending.
#[async_trait]
pub trait TempPathResolver: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Absolute temporary-storage directory this resolver writes into.
    fn temp_directory(&self) -> Result<PathBuf, RecorderError>;

    /// Produce the absolute path for `file_name` inside temporary storage,
    /// performing whatever side effects the storage model requires.
    async fn resolve(&self, file_name: &str) -> Result<PathBuf, RecorderError>;
}
