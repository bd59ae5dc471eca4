use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::config::{RecorderConfiguration, ResolverKind, TempDirectory};
use crate::models::error::RecorderError;
use crate::models::platform::TargetPlatform;
use crate::traits::path_resolver::TempPathResolver;

/// Combines the temp directory with the file name and leaves the disk alone.
///
/// The recording subsystem creates the file itself when it starts writing.
#[derive(Debug, Clone, Default)]
pub struct DirectTempPathResolver {
    directory: TempDirectory,
}

impl DirectTempPathResolver {
    pub fn new(directory: TempDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl TempPathResolver for DirectTempPathResolver {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn temp_directory(&self) -> Result<PathBuf, RecorderError> {
        self.directory.locate()
    }

    async fn resolve(&self, file_name: &str) -> Result<PathBuf, RecorderError> {
        let path = self.temp_directory()?.join(file_name);
        log::debug!("Resolved temp path {} (no file created)", path.display());
        Ok(path)
    }
}

/// Creates an empty file at the resolved path, replacing any existing file.
///
/// The temp directory is created first if it is missing.
#[derive(Debug, Clone, Default)]
pub struct CreatingTempPathResolver {
    directory: TempDirectory,
}

impl CreatingTempPathResolver {
    pub fn new(directory: TempDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl TempPathResolver for CreatingTempPathResolver {
    fn name(&self) -> &'static str {
        "create-file"
    }

    fn temp_directory(&self) -> Result<PathBuf, RecorderError> {
        self.directory.locate()
    }

    async fn resolve(&self, file_name: &str) -> Result<PathBuf, RecorderError> {
        let dir = self.temp_directory()?;
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(RecorderError::TemporaryStorageUnavailable)?;

        let path = dir.join(file_name);
        // Truncates an existing file, so the result is always empty.
        tokio::fs::File::create(&path)
            .await
            .map_err(|source| RecorderError::FileCreation {
                path: path.clone(),
                source,
            })?;

        log::debug!("Created empty temp file {}", path.display());
        Ok(path)
    }
}

/// Pick the resolver described by `config`.
pub fn resolver_for(config: &RecorderConfiguration) -> Arc<dyn TempPathResolver> {
    let directory = config.temp_directory.clone();
    let create_file = match config.resolver {
        ResolverKind::Direct => false,
        ResolverKind::CreateFile => true,
        ResolverKind::PlatformDefault => TargetPlatform::current().requires_file_creation(),
    };

    if create_file {
        Arc::new(CreatingTempPathResolver::new(directory))
    } else {
        Arc::new(DirectTempPathResolver::new(directory))
    }
}

/// Resolver for the build target, writing into the system temp directory.
pub fn default_resolver() -> Arc<dyn TempPathResolver> {
    resolver_for(&RecorderConfiguration::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::models::config::DEFAULT_FILE_NAME;

    #[cfg(unix)]
    #[tokio::test]
    async fn direct_combines_directory_and_name() {
        let resolver = DirectTempPathResolver::new(TempDirectory::Fixed(PathBuf::from("/tmp")));
        let path = resolver.resolve("recording.wav").await.unwrap();
        assert_eq!(path, PathBuf::from("/tmp/recording.wav"));
    }

    #[tokio::test]
    async fn direct_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = DirectTempPathResolver::new(TempDirectory::Fixed(dir.path().to_path_buf()));

        let path = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap();

        assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn create_file_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = CreatingTempPathResolver::new(TempDirectory::Fixed(dir.path().to_path_buf()));

        let path = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap();

        assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn create_file_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(&existing, b"RIFF old take").unwrap();

        let resolver = CreatingTempPathResolver::new(TempDirectory::Fixed(dir.path().to_path_buf()));
        let path = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap();

        assert_eq!(path, existing);
        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_file_makes_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("recorder").join("tmp");
        let resolver = CreatingTempPathResolver::new(TempDirectory::Fixed(nested.clone()));

        let path = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap();

        assert!(nested.is_dir());
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn create_file_fails_when_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let resolver = CreatingTempPathResolver::new(TempDirectory::Fixed(blocker));
        let err = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap_err();

        assert!(matches!(err, RecorderError::TemporaryStorageUnavailable(_)));
        assert!(err.io_error().is_some());
    }

    #[tokio::test]
    async fn create_file_fails_when_target_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(DEFAULT_FILE_NAME)).unwrap();

        let resolver = CreatingTempPathResolver::new(TempDirectory::Fixed(dir.path().to_path_buf()));
        let err = resolver.resolve(DEFAULT_FILE_NAME).await.unwrap_err();

        match err {
            RecorderError::FileCreation { path, .. } => {
                assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolver_for_honours_explicit_kind() {
        let direct = resolver_for(&RecorderConfiguration {
            resolver: ResolverKind::Direct,
            ..Default::default()
        });
        assert_eq!(direct.name(), "direct");

        let creating = resolver_for(&RecorderConfiguration {
            resolver: ResolverKind::CreateFile,
            ..Default::default()
        });
        assert_eq!(creating.name(), "create-file");
    }

    #[test]
    fn default_resolver_follows_platform() {
        let expected = if TargetPlatform::current().requires_file_creation() {
            "create-file"
        } else {
            "direct"
        };
        assert_eq!(default_resolver().name(), expected);
    }
}
