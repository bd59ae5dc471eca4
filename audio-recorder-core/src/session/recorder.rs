use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::config::RecorderConfiguration;
use crate::models::error::RecorderError;
use crate::storage::temp_path::resolver_for;
use crate::traits::path_resolver::TempPathResolver;

/// Owner of the recording target path.
///
/// The path starts out as whatever the caller configured (possibly nothing).
/// `init` fills it in from temporary storage exactly once; the recording
/// pipeline reads it afterwards through `file_path`.
///
/// ```text
/// new(config) ──► [path: None | caller path]
///                      │ init()
///                      ▼
///              [path: resolver.resolve(default_file_name)]
/// ```
pub struct AudioRecorderService {
    file_path: RwLock<Option<PathBuf>>,
    default_file_name: String,
    resolver: Arc<dyn TempPathResolver>,
}

impl AudioRecorderService {
    /// Build a service with the resolver selected by `config.resolver`.
    pub fn new(config: RecorderConfiguration) -> Result<Self, RecorderError> {
        let resolver = resolver_for(&config);
        Self::with_resolver(config, resolver)
    }

    /// Build a service around a caller-provided resolver.
    pub fn with_resolver(
        config: RecorderConfiguration,
        resolver: Arc<dyn TempPathResolver>,
    ) -> Result<Self, RecorderError> {
        config.validate().map_err(RecorderError::ConfigurationFailed)?;
        log::debug!(
            "Recorder service using '{}' resolver (file path preset: {})",
            resolver.name(),
            config.file_path.is_some()
        );

        Ok(Self {
            file_path: RwLock::new(config.file_path),
            default_file_name: config.default_file_name,
            resolver,
        })
    }

    /// Make sure a recording path exists before capture starts.
    ///
    /// Does nothing when a path is already set. Otherwise resolves
    /// `default_file_name` in temporary storage and stores the result.
    /// Storage errors are returned as-is and leave the path unset.
    pub async fn init(&self) -> Result<(), RecorderError> {
        let preset = self.file_path.read().is_some();
        if preset {
            return Ok(());
        }

        let resolved = self.resolver.resolve(&self.default_file_name).await?;

        let mut file_path = self.file_path.write();
        if let Some(existing) = file_path.as_ref() {
            log::warn!(
                "Recording path was set to {} while resolving; keeping it over {}",
                existing.display(),
                resolved.display()
            );
            return Ok(());
        }

        log::info!("Recording path set to {}", resolved.display());
        *file_path = Some(resolved);
        Ok(())
    }

    /// Current recording path, if one has been supplied or resolved.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file_path.read().clone()
    }

    /// Path of the recorded audio file. Same as `file_path`.
    pub fn get_audio_file_path(&self) -> Option<PathBuf> {
        self.file_path()
    }

    /// Supply the recording path explicitly. A later `init` keeps it.
    pub fn set_file_path(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::debug!("Recording path supplied by caller: {}", path.display());
        *self.file_path.write() = Some(path);
    }

    pub fn default_file_name(&self) -> &str {
        &self.default_file_name
    }

    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }
}
