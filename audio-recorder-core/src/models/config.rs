use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::RecorderError;

/// File name used for the recording when the caller does not supply a path.
pub const DEFAULT_FILE_NAME: &str = "ARS_recording.wav";

/// Where the temporary-storage directory comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TempDirectory {
    /// The operating system's temp directory (`std::env::temp_dir()`).
    #[default]
    System,
    /// An explicit directory, e.g. an app sandbox or a test fixture.
    Fixed(PathBuf),
}

impl TempDirectory {
    /// Absolute location of the directory. Does not touch the filesystem.
    pub fn locate(&self) -> Result<PathBuf, RecorderError> {
        match self {
            Self::System => absolute(&std::env::temp_dir()),
            Self::Fixed(dir) => absolute(dir),
        }
    }
}

fn absolute(dir: &Path) -> Result<PathBuf, RecorderError> {
    std::path::absolute(dir).map_err(RecorderError::TemporaryStorageUnavailable)
}

/// Which path resolver a recorder uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    /// Picked from the build target (see `TargetPlatform::requires_file_creation`).
    #[default]
    PlatformDefault,
    /// Combine the temp directory with the file name, nothing else.
    Direct,
    /// Combine, then create (or replace) an empty file at that path.
    CreateFile,
}

/// Configuration for an `AudioRecorderService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfiguration {
    /// Caller-supplied recording path. When set, initialization leaves it alone.
    pub file_path: Option<PathBuf>,

    /// File name used inside the temp directory (default: `ARS_recording.wav`).
    pub default_file_name: String,

    /// Source of the temporary-storage directory (default: system temp dir).
    pub temp_directory: TempDirectory,

    /// Resolver selection (default: per build target).
    pub resolver: ResolverKind,
}

impl RecorderConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.default_file_name.as_str();
        if name.trim().is_empty() {
            return Err("default file name must not be empty".into());
        }
        let bare = Path::new(name).file_name() == Some(OsStr::new(name));
        if !bare || name.contains(['/', '\\']) {
            return Err(format!("default file name must be a bare file name: {}", name));
        }
        if let Some(path) = &self.file_path {
            if path.as_os_str().is_empty() {
                return Err("file path must not be empty when provided".into());
            }
        }
        if let TempDirectory::Fixed(dir) = &self.temp_directory {
            if dir.as_os_str().is_empty() {
                return Err("fixed temp directory must not be empty".into());
            }
        }
        Ok(())
    }

    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RecorderError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            RecorderError::ConfigurationFailed(format!("failed to parse configuration: {}", e))
        })?;
        config.validate().map_err(RecorderError::ConfigurationFailed)?;
        Ok(config)
    }
}

impl Default for RecorderConfiguration {
    fn default() -> Self {
        Self {
            file_path: None,
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            temp_directory: TempDirectory::System,
            resolver: ResolverKind::PlatformDefault,
        }
    }
}
