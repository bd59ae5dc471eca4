use std::fmt;

/// Operating system the crate was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    Windows,
    Ios,
    Macos,
    Android,
    Linux,
    Other,
}

impl TargetPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether the default temp path on this platform is backed by a file
    /// created up front (storage-provider targets) rather than a bare path.
    pub fn requires_file_creation(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Ios => "ios",
            Self::Macos => "macos",
            Self::Android => "android",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
