//! # audio-recorder-core
//!
//! Platform-agnostic core of the audio recorder.
//!
//! Decides where a recording is written before capture begins. When the
//! caller does not supply a path, a platform `TempPathResolver` produces one
//! inside temporary storage using a fixed default file name.
//!
//! ## Architecture
//!
//! ```text
//! audio-recorder-core (this crate)
//! ├── traits/       ← TempPathResolver
//! ├── models/       ← RecorderError, RecorderConfiguration, TargetPlatform
//! ├── storage/      ← DirectTempPathResolver, CreatingTempPathResolver, resolver selection
//! └── session/      ← AudioRecorderService (owns the recording target path)
//! ```

pub mod models;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::{RecorderConfiguration, ResolverKind, TempDirectory, DEFAULT_FILE_NAME};
pub use models::error::RecorderError;
pub use models::platform::TargetPlatform;
pub use session::recorder::AudioRecorderService;
pub use storage::temp_path::{
    default_resolver, resolver_for, CreatingTempPathResolver, DirectTempPathResolver,
};
pub use traits::path_resolver::TempPathResolver;
