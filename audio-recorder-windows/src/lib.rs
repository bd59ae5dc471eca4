//! # audio-recorder-windows
//!
//! Windows backend for audio-recorder-kit.
//!
//! Provides:
//! - `PackagedTempFolderResolver` — recording paths in the packaged app's
//!   WinRT temporary folder, created with replace-existing semantics
//!
//! Unpackaged desktop apps should keep the core crate's default resolver,
//! which creates the file in `%TEMP%`.
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use audio_recorder_core::{AudioRecorderService, RecorderConfiguration};
//! use audio_recorder_windows::PackagedTempFolderResolver;
//!
//! let service = AudioRecorderService::with_resolver(
//!     RecorderConfiguration::default(),
//!     Arc::new(PackagedTempFolderResolver::new()),
//! )?;
//! service.init().await?;
//! ```

#[cfg(target_os = "windows")]
pub mod app_temp_folder;

#[cfg(target_os = "windows")]
pub use app_temp_folder::PackagedTempFolderResolver;
