use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [transform](crate::transform::Transform).
///
/// Transforms are supplied by the caller, so any error type is accepted as long as it can be
/// sent across threads.
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for [MediaDataset](crate::MediaDataset).
#[derive(Error, Debug)]
pub enum MediaDatasetError {
    /// I/O operation error.
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),

    /// The image decoder rejected the file.
    #[error("Decode error: `{0}`")]
    Decode(#[from] image::ImageError),

    /// The file extension is not one of the configured media extensions.
    #[error("Unsupported file extension `{extension}` for `{}`", path.display())]
    UnsupportedFormat {
        /// Source path.
        path: PathBuf,
        /// Extension as found on the path, empty if there was none.
        extension: String,
    },

    /// The file is a video, which cannot be decoded yet.
    #[error("Video decoding is not supported: `{}`", .0.display())]
    VideoNotSupported(PathBuf),

    /// Indexed access on a drained buffer.
    #[error("Dataset is exhausted")]
    Exhausted,

    /// The transform failed.
    #[error("Transform error: `{0}`")]
    Transform(#[source] TransformError),
}

/// Configuration IO error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid format.
    #[error("Config error => Invalid format: {0}")]
    InvalidFormat(String),

    /// File not found.
    #[error("Config error => File not found: {0}")]
    FileNotFound(String),
}

/// Result alias used across the crate.
pub type Result<T, E = MediaDatasetError> = std::result::Result<T, E>;
