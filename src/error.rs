//! Error types for qrlogo.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for qrlogo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, saving or showing a QR image.
#[derive(Error, Debug)]
pub enum Error {
    /// The payload could not be encoded at the configured version and
    /// error correction level (usually because it is too long).
    #[error("failed to encode QR payload: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// A logo could not be decoded, or the output could not be written.
    #[error("image error for '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The platform image viewer could not be launched.
    #[error("failed to open '{}' in the image viewer: {source}", path.display())]
    Viewer { path: PathBuf, source: io::Error },
}
