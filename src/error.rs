//! Error types for the OCR pipeline.
//!
//! Every failure surfaces to the user as a single `Error: <message>` line, but the
//! variants keep decoding and recognition failures apart for logging and tests.

use std::path::PathBuf;

/// Result type alias for OCR library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting text from an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("cannot open {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The input file is not a decodable image
    #[error("cannot identify image file {}: {source}", path.display())]
    ImageDecode {
        /// Path of the rejected file
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// The decoded image could not be handed over to the engine
    #[error("failed to encode image for OCR: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// The OCR engine executable could not be started
    #[error("{} is not installed or it's not in your PATH: {source}", program.display())]
    EngineUnavailable {
        /// Program that failed to spawn
        program: PathBuf,
        /// Spawn error
        source: std::io::Error,
    },

    /// The OCR engine ran but reported a failure
    #[error("OCR failed: {0}")]
    Recognition(String),

    /// Rendering the structured report failed
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Page segmentation mode outside Tesseract's range
    #[error("Invalid page segmentation mode: {0} (expected 0-13)")]
    InvalidPageSegMode(u8),
}

impl Error {
    /// True when the failure happened before the image reached the engine.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::ImageDecode { .. })
    }

    /// True when the failure came from the OCR engine itself.
    pub fn is_recognition_error(&self) -> bool {
        matches!(
            self,
            Error::ImageEncode(_) | Error::EngineUnavailable { .. } | Error::Recognition(_)
        )
    }
}
