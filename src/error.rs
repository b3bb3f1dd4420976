//! Error types for wavescope
//!
//! All errors use the WavescopeError type, providing consistent
//! error handling across decoding, inspection, and rendering.

use thiserror::Error;

/// Result type alias using WavescopeError
pub type Result<T> = std::result::Result<T, WavescopeError>;

/// All possible errors in wavescope
#[derive(Error, Debug)]
pub enum WavescopeError {
    // Audio I/O errors
    #[error("Failed to read audio file: {path}")]
    AudioRead {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Invalid audio format: {details}")]
    InvalidFormat { details: String },

    // Inspection errors
    #[error("Audio buffer is empty")]
    EmptyBuffer,

    // Rendering errors
    #[error("Chart rendering failed: {details}")]
    Chart { details: String },

    // Generic I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavescopeError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::AudioRead { .. } => "Check that the file exists and is a valid WAV file",
            Self::InvalidFormat { .. } => "Convert to integer PCM WAV (16/24/32-bit)",
            Self::EmptyBuffer => "The file decoded to zero samples; inspect the source file",
            Self::Chart { .. } => "Check that the output path is writable",
            Self::Io(_) => "Check the error details and try again",
        }
    }
}
