//! Error types for LZSS operations.
//!
//! Every failure the codec can report is a variant of [`LzssError`]:
//! configuration problems detected before any I/O, I/O failures from the
//! reader/writer collaborators, and malformed compressed streams.

use std::io;
use thiserror::Error;

/// The main error type for LZSS operations.
#[derive(Debug, Error)]
pub enum LzssError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Window or match-length parameters that cannot be encoded.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the violated constraint.
        message: String,
    },

    /// The compressed stream ended inside a token payload.
    #[error("Truncated stream at offset {offset}: expected {expected} more bytes")]
    TruncatedStream {
        /// Compressed-stream byte offset where the input ran out.
        offset: u64,
        /// Number of payload bytes that were still expected.
        expected: usize,
    },

    /// Back-reference to bytes that were never produced.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Number of bytes available in the history window.
        history_size: usize,
    },
}

/// Result type alias for LZSS operations.
pub type Result<T> = std::result::Result<T, LzssError>;

impl LzssError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(offset: u64, expected: usize) -> Self {
        Self::TruncatedStream { offset, expected }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Whether this error means the compressed input was cut short.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedStream { .. })
    }
}
