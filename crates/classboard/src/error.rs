//! Error types for Classboard operations.
//!
//! This module provides the main error type [`ClassboardError`] which wraps
//! the error conditions of importing, exporting and storing boards.

use std::io;

use thiserror::Error;

use classboard_parser::error::DecodeError;

/// The main error type for Classboard operations.
///
/// # Diagnostic Variants
///
/// The `Decode` variant keeps the XML text next to the error so that its
/// span can be rendered against the source.
#[derive(Debug, Error)]
pub enum ClassboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Decode { err: DecodeError, src: String },

    #[error("Board store error: {0}")]
    Store(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClassboardError {
    /// Create a new `Decode` error with the associated XML text.
    pub fn new_decode_error(err: DecodeError, src: impl Into<String>) -> Self {
        Self::Decode {
            err,
            src: src.into(),
        }
    }
}
