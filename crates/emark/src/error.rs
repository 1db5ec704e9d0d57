//! Error types for Emark operations.
//!
//! Parsing itself never fails; [`EmarkError`] covers what can go wrong at the
//! edges: reading input, decoding it, building a theme and delivering output.

use std::io;

use thiserror::Error;

use emark_parser::DecodeError;

use crate::export;

/// The main error type for Emark operations.
///
/// # Diagnostic Variants
///
/// The `Decode` variant keeps a lossy copy of the input so that reporters can
/// point at the offending bytes.
#[derive(Debug, Error)]
pub enum EmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Decode { err: DecodeError, src: String },

    #[error("Output error: {0}")]
    Output(#[from] export::Error),

    #[error("Style error: {0}")]
    Style(String),
}

impl EmarkError {
    /// Create a new `Decode` error for the given input bytes.
    pub fn new_decode_error(err: DecodeError, bytes: &[u8]) -> Self {
        Self::Decode {
            err,
            src: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}
