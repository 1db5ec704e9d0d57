//! Errors raised at the parser's input boundary.
//!
//! The grammar itself is permissive and never fails. The only error is
//! [`DecodeError`], for byte input that is not valid UTF-8.

use std::{ops::Range, str::Utf8Error};

use thiserror::Error;

/// Input bytes could not be decoded as UTF-8.
#[derive(Debug, Clone, Error)]
#[error("input is not valid UTF-8: invalid byte sequence at offset {offset}")]
pub struct DecodeError {
    offset: usize,
    len: usize,
    #[source]
    source: Utf8Error,
}

impl DecodeError {
    /// Build from the standard library error and the input it was raised for.
    pub fn new(source: Utf8Error, input_len: usize) -> Self {
        let offset = source.valid_up_to();
        // `None` means the input ended in the middle of a sequence.
        let len = source.error_len().unwrap_or(input_len - offset);
        Self {
            offset,
            len,
            source,
        }
    }

    /// Byte offset of the first invalid sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes of the invalid sequence.
    pub fn invalid_len(&self) -> usize {
        self.len
    }

    /// Byte range of the invalid sequence.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}
