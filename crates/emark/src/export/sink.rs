//! Destinations for rendered output.
//!
//! A sink only has to accept a markup string. Attaching it to a live display
//! is up to the implementor.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use super::Error;

/// Something that accepts a rendered fragment.
pub trait FragmentSink {
    /// Take ownership of the output, replacing anything accepted before.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the output cannot be delivered.
    fn accept(&mut self, fragment: &str) -> Result<(), Error>;
}

/// A `String` sink holds the latest fragment, like assigning `innerHTML`.
impl FragmentSink for String {
    fn accept(&mut self, fragment: &str) -> Result<(), Error> {
        self.clear();
        self.push_str(fragment);
        Ok(())
    }
}

/// Writes the fragment to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FragmentSink for FileSink {
    fn accept(&mut self, fragment: &str) -> Result<(), Error> {
        debug!(path = self.path.display().to_string(), bytes = fragment.len(); "Writing output file");
        fs::write(&self.path, fragment).map_err(|source| Error::File {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes the fragment to any [`Write`] stream, such as stdout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FragmentSink for WriterSink<W> {
    fn accept(&mut self, fragment: &str) -> Result<(), Error> {
        self.writer.write_all(fragment.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
