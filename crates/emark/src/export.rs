//! Exporters that turn a parsed [`Document`] into output text, and the sinks
//! that receive it.
//!
//! - [`html`]: the nested HTML fragment (the main output).
//! - [`page`]: a standalone HTML page embedding the fragment and a theme.
//! - [`outline`]: a plain-text tree for terminals.
//! - [`sink`]: destinations for rendered output.

pub mod html;
pub mod outline;
pub mod page;
pub mod sink;

use std::{fmt, io, path::PathBuf, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use emark_core::model::Document;

/// Errors raised while delivering rendered output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write `{path}`: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output stream: {0}")]
    Stream(#[from] io::Error),
}

/// Renders a whole document to text.
pub trait Exporter {
    fn export(&self, document: &Document) -> String;
}

/// The output formats understood by [`MarkupBuilder`](crate::MarkupBuilder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare HTML fragment, ready to be attached to a page.
    #[default]
    Fragment,
    /// Complete HTML document with an embedded style sheet.
    Page,
    /// Indented plain-text tree.
    Outline,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fragment => "fragment",
            Self::Page => "page",
            Self::Outline => "outline",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fragment" | "html" => Ok(Self::Fragment),
            "page" => Ok(Self::Page),
            "outline" | "tree" => Ok(Self::Outline),
            other => Err(format!(
                "unknown output format `{other}` (expected fragment, page or outline)"
            )),
        }
    }
}
