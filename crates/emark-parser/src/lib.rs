//! Parser for the Entity Markup language.
//!
//! Parsing runs in three stages:
//!
//! 1. [`sanitize`](sanitize::sanitize) cleans the raw text,
//! 2. [`segment`](segment::segment) splits it into blocks at separator lines,
//! 3. [`build_tree`](tree::build_tree) turns each block into an entity chain.
//!
//! [`parse`] runs all three and collects the block roots into a
//! [`Document`]. The pipeline is total: malformed or unknown lines are
//! ignored rather than reported.

pub mod error;
pub mod line;
pub mod sanitize;
pub mod segment;
pub mod tree;


pub use error::DecodeError;

use log::debug;

use emark_core::model::Document;

/// Parse Entity Markup text into a [`Document`].
///
/// # Examples
///
/// ```
/// use emark_parser::{parse, segment::SEPARATOR};
///
/// let source = format!("{SEPARATOR}\n<Entity: Server>\n{SEPARATOR}");
/// let document = parse(&source);
/// assert_eq!(document.block_count(), 1);
/// assert_eq!(document.top_level().next().unwrap().name(), "Server");
/// ```
pub fn parse(text: &str) -> Document {
    let cleaned = sanitize::sanitize(text);
    let blocks = segment::segment(&cleaned);
    debug!(blocks = blocks.len(); "Segmented input");

    let roots: Vec<_> = blocks.iter().map(|block| tree::build_tree(block)).collect();
    let document = Document::new(roots);
    debug!(entities = document.entity_count(); "Document parsed");

    document
}

/// Decode UTF-8 bytes and parse them.
///
/// # Errors
///
/// Returns [`DecodeError`] when `bytes` is not valid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|err| DecodeError::new(err, bytes.len()))?;
    Ok(parse(text))
}
