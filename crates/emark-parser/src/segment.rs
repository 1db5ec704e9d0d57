//! Block segmentation.
//!
//! Blocks are delimited by a line holding exactly [`SEPARATOR`]. Separators
//! toggle between "inside" and "outside" a block; only lines inside a block
//! are kept, and blank lines are dropped even there.

use log::trace;

/// The block delimiter: 56 dashes on a line of their own.
pub const SEPARATOR: &str = "--------------------------------------------------------";

/// Split sanitized text into blocks.
///
/// Each returned block is its retained lines, trimmed and joined with `\n`.
/// A block that is opened but never closed is still returned. Separator pairs
/// with nothing in between produce no block.
///
/// # Examples
///
/// ```
/// use emark_parser::segment::{SEPARATOR, segment};
///
/// let text = format!("ignored\n{SEPARATOR}\n  <Entity: A>\n\n{SEPARATOR}\nignored");
/// assert_eq!(segment(&text), vec!["<Entity: A>".to_string()]);
/// ```
pub fn segment(cleaned: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in cleaned.split('\n').map(str::trim) {
        if line == SEPARATOR {
            if in_block && !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
            in_block = !in_block;
            continue;
        }

        if in_block && !line.is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        trace!(lines = current.len(); "Flushing unterminated trailing block");
        blocks.push(current.join("\n"));
    }

    blocks
}
