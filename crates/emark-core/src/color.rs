//! Color handling for Emark themes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Themes use it to validate the accent colors they emit
//! into style sheets.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Keeps the source string alongside the parsed value so that style sheets
/// reproduce the color exactly as the user wrote it.
#[derive(Clone, Debug)]
pub struct Color {
    color: DynamicColor,
    source: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use emark_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();
        match DynamicColor::from_str(trimmed) {
            Ok(color) => Ok(Self {
                color,
                source: trimmed.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color exactly as it was written, suitable for CSS output.
    pub fn as_css(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Color {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
