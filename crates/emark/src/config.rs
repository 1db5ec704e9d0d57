//! Configuration types for Emark rendering.
//!
//! This module provides configuration structures that control how documents
//! are rendered and styled. All types implement [`serde::Deserialize`] so they
//! can be loaded from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Output format and page title.
//! - [`StyleConfig`] - Per-depth accent colors used by the [`Theme`](crate::theme::Theme).
//!
//! # Example
//!
//! ```
//! # use emark::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().depth_colors().is_ok());
//! ```

use serde::Deserialize;

use emark_core::color::Color;

use crate::export::OutputFormat;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Default [`OutputFormat`] when the caller does not pick one.
    #[serde(default)]
    format: OutputFormat,

    /// Title of standalone pages.
    #[serde(default)]
    title: Option<String>,
}

impl RenderConfig {
    pub fn new(format: OutputFormat, title: Option<String>) -> Self {
        Self { format, title }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the configured page title, falling back to `"Entities"`.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Entities")
    }
}

/// Visual styling configuration.
///
/// Colors are kept as strings until the theme is built so that a bad value
/// is reported with context instead of failing deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Accent colors for depth 0, 1, 2, ... Unset means the built-in palette.
    #[serde(default)]
    depth_colors: Option<Vec<String>>,

    /// Accent for depths without a dedicated color.
    #[serde(default)]
    fallback_color: Option<String>,
}

impl StyleConfig {
    pub fn new(depth_colors: Option<Vec<String>>, fallback_color: Option<String>) -> Self {
        Self {
            depth_colors,
            fallback_color,
        }
    }

    /// Returns the parsed per-depth colors, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error naming the depth whose color cannot be parsed.
    pub fn depth_colors(&self) -> Result<Option<Vec<Color>>, String> {
        self.depth_colors
            .as_ref()
            .map(|colors| {
                colors
                    .iter()
                    .enumerate()
                    .map(|(depth, color)| {
                        Color::new(color)
                            .map_err(|err| format!("Invalid color for depth {depth} in config: {err}"))
                    })
                    .collect()
            })
            .transpose()
    }

    /// Returns the parsed fallback color, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn fallback_color(&self) -> Result<Option<Color>, String> {
        self.fallback_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid fallback color in config: {err}"))
    }
}
