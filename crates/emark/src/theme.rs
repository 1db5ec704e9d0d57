//! Visual classification of rendered entity cards.
//!
//! Rendered cards carry their nesting depth in a `data-level` attribute. A
//! [`Theme`] maps depths to accent colors and produces the matching style
//! sheet. Nothing is injected anywhere: callers decide where the style sheet
//! goes (the standalone page exporter embeds it).

use emark_core::color::Color;

use crate::{config::StyleConfig, error::EmarkError};

/// Accents for depth 0 to 3.
const DEFAULT_ACCENTS: [&str; 4] = ["#007bff", "#28a745", "#dc3545", "#ffc107"];

/// Rules shared by every card, independent of depth.
const BASE_RULES: &str = "\
.entity-card {
    border: 1px solid #ddd;
    margin: 1rem;
    padding: 1rem;
    border-radius: 8px;
    background: #fff;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.entity-header {
    border-bottom: 1px solid #eee;
    margin-bottom: 1rem;
}

.description {
    color: #666;
    font-style: italic;
    margin: 0.5rem 0;
}

.morphisms {
    margin-left: 1rem;
}

.morphism {
    margin: 1rem 0;
    padding: 0.5rem;
    background: #f8f9fa;
    border-radius: 4px;
}

.children {
    margin-left: 2rem;
}
";

/// Per-depth accent colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    accents: Vec<Color>,
    fallback: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let accents = DEFAULT_ACCENTS
            .iter()
            .filter_map(|accent| Color::new(accent).ok())
            .collect();
        Self {
            accents,
            fallback: None,
        }
    }
}

impl Theme {
    /// Create a theme from explicit accents.
    ///
    /// `accents[d]` styles depth `d`; deeper cards use `fallback`, or no
    /// accent at all when it is `None`.
    pub fn new(accents: Vec<Color>, fallback: Option<Color>) -> Self {
        Self { accents, fallback }
    }

    /// Build a theme from configuration, keeping the default palette for
    /// anything left unset.
    ///
    /// # Errors
    ///
    /// Returns [`EmarkError::Style`] if a configured color is invalid.
    pub fn from_config(style: &StyleConfig) -> Result<Self, EmarkError> {
        let mut theme = Self::default();
        if let Some(accents) = style.depth_colors().map_err(EmarkError::Style)? {
            theme.accents = accents;
        }
        theme.fallback = style.fallback_color().map_err(EmarkError::Style)?;
        Ok(theme)
    }

    /// Render the CSS for this theme.
    pub fn stylesheet(&self) -> String {
        let mut css = String::from(BASE_RULES);

        // Same specificity as the per-depth rules, so it has to come first.
        if let Some(fallback) = &self.fallback {
            css.push_str(&format!(
                "\n.entity-card[data-level] {{\n    border-left: 4px solid {};\n}}\n",
                fallback.as_css()
            ));
        }

        for (depth, accent) in self.accents.iter().enumerate() {
            css.push_str(&format!(
                "\n.entity-card[data-level=\"{depth}\"] {{\n    border-left: 4px solid {};\n}}\n",
                accent.as_css()
            ));
        }

        css
    }
}
