//! Standalone HTML page output.

use emark_core::model::Document;

use super::{Exporter, html::HtmlExporter};
use crate::theme::Theme;

/// Wraps the HTML fragment in a complete document with the theme's style sheet.
#[derive(Debug, Clone)]
pub struct PageExporter {
    title: String,
    theme: Theme,
}

impl PageExporter {
    pub fn new(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            theme,
        }
    }
}

impl Exporter for PageExporter {
    fn export(&self, document: &Document) -> String {
        let fragment = HtmlExporter.export(document);
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n<main class=\"entities\">{fragment}</main>\n</body>\n</html>\n",
            title = escape_text(&self.title),
            css = self.theme.stylesheet(),
        )
    }
}

/// Minimal escaping for text that did not go through the parser.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
