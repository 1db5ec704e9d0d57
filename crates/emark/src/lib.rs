//! Emark - parse Entity Markup and render it as nested, styled HTML.
//!
//! Entity Markup describes entities, their descriptions and their named
//! relations ("morphisms") in blocks separated by a line of 56 dashes:
//!
//! ```text
//! --------------------------------------------------------
//! <Entity: Gateway>
//! Description: "Routes traffic"
//! <Morphism: forwards>
//! [validate token]
//! --------------------------------------------------------
//! ```
//!
//! [`render`] turns such text into an HTML fragment in one call.
//! [`MarkupBuilder`] exposes the individual stages and the other output
//! formats (standalone page, plain-text outline).

pub mod config;
pub mod export;
pub mod theme;

mod error;

pub use emark_core::{color, model};
pub use emark_parser::{DecodeError, segment::SEPARATOR};

pub use error::EmarkError;
pub use export::OutputFormat;

use log::{debug, info, trace};

use config::AppConfig;
use export::{
    Exporter, html::HtmlExporter, outline::OutlineExporter, page::PageExporter,
    sink::FragmentSink,
};
use model::Document;
use theme::Theme;

/// Builder for parsing and rendering Entity Markup.
///
/// # Examples
///
/// ```rust
/// use emark::{MarkupBuilder, SEPARATOR, config::AppConfig};
///
/// let source = format!("{SEPARATOR}\n<Entity: Gateway>\n{SEPARATOR}");
///
/// let builder = MarkupBuilder::new(AppConfig::default());
/// let document = builder.parse(&source);
/// let html = builder.render_fragment(&document);
/// assert!(html.contains("<h2>Gateway</h2>"));
///
/// // Or use default config
/// let builder = MarkupBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    config: AppConfig,
}

impl MarkupBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a [`Document`].
    ///
    /// Never fails: unrecognized lines and stray content are ignored.
    pub fn parse(&self, source: &str) -> Document {
        info!("Parsing entity markup");
        let document = emark_parser::parse(source);
        debug!(
            blocks = document.block_count(),
            entities = document.entity_count();
            "Document parsed"
        );
        trace!(document:?; "Parsed document");
        document
    }

    /// Decode UTF-8 input and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`EmarkError::Decode`] if `bytes` is not valid UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Document, EmarkError> {
        let source = std::str::from_utf8(bytes).map_err(|err| {
            EmarkError::new_decode_error(DecodeError::new(err, bytes.len()), bytes)
        })?;
        Ok(self.parse(source))
    }

    /// Render the HTML fragment for a document.
    pub fn render_fragment(&self, document: &Document) -> String {
        HtmlExporter.export(document)
    }

    /// Render a standalone HTML page using the configured theme and title.
    ///
    /// # Errors
    ///
    /// Returns [`EmarkError::Style`] if the configured colors are invalid.
    pub fn render_page(&self, document: &Document) -> Result<String, EmarkError> {
        let theme = Theme::from_config(self.config.style())?;
        let exporter = PageExporter::new(self.config.render().title(), theme);
        Ok(exporter.export(document))
    }

    /// Render the plain-text outline of a document.
    pub fn render_outline(&self, document: &Document) -> String {
        OutlineExporter.export(document)
    }

    /// Render in the given format, or the configured one when `None`.
    ///
    /// # Errors
    ///
    /// Fails only for [`OutputFormat::Page`] with an invalid theme.
    pub fn render(
        &self,
        document: &Document,
        format: Option<OutputFormat>,
    ) -> Result<String, EmarkError> {
        let format = format.unwrap_or_else(|| self.config.render().format());
        info!(format = format.as_str(); "Rendering document");

        match format {
            OutputFormat::Fragment => Ok(self.render_fragment(document)),
            OutputFormat::Page => self.render_page(document),
            OutputFormat::Outline => Ok(self.render_outline(document)),
        }
    }

    /// Parse `source`, render it and hand the result to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`EmarkError::Output`] if the sink rejects the output, or a
    /// rendering error from [`MarkupBuilder::render`].
    pub fn render_to(
        &self,
        source: &str,
        format: Option<OutputFormat>,
        sink: &mut impl FragmentSink,
    ) -> Result<(), EmarkError> {
        let document = self.parse(source);
        let output = self.render(&document, format)?;
        sink.accept(&output)?;
        Ok(())
    }
}

/// Parse Entity Markup and render the HTML fragment in one step.
///
/// Only the entities declared in blocks are rendered; the per-block roots are
/// not. The result is empty when the text has no blocks.
///
/// # Examples
///
/// ```
/// use emark::{SEPARATOR, render};
///
/// let text = format!("{SEPARATOR}\n<Entity: A>\n<Entity: B>\n{SEPARATOR}");
/// let html = render(&text);
/// assert!(html.contains(r#"data-level="1""#));
/// assert_eq!(render("no blocks here"), "");
/// ```
pub fn render(text: &str) -> String {
    HtmlExporter.export(&emark_parser::parse(text))
}
