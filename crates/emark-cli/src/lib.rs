//! CLI logic for the Emark renderer.
//!
//! This module contains the core CLI logic: configuration lookup, reading
//! the input, rendering, and delivering the output to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use emark::{
    EmarkError, MarkupBuilder,
    export::sink::{FileSink, FragmentSink, WriterSink},
};

/// Output path that selects stdout.
const STDOUT_PATH: &str = "-";

/// Run the Emark CLI application
///
/// This function processes the input file through the Emark pipeline and
/// writes the rendered output to the requested destination.
///
/// # Errors
///
/// Returns `EmarkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input that is not valid UTF-8
/// - Invalid theme colors
/// - Output write failures
pub fn run(args: &Args) -> Result<(), EmarkError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing entity markup"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let bytes = fs::read(&args.input)?;

    let builder = MarkupBuilder::new(app_config);
    let document = builder.parse_bytes(&bytes)?;
    let output = builder.render(&document, args.format)?;

    if args.output == STDOUT_PATH {
        WriterSink::new(io::stdout().lock()).accept(&output)?;
    } else {
        FileSink::new(&args.output).accept(&output)?;
        info!(output_file = args.output; "Output written successfully");
    }

    Ok(())
}
