//! Command-line argument definitions for the Emark CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use emark::OutputFormat;

/// Command-line arguments for the Emark renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Entity Markup file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file, or `-` for stdout
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Output format (fragment, page, outline); defaults to the configured one
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["emark", "input.emk"]).unwrap();
        assert_eq!(args.input, "input.emk");
        assert_eq!(args.output, "out.html");
        assert_eq!(args.format, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_flag() {
        let args = Args::try_parse_from(["emark", "in.emk", "-f", "outline", "-o", "-"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Outline));
        assert_eq!(args.output, "-");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["emark", "in.emk", "--format", "pdf"]).is_err());
    }
}
