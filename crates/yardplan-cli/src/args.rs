//! Command-line argument definitions for the Yardplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the request and output paths,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Yardplan yard layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the yard request file (TOML)
    #[arg(help = "Path to the yard request file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

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
        let args = Args::parse_from(["yardplan", "yard.toml"]);
        assert_eq!(args.input, "yard.toml");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "yardplan",
            "yard.toml",
            "-o",
            "plan.svg",
            "-c",
            "config.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "plan.svg");
        assert_eq!(args.config.as_deref(), Some("config.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(Args::try_parse_from(["yardplan"]).is_err());
    }
}
