//! Command-line argument definitions for the Classboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects the direction of the conversion;
//! configuration file selection and logging verbosity apply to both.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Classboard tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Conversion to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import an XMI document into a board file
    Import {
        /// Path to the input XMI file
        input: String,

        /// Path to the output board file (JSON)
        #[arg(short, long, default_value = "board.json")]
        output: String,

        /// Seed for reproducible class placement
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export a board file as an XMI document
    Export {
        /// Path to the input board file (JSON)
        input: String,

        /// Path to the output XMI file
        #[arg(short, long, default_value = "diagram.xml")]
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_import_arguments() {
        let args = Args::parse_from([
            "classboard",
            "import",
            "in.xml",
            "--seed",
            "4",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Import { input, output, seed } => {
                assert_eq!(input, "in.xml");
                assert_eq!(output, "board.json");
                assert_eq!(seed, Some(4));
            }
            Command::Export { .. } => panic!("Expected import"),
        }
    }

    #[test]
    fn test_export_arguments() {
        let args = Args::parse_from([
            "classboard",
            "--config",
            "c.toml",
            "export",
            "b.json",
            "-o",
            "d.xml",
        ]);

        assert_eq!(args.config.as_deref(), Some("c.toml"));
        match args.command {
            Command::Export { input, output } => {
                assert_eq!(input, "b.json");
                assert_eq!(output, "d.xml");
            }
            Command::Import { .. } => panic!("Expected export"),
        }
    }
}
