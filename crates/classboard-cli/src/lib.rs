//! Classboard CLI library
//!
//! This module contains the core CLI logic for the Classboard tool: importing
//! XMI documents into board files and exporting board files back to XMI.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::{info, warn};

use classboard::{BoardBuilder, ClassboardError};

/// Run the Classboard CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ClassboardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed or empty XMI documents
/// - Board files that are not valid JSON boards
pub fn run(args: &Args) -> Result<(), ClassboardError> {
    let mut app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Import {
            input,
            output,
            seed,
        } => {
            info!(input_path = input, output_path = output; "Importing XMI document");
            if seed.is_some() {
                app_config.import = app_config.import.with_seed(*seed);
            }

            let source = fs::read_to_string(input)?;
            let builder = BoardBuilder::new(app_config);
            let decoded = builder.import(&source)?;

            for reportable in error_adapter::warnings_to_reportables(&decoded, &source) {
                warn!("{}", error_adapter::render(&reportable));
            }

            let board = decoded.into_board();
            fs::write(output, builder.save_board(&board)?)?;

            info!(output_file = output, title = board.description(); "Board saved successfully");
        }
        Command::Export { input, output } => {
            info!(input_path = input, output_path = output; "Exporting board");

            let json = fs::read_to_string(input)?;
            let builder = BoardBuilder::new(app_config);
            let board = builder.load_board(&json)?;
            fs::write(output, builder.export(board.graph()))?;

            info!(output_file = output; "XMI exported successfully");
        }
    }

    Ok(())
}
