//! Classboard - UML class diagram boards with XMI interchange
//!
//! This library imports XMI 1.1 class diagrams into board graphs, exports
//! boards back to XMI for Enterprise Architect, and reads and writes the
//! board store format.

pub mod config;
pub mod export;

mod error;

pub use classboard_core::{feature, geometry, graph, relationship, store, validate};
pub use classboard_parser::{DecodedBoard, error as diagnostics, random};

pub use error::ClassboardError;

use log::{debug, info, trace};

use classboard_core::{graph::DiagramGraph, store::Board};
use classboard_parser::random::{RandomSource, RngSource};

use config::AppConfig;

/// Builder for importing and exporting Classboard boards.
///
/// # Examples
///
/// ```rust
/// use classboard::{BoardBuilder, config::AppConfig};
///
/// let xml = r#"<XMI xmlns:UML="omg.org/UML1.3"><UML:Class name="Persona"/></XMI>"#;
///
/// let builder = BoardBuilder::new(AppConfig::default());
///
/// // Import XMI into a board graph
/// let board = builder.import(xml).expect("Failed to import");
///
/// // Export the graph back to XMI
/// let xmi = builder.export(board.graph());
/// assert!(xmi.contains("EAID_MYCLASS_001"));
/// ```
#[derive(Debug, Default)]
pub struct BoardBuilder {
    config: AppConfig,
}

impl BoardBuilder {
    /// Create a new board builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Import XMI text into a board.
    ///
    /// Class positions are drawn from a generator seeded with the configured
    /// seed, or from the thread generator when no seed is set.
    ///
    /// # Errors
    ///
    /// Returns `ClassboardError::Decode` when the text is not XML or holds
    /// nothing importable. Skipped relationships are not errors; they are
    /// listed in [`DecodedBoard::warnings`].
    pub fn import(&self, xml: &str) -> Result<DecodedBoard, ClassboardError> {
        match self.config.import.seed() {
            Some(seed) => {
                debug!(seed = seed; "Using seeded placement");
                self.import_with(xml, &mut RngSource::seeded(seed))
            }
            None => self.import_with(xml, &mut RngSource::thread()),
        }
    }

    /// Import XMI text, drawing class positions from `random`.
    pub fn import_with(
        &self,
        xml: &str,
        random: &mut dyn RandomSource,
    ) -> Result<DecodedBoard, ClassboardError> {
        info!("Importing XMI document");
        let options = self.config.import.decode_options();
        let board = classboard_parser::decode(xml, &options, random)
            .map_err(|err| ClassboardError::new_decode_error(err, xml))?;
        debug!(title = board.title(); "Import finished");
        trace!(graph:? = board.graph(); "Imported graph");
        Ok(board)
    }

    /// Export a board graph as an XMI document.
    pub fn export(&self, graph: &DiagramGraph) -> String {
        export::encode(graph, &self.config.export.export_options())
    }

    /// Read a board from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ClassboardError::Store` when the JSON does not describe a
    /// board.
    pub fn load_board(&self, json: &str) -> Result<Board, ClassboardError> {
        let board: Board = serde_json::from_str(json)?;
        let issues = board.graph().validate();
        if !issues.is_empty() {
            info!(issues = issues.len(); "Loaded board has consistency issues");
            for issue in &issues {
                debug!(issue:% = issue; "Board issue");
            }
        }
        Ok(board)
    }

    /// Write a board in its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ClassboardError::Store` if serialization fails.
    pub fn save_board(&self, board: &Board) -> Result<String, ClassboardError> {
        Ok(serde_json::to_string_pretty(board)?)
    }
}
