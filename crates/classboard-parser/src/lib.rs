//! # Classboard Parser
//!
//! Importer for XMI 1.1 class diagrams as written by Enterprise Architect
//! and by the Classboard exporter. The importer turns a document into a
//! [`classboard_core::graph::DiagramGraph`].
//!
//! ## Usage
//!
//! ```
//! # use classboard_parser::{decode, DecodeOptions, error::DecodeError, random::RngSource};
//!
//! fn main() -> Result<(), DecodeError> {
//!     let xml = r#"
//!         <XMI xmi.version="1.1" xmlns:UML="omg.org/UML1.3">
//!             <UML:Class name="Persona" xmi.id="EAID_1">
//!                 <UML:Attribute name="nombre"/>
//!             </UML:Class>
//!         </XMI>
//!     "#;
//!
//!     let board = decode(xml, &DecodeOptions::default(), &mut RngSource::seeded(1))?;
//!     assert_eq!(board.title(), "Tablero de Persona");
//!     Ok(())
//! }
//! ```

mod board;
mod classes;
pub mod error;
mod placement;
pub mod random;
mod relationships;
mod span;
mod xml;

pub use board::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DecodeOptions, DecodedBoard, FALLBACK_TITLE,
};
pub use span::Span;

use log::{debug, info};

use classboard_core::graph::DiagramGraph;

use classes::Layout;
use error::{DecodeError, DiagnosticCollector};
use placement::Placements;
use random::RandomSource;
use xml::SourceText;

/// Decode XMI text into a board.
///
/// The import runs in these steps:
///
/// 1. **Parse** - Read the text into an XML tree
/// 2. **Place** - Recover class positions from diagram geometry, if enabled
/// 3. **Classes** - Number every `UML:Class` except `EARootClass` and
///    collect its attributes and methods
/// 4. **Relationships** - Read every `UML:AssociationEnd`, skipping the
///    ones that cannot be resolved
///
/// Classes without recovered geometry take their position from `random`.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedDocument`] when the text is not XML and
/// [`DecodeError::NoContentFound`] when it yields neither a class nor a
/// relationship. Skipped content is reported through
/// [`DecodedBoard::warnings`] instead.
pub fn decode(
    xml: &str,
    options: &DecodeOptions,
    random: &mut dyn RandomSource,
) -> Result<DecodedBoard, DecodeError> {
    // Step 1: Parse
    let source = SourceText::prepare(xml)?;
    let document = source.parse()?;
    let root = document.root();
    let mut collector = DiagnosticCollector::new();

    // Step 2: Place
    let placements = options
        .use_diagram_geometry()
        .then(|| Placements::collect(root, &source, &mut collector));

    // Step 3: Classes
    let mut layout = Layout {
        canvas: options.canvas(),
        placements: placements.as_ref(),
        random,
    };
    let classes = classes::collect(root, &source, &mut layout, &mut collector);

    // Step 4: Relationships
    let edges = relationships::collect(root, &source, &classes, &mut collector);

    if classes.nodes().is_empty() && edges.is_empty() {
        debug!("Document holds no classes and no relationships");
        return Err(DecodeError::NoContentFound);
    }

    let graph = DiagramGraph::from_parts(classes.into_nodes(), edges);
    let board = DecodedBoard::new(graph, collector.finish());
    info!(
        nodes = board.graph().nodes().len(),
        edges = board.graph().edges().len(),
        skipped = board.skipped_relationships();
        "Decoded XMI document"
    );
    Ok(board)
}
