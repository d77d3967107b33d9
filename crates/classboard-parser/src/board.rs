//! Decoder input options and output.

use classboard_core::{geometry::Size, graph::DiagramGraph, store::Board};

use crate::error::Diagnostic;

/// Default width of the area imported classes are scattered over.
pub const DEFAULT_CANVAS_WIDTH: f32 = 600.0;

/// Default height of the area imported classes are scattered over.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;

/// Title used when a document holds relationships but no class.
pub const FALLBACK_TITLE: &str = "Tablero importado";

/// Options controlling how a document is turned into a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    canvas: Size,
    use_diagram_geometry: bool,
}

impl DecodeOptions {
    /// Sets the area random positions are drawn from.
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }

    /// Whether positions stored in `UML:DiagramElement` geometry are reused.
    pub fn with_diagram_geometry(mut self, enabled: bool) -> Self {
        self.use_diagram_geometry = enabled;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn use_diagram_geometry(&self) -> bool {
        self.use_diagram_geometry
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            canvas: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            use_diagram_geometry: true,
        }
    }
}

/// A successfully decoded document.
#[derive(Debug, Clone)]
pub struct DecodedBoard {
    graph: DiagramGraph,
    title: String,
    warnings: Vec<Diagnostic>,
}

impl DecodedBoard {
    pub(crate) fn new(graph: DiagramGraph, warnings: Vec<Diagnostic>) -> Self {
        let title = graph
            .nodes()
            .first()
            .map(|node| format!("Tablero de {}", node.class_name()))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        Self {
            graph,
            title,
            warnings,
        }
    }

    pub fn graph(&self) -> &DiagramGraph {
        &self.graph
    }

    /// Suggested board title, derived from the first class.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Everything that was skipped, in document order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Number of relationships that were dropped.
    pub fn skipped_relationships(&self) -> usize {
        self.warnings
            .iter()
            .filter(|warning| warning.code().is_some_and(|code| code.is_skipped_relationship()))
            .count()
    }

    /// Converts into a titled board ready to be stored.
    pub fn into_board(self) -> Board {
        Board::new(self.title, self.graph)
    }

    pub fn into_parts(self) -> (DiagramGraph, String, Vec<Diagnostic>) {
        (self.graph, self.title, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use classboard_core::{geometry::Point, graph::ClassNode};

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_options() {
        let options = DecodeOptions::default();
        assert_eq!(options.canvas(), Size::new(600.0, 400.0));
        assert!(options.use_diagram_geometry());

        let options = options.with_diagram_geometry(false).with_canvas(Size::new(10.0, 20.0));
        assert!(!options.use_diagram_geometry());
        assert_eq!(options.canvas(), Size::new(10.0, 20.0));
    }

    #[test]
    fn test_title_from_first_class() {
        let graph = DiagramGraph::from_parts(
            vec![ClassNode::new("1", "Persona", Point::default())],
            vec![],
        );
        let board = DecodedBoard::new(graph, vec![]);
        assert_eq!(board.title(), "Tablero de Persona");
        assert_eq!(board.into_board().description(), "Tablero de Persona");
    }

    #[test]
    fn test_title_fallback_and_skip_count() {
        let warnings = vec![
            Diagnostic::warning("a").with_code(ErrorCode::W100),
            Diagnostic::warning("b").with_code(ErrorCode::W200),
            Diagnostic::warning("c").with_code(ErrorCode::W102),
        ];
        let board = DecodedBoard::new(DiagramGraph::new(), warnings);

        assert_eq!(board.title(), "Tablero importado");
        assert_eq!(board.skipped_relationships(), 2);
    }
}
