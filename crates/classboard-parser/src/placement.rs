//! Class positions recovered from `UML:DiagramElement` geometry.
//!
//! Exported diagrams carry one `UML:DiagramElement` per class with a
//! `geometry` string of the form `Left=130;Top=290;Right=150;Bottom=260;`.
//! The exporter shifts the board position by `(+30, +90)` into `Left` and
//! `Top`; this module undoes that shift.

use std::collections::HashMap;

use log::trace;
use roxmltree::Node;

use classboard_core::geometry::Point;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    xml::{self, SourceText},
};

/// Offset added to the board x coordinate in the exported `Left` value.
pub(crate) const LEFT_OFFSET: f32 = 30.0;

/// Offset added to the board y coordinate in the exported `Top` value.
pub(crate) const TOP_OFFSET: f32 = 90.0;

/// Board positions keyed by the class `xmi.id` they belong to.
#[derive(Debug, Default)]
pub(crate) struct Placements {
    positions: HashMap<String, Point>,
}

impl Placements {
    /// Collects every diagram element with a usable geometry.
    ///
    /// Unreadable geometry strings are reported as warnings. When a class
    /// appears in several diagram elements, the first one wins.
    pub(crate) fn collect(
        document: Node<'_, '_>,
        source: &SourceText<'_>,
        collector: &mut DiagnosticCollector,
    ) -> Self {
        let mut positions = HashMap::new();

        for element in xml::descendants_named(document, "UML:DiagramElement") {
            let (Some(subject), Some(geometry)) =
                (element.attribute("subject"), element.attribute("geometry"))
            else {
                continue;
            };

            match parse_geometry(geometry) {
                Some(position) => {
                    trace!(
                        subject = subject,
                        x = position.x(),
                        y = position.y();
                        "Recovered class position"
                    );
                    positions.entry(subject.to_string()).or_insert(position);
                }
                None => collector.emit(
                    Diagnostic::warning(format!("cannot read geometry `{geometry}` of `{subject}`"))
                        .with_code(ErrorCode::W201)
                        .with_label(source.span_of(element), "invalid geometry")
                        .with_help("expected `Left=<number>;Top=<number>;...`"),
                ),
            }
        }

        Self { positions }
    }

    /// The recovered position for the class with the given `xmi.id`.
    pub(crate) fn get(&self, xmi_id: &str) -> Option<Point> {
        self.positions.get(xmi_id).copied()
    }
}

/// Reads `Left` and `Top` out of a geometry string and maps them back onto
/// the board.
fn parse_geometry(geometry: &str) -> Option<Point> {
    let mut left = None;
    let mut top = None;

    for pair in geometry.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=')?;
        let value = value.trim();
        match key.trim() {
            "Left" => left = Some(value.parse::<f32>().ok()?),
            "Top" => top = Some(value.parse::<f32>().ok()?),
            _ => {}
        }
    }

    Some(Point::new(left? - LEFT_OFFSET, top? - TOP_OFFSET))
}
