//! Extraction of relationships from `UML:AssociationEnd` elements.
//!
//! Two shapes are understood:
//!
//! - Board form: each `UML:AssociationEnd` is one relationship, with
//!   `UML:Source` and `UML:Target` children holding a `ref` to a node id,
//!   optional `UML:StartLabel` and `UML:EndLabel`, and a `type` attribute.
//! - Enterprise Architect form: a `UML:Association` whose
//!   `UML:Association.connection` holds two ends, each naming a class
//!   `xmi.id` in its `type` attribute.
//!
//! A relationship that cannot be read is skipped with a warning; decoding
//! always continues.

use std::collections::HashSet;

use log::debug;
use roxmltree::{Node, NodeId};

use classboard_core::{
    graph::{DEFAULT_END_LABEL, DEFAULT_START_LABEL, RelationshipEdge},
    relationship::{AggregationKind, RelationshipType},
};

use crate::{
    classes::DecodedClasses,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    xml::{self, SourceText},
};

/// Walks every association end of the document in order.
pub(crate) fn collect(
    document: Node<'_, '_>,
    source: &SourceText<'_>,
    classes: &DecodedClasses,
    collector: &mut DiagnosticCollector,
) -> Vec<RelationshipEdge> {
    let mut reader = Reader {
        source,
        classes,
        collector,
        ordinal: 0,
        visited_connections: HashSet::new(),
    };

    let mut edges = Vec::new();
    for end in xml::descendants_named(document, "UML:AssociationEnd") {
        if let Some(edge) = reader.read_end(end) {
            edges.push(edge);
        }
    }

    debug!(relationships = edges.len(), considered = reader.ordinal; "Collected relationships");
    edges
}

struct Reader<'s, 'c> {
    source: &'s SourceText<'s>,
    classes: &'c DecodedClasses,
    collector: &'c mut DiagnosticCollector,
    /// Number of relationships considered so far, used in messages.
    ordinal: usize,
    visited_connections: HashSet<NodeId>,
}

impl Reader<'_, '_> {
    fn read_end(&mut self, end: Node<'_, '_>) -> Option<RelationshipEdge> {
        let has_endpoints = xml::first_descendant(end, "UML:Source").is_some()
            || xml::first_descendant(end, "UML:Target").is_some();

        if !has_endpoints {
            let connection = end
                .parent()
                .filter(|parent| xml::is_named(*parent, "UML:Association.connection"));
            if let Some(connection) = connection {
                if !self.visited_connections.insert(connection.id()) {
                    return None;
                }
                self.ordinal += 1;
                return self.read_connection(connection);
            }
        }

        self.ordinal += 1;
        self.read_board_end(end)
    }

    /// Board form: one association end is one relationship.
    fn read_board_end(&mut self, end: Node<'_, '_>) -> Option<RelationshipEdge> {
        let source = self.endpoint(end, "UML:Source")?;
        let target = self.endpoint(end, "UML:Target")?;

        let start_label = xml::first_descendant(end, "UML:StartLabel")
            .and_then(xml::text_content)
            .unwrap_or_else(|| DEFAULT_START_LABEL.to_string());
        let end_label = xml::first_descendant(end, "UML:EndLabel")
            .and_then(xml::text_content)
            .unwrap_or_else(|| DEFAULT_END_LABEL.to_string());
        let relationship_type = end
            .attribute("type")
            .map(RelationshipType::from)
            .unwrap_or_default();

        Some(
            RelationshipEdge::new(source, target)
                .with_type(relationship_type)
                .with_labels(start_label, end_label),
        )
    }

    /// The node id referenced by the `UML:Source` or `UML:Target` of `end`.
    fn endpoint(&mut self, end: Node<'_, '_>, element: &str) -> Option<String> {
        let ordinal = self.ordinal;
        let Some(endpoint) = xml::first_descendant(end, element) else {
            self.collector.emit(
                Diagnostic::warning(format!("relationship {ordinal} has no `{element}`; skipped"))
                    .with_code(ErrorCode::W100)
                    .with_label(self.source.span_of(end), "skipped association end")
                    .with_help("add `UML:Source` and `UML:Target` elements with a `ref` child"),
            );
            return None;
        };

        let reference = xml::first_descendant(endpoint, "ref").and_then(xml::text_content);
        if reference.is_none() {
            self.collector.emit(
                Diagnostic::warning(format!(
                    "relationship {ordinal} has an empty `{element}`; skipped"
                ))
                .with_code(ErrorCode::W101)
                .with_label(self.source.span_of(endpoint), "no `ref` text")
                .with_secondary_label(self.source.span_of(end), "in this association end")
                .with_help("put the node id in a `ref` child"),
            );
        }
        reference
    }

    /// Enterprise Architect form: the connection holds both ends of one
    /// association.
    fn read_connection(&mut self, connection: Node<'_, '_>) -> Option<RelationshipEdge> {
        let ordinal = self.ordinal;
        let ends: Vec<_> = connection
            .children()
            .filter(|child| xml::is_named(*child, "UML:AssociationEnd"))
            .collect();
        let association = connection
            .parent()
            .filter(|parent| xml::is_named(*parent, "UML:Association"));

        let [source_end, target_end] = ends.as_slice() else {
            self.collector.emit(
                Diagnostic::warning(format!(
                    "relationship {ordinal} has {} association ends instead of two; skipped",
                    ends.len()
                ))
                .with_code(ErrorCode::W103)
                .with_label(
                    self.source.span_of(association.unwrap_or(connection)),
                    "incomplete association",
                ),
            );
            return None;
        };

        let source = self.resolve_class(*source_end, ordinal)?;
        let target = self.resolve_class(*target_end, ordinal)?;

        let start_label = source_end
            .attribute("multiplicity")
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_START_LABEL);
        let end_label = target_end
            .attribute("multiplicity")
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_END_LABEL);

        let relationship_type = association
            .and_then(|association| xml::tagged_value(association, "ea_type"))
            .map(RelationshipType::from)
            .or_else(|| {
                target_end
                    .attribute("aggregation")
                    .and_then(AggregationKind::from_xmi)
                    .map(RelationshipType::from_aggregation)
            })
            .unwrap_or_default();

        Some(
            RelationshipEdge::new(source, target)
                .with_type(relationship_type)
                .with_labels(start_label, end_label),
        )
    }

    /// Maps the class `xmi.id` named by an end's `type` onto its node id.
    fn resolve_class(&mut self, end: Node<'_, '_>, ordinal: usize) -> Option<String> {
        let reference = end.attribute("type").unwrap_or_default();
        let resolved = self.classes.fresh_id(reference).map(str::to_string);

        if resolved.is_none() {
            self.collector.emit(
                Diagnostic::warning(format!(
                    "relationship {ordinal} refers to unknown class `{reference}`; skipped"
                ))
                .with_code(ErrorCode::W102)
                .with_label(self.source.span_of(end), "unresolved class reference")
                .with_help(
                    "the end's `type` must be the `xmi.id` of a `UML:Class` in this document",
                ),
            );
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classes::{self, Layout},
        random::FixedSequence,
    };
    use classboard_core::geometry::Size;

    fn decode_edges(xml: &str) -> (Vec<RelationshipEdge>, Vec<Diagnostic>) {
        let source = SourceText::prepare(xml).unwrap();
        let document = source.parse().unwrap();
        let mut random = FixedSequence::default();
        let mut layout = Layout {
            canvas: Size::new(600.0, 400.0),
            placements: None,
            random: &mut random,
        };
        let mut collector = DiagnosticCollector::new();

        let decoded = classes::collect(document.root(), &source, &mut layout, &mut collector);
        let edges = collect(document.root(), &source, &decoded, &mut collector);
        (edges, collector.finish())
    }

    #[test]
    fn test_board_form_with_defaults() {
        let xml = r#"<XMI>
            <UML:AssociationEnd>
                <UML:Source><ref>1</ref></UML:Source>
                <UML:Target><ref>2</ref></UML:Target>
            </UML:AssociationEnd>
        </XMI>"#;

        let (edges, warnings) = decode_edges(xml);

        assert!(warnings.is_empty());
        assert_eq!(edges.len(), 1);
        let edge = &edges[0];
        assert_eq!(edge.id(), "xy-edge__1right-2left");
        assert_eq!((edge.source(), edge.target()), ("1", "2"));
        assert_eq!((edge.start_label(), edge.end_label()), ("0..*", "1"));
        assert_eq!(edge.relationship_type(), &RelationshipType::Association);
    }

    #[test]
    fn test_board_form_with_labels_and_type() {
        let xml = r#"<XMI>
            <UML:AssociationEnd type="Composition">
                <UML:Source><ref> 3 </ref></UML:Source>
                <UML:Target><ref>1</ref></UML:Target>
                <UML:StartLabel>1</UML:StartLabel>
                <UML:EndLabel>2..4</UML:EndLabel>
            </UML:AssociationEnd>
        </XMI>"#;

        let (edges, _) = decode_edges(xml);

        let edge = &edges[0];
        assert_eq!((edge.source(), edge.target()), ("3", "1"));
        assert_eq!((edge.start_label(), edge.end_label()), ("1", "2..4"));
        assert_eq!(edge.relationship_type(), &RelationshipType::Composition);
    }

    #[test]
    fn test_skips_incomplete_board_ends() {
        let xml = r#"<XMI>
            <UML:AssociationEnd><UML:Source><ref>1</ref></UML:Source></UML:AssociationEnd>
            <UML:AssociationEnd>
                <UML:Source><ref>1</ref></UML:Source>
                <UML:Target><ref>  </ref></UML:Target>
            </UML:AssociationEnd>
            <UML:AssociationEnd/>
            <UML:AssociationEnd>
                <UML:Source><ref>1</ref></UML:Source>
                <UML:Target><ref>2</ref></UML:Target>
            </UML:AssociationEnd>
        </XMI>"#;

        let (edges, warnings) = decode_edges(xml);

        assert_eq!(edges.len(), 1);
        let codes: Vec<_> = warnings.iter().filter_map(Diagnostic::code).collect();
        assert_eq!(codes, vec![ErrorCode::W100, ErrorCode::W101, ErrorCode::W100]);
        assert!(warnings[0].message().starts_with("relationship 1 "));
        assert!(warnings[2].message().starts_with("relationship 3 "));
    }

    #[test]
    fn test_connection_form_maps_class_ids() {
        let xml = r#"<XMI>
            <UML:Class name="Persona" xmi.id="EAID_P"/>
            <UML:Class name="Bicicleta" xmi.id="EAID_B"/>
            <UML:Association xmi.id="xy-edge__7right-9left">
                <UML:ModelElement.taggedValue>
                    <UML:TaggedValue tag="ea_type" value="Aggregation"/>
                </UML:ModelElement.taggedValue>
                <UML:Association.connection>
                    <UML:AssociationEnd multiplicity="1" aggregation="none" type="EAID_P"/>
                    <UML:AssociationEnd multiplicity="0..1" aggregation="shared" type="EAID_B"/>
                </UML:Association.connection>
            </UML:Association>
        </XMI>"#;

        let (edges, warnings) = decode_edges(xml);

        assert!(warnings.is_empty());
        assert_eq!(edges.len(), 1);
        let edge = &edges[0];
        assert_eq!(edge.id(), "xy-edge__1right-2left");
        assert_eq!((edge.source(), edge.target()), ("1", "2"));
        assert_eq!((edge.start_label(), edge.end_label()), ("1", "0..1"));
        assert_eq!(edge.relationship_type(), &RelationshipType::Aggregation);
    }

    #[test]
    fn test_connection_form_falls_back_to_aggregation() {
        let xml = r#"<XMI>
            <UML:Class name="A" xmi.id="a"/>
            <UML:Class name="B" xmi.id="b"/>
            <UML:Association>
                <UML:Association.connection>
                    <UML:AssociationEnd type="a"/>
                    <UML:AssociationEnd aggregation="composite" type="b"/>
                </UML:Association.connection>
            </UML:Association>
        </XMI>"#;

        let (edges, _) = decode_edges(xml);

        let edge = &edges[0];
        assert_eq!(edge.id(), "xy-edge__1right-2left");
        assert_eq!((edge.start_label(), edge.end_label()), ("0..*", "1"));
        assert_eq!(edge.relationship_type(), &RelationshipType::Composition);
    }

    #[test]
    fn test_connection_form_skips_unresolved_and_incomplete() {
        let xml = r#"<XMI>
            <UML:Class name="A" xmi.id="a"/>
            <UML:Association>
                <UML:Association.connection>
                    <UML:AssociationEnd type="a"/>
                    <UML:AssociationEnd type="missing"/>
                </UML:Association.connection>
            </UML:Association>
            <UML:Association>
                <UML:Association.connection>
                    <UML:AssociationEnd type="a"/>
                </UML:Association.connection>
            </UML:Association>
        </XMI>"#;

        let (edges, warnings) = decode_edges(xml);

        assert!(edges.is_empty());
        let codes: Vec<_> = warnings.iter().filter_map(Diagnostic::code).collect();
        assert_eq!(codes, vec![ErrorCode::W102, ErrorCode::W103]);
    }
}
