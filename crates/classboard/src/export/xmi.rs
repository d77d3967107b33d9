//! XMI 1.1 encoder.
//!
//! Produces an Enterprise Architect 2.5 document: one `UML:Class` per node,
//! one `UML:Association` per edge and a class diagram holding the node
//! positions. Node and edge order is kept as is.

use std::borrow::Cow;

use log::{debug, info};

use classboard_core::{
    feature::{DEFAULT_ATTRIBUTE_TYPE, DEFAULT_RETURN_TYPE, parse_attribute, parse_method},
    graph::{ClassNode, DiagramGraph, RelationshipEdge},
    relationship::AggregationKind,
};

use super::templates::{
    self, AssociationFields, AttributeFields, ClassFields, EndFields, OperationFields,
};

/// Offset added to a board position to obtain the diagram `Left` value.
const LEFT_OFFSET: f32 = 30.0;
/// Offset added to a board position to obtain the diagram `Top` value.
const TOP_OFFSET: f32 = 90.0;
const RIGHT_OFFSET: f32 = 50.0;
const BOTTOM_OFFSET: f32 = 60.0;

/// Options for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    include_operations: bool,
}

impl ExportOptions {
    /// Whether methods are written as `UML:Operation` elements.
    pub fn with_operations(mut self, include: bool) -> Self {
        self.include_operations = include;
        self
    }

    pub fn include_operations(&self) -> bool {
        self.include_operations
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_operations: true,
        }
    }
}

/// The `xmi.id` given to the class exported for node `node_id`.
///
/// # Examples
///
/// ```
/// # use classboard::export::class_xmi_id;
/// assert_eq!(class_xmi_id("2"), "EAID_MYCLASS_002");
/// ```
pub fn class_xmi_id(node_id: &str) -> String {
    format!("EAID_MYCLASS_00{node_id}")
}

/// Local id Enterprise Architect shows for node `node_id`.
fn local_id(node_id: &str) -> String {
    format!("nodo-{node_id}")
}

/// Encode `graph` as an XMI document.
///
/// Encoding cannot fail. An empty graph gives a document with the fixed
/// model and diagram and nothing else.
pub fn encode(graph: &DiagramGraph, options: &ExportOptions) -> String {
    info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        operations = options.include_operations();
        "Encoding XMI document"
    );

    let mut out = String::new();
    templates::header(&mut out);

    for node in graph.nodes() {
        write_class(&mut out, node, options);
    }
    for (index, edge) in graph.edges().iter().enumerate() {
        write_association(&mut out, graph, edge, index);
    }

    templates::model_footer(&mut out);
    for (index, node) in graph.nodes().iter().enumerate() {
        let subject = class_xmi_id(node.id());
        templates::diagram_element(&mut out, &geometry(node), &escape(&subject), index + 1);
    }
    templates::footer(&mut out);

    debug!(bytes = out.len(); "XMI document encoded");
    out
}

fn write_class(out: &mut String, node: &ClassNode, options: &ExportOptions) {
    let xmi_id = class_xmi_id(node.id());
    let local = local_id(node.id());
    templates::class_open(
        out,
        &ClassFields {
            name: &escape(node.class_name()),
            xmi_id: &escape(&xmi_id),
            local_id: &escape(&local),
        },
    );

    for (index, entry) in node.attributes().iter().enumerate() {
        let parsed = parse_attribute(entry);
        let classifier = format!("eaxmiid{index}_{}", node.id());
        let guid = format!("{{C2602A54-4A22-45f7-ABAA-4FBE30A2EF6{}-{index}}}", node.id());
        templates::attribute(
            out,
            &AttributeFields {
                name: &escape(parsed.name()),
                type_name: &escape(parsed.type_name().unwrap_or(DEFAULT_ATTRIBUTE_TYPE)),
                classifier: &escape(&classifier),
                guid: &escape(&guid),
            },
        );
    }

    if options.include_operations() {
        for (index, entry) in node.methods().iter().enumerate() {
            let parsed = parse_method(entry);
            let guid = format!("{{C2602A54-4A22-45f7-ABAA-4FBE30A2EF7{}-{index}}}", node.id());
            templates::operation(
                out,
                &OperationFields {
                    name: &escape(parsed.name()),
                    return_type: &escape(parsed.type_name().unwrap_or(DEFAULT_RETURN_TYPE)),
                    position: index,
                    guid: &escape(&guid),
                },
            );
        }
    }

    templates::class_close(out);
}

fn write_association(
    out: &mut String,
    graph: &DiagramGraph,
    edge: &RelationshipEdge,
    index: usize,
) {
    let class_name = |id: &str| graph.node(id).map(ClassNode::class_name).unwrap_or_default();

    let local = format!("{}-{index}", edge.id());
    let source_id = class_xmi_id(edge.source());
    let target_id = class_xmi_id(edge.target());
    let source_local = local_id(edge.source());
    let target_local = local_id(edge.target());

    templates::association(
        out,
        &AssociationFields {
            xmi_id: &escape(edge.id()),
            ea_type: &escape(edge.relationship_type().as_str()),
            local_id: &escape(&local),
            source_name: &escape(class_name(edge.source())),
            target_name: &escape(class_name(edge.target())),
            source_local_id: &escape(&source_local),
            target_local_id: &escape(&target_local),
            source: EndFields {
                multiplicity: &escape(edge.start_label()),
                aggregation: AggregationKind::None.as_str(),
                class_id: &escape(&source_id),
            },
            target: EndFields {
                multiplicity: &escape(edge.end_label()),
                aggregation: edge.relationship_type().aggregation().as_str(),
                class_id: &escape(&target_id),
            },
        },
    );
}

/// Diagram bounds of a node, truncated toward zero.
fn geometry(node: &ClassNode) -> String {
    let position = node.position();
    let truncate = |value: f32| value.trunc() as i64;
    format!(
        "Left={};Top={};Right={};Bottom={};",
        truncate(position.x() + LEFT_OFFSET),
        truncate(position.y() + TOP_OFFSET),
        truncate(position.x() + RIGHT_OFFSET),
        truncate(position.y() + BOTTOM_OFFSET),
    )
}

/// Escape text for use inside XML attribute values and character data.
fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
