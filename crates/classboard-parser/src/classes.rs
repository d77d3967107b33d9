//! Extraction of `UML:Class` elements into board nodes.

use std::collections::HashMap;

use log::{debug, trace};
use roxmltree::Node;

use classboard_core::{
    feature::{format_attribute, format_method},
    geometry::Size,
    graph::ClassNode,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    placement::Placements,
    random::{RandomSource, draw_position},
    xml::{self, SourceText},
};

/// Name of the synthetic root class Enterprise Architect puts in every model.
pub(crate) const ROOT_CLASS_NAME: &str = "EARootClass";

/// Decoded classes together with the renumbering applied to them.
#[derive(Debug, Default)]
pub(crate) struct DecodedClasses {
    nodes: Vec<ClassNode>,
    fresh_ids: HashMap<String, String>,
}

impl DecodedClasses {
    pub(crate) fn nodes(&self) -> &[ClassNode] {
        &self.nodes
    }

    /// Fresh node id of the class whose `xmi.id` is `xmi_id`.
    pub(crate) fn fresh_id(&self, xmi_id: &str) -> Option<&str> {
        self.fresh_ids.get(xmi_id).map(String::as_str)
    }

    pub(crate) fn into_nodes(self) -> Vec<ClassNode> {
        self.nodes
    }
}

/// Where class positions come from.
pub(crate) struct Layout<'p, 'r> {
    pub(crate) canvas: Size,
    pub(crate) placements: Option<&'p Placements>,
    pub(crate) random: &'r mut dyn RandomSource,
}

/// Builds one node per `UML:Class` in document order, skipping the root class.
///
/// Nodes are numbered `"1"`, `"2"`, ... regardless of the ids used in the
/// document.
pub(crate) fn collect(
    document: Node<'_, '_>,
    source: &SourceText<'_>,
    layout: &mut Layout<'_, '_>,
    collector: &mut DiagnosticCollector,
) -> DecodedClasses {
    let mut decoded = DecodedClasses::default();

    let classes = xml::descendants_named(document, "UML:Class")
        .filter(|class| class.attribute("name") != Some(ROOT_CLASS_NAME));

    for (index, class) in classes.enumerate() {
        let id = (index + 1).to_string();

        let class_name = match class.attribute("name") {
            Some(name) => name,
            None => {
                collector.emit(
                    Diagnostic::warning(format!("class {id} has no name"))
                        .with_code(ErrorCode::W200)
                        .with_label(source.span_of(class), "unnamed class")
                        .with_help("add a `name` attribute to the `UML:Class` element"),
                );
                ""
            }
        };

        let xmi_id = class.attribute("xmi.id");
        let recovered = xmi_id
            .zip(layout.placements)
            .and_then(|(xmi_id, placements)| placements.get(xmi_id));
        let position = match recovered {
            Some(position) => position,
            None => draw_position(&mut *layout.random, layout.canvas),
        };

        let node = ClassNode::new(id.clone(), class_name, position)
            .with_attributes(attributes(class))
            .with_methods(methods(class));
        trace!(
            id = node.id(),
            class_name = node.class_name(),
            attributes = node.attributes().len(),
            methods = node.methods().len();
            "Decoded class"
        );

        if let Some(xmi_id) = xmi_id {
            decoded.fresh_ids.entry(xmi_id.to_string()).or_insert(id);
        }
        decoded.nodes.push(node);
    }

    debug!(classes = decoded.nodes.len(); "Collected classes");
    decoded
}

fn attributes(class: Node<'_, '_>) -> Vec<String> {
    xml::descendants_named(class, "UML:Attribute")
        .map(|attribute| {
            let name = attribute.attribute("name").unwrap_or_default();
            format_attribute(name, declared_type(attribute, "type"))
        })
        .collect()
}

fn methods(class: Node<'_, '_>) -> Vec<String> {
    class
        .descendants()
        .skip(1)
        .filter(|node| {
            xml::is_named(*node, "UML:Method") || xml::is_named(*node, "UML:Operation")
        })
        .map(|method| {
            let name = method.attribute("name").unwrap_or_default();
            format_method(name, declared_type(method, "returnType"))
        })
        .collect()
}

/// The feature's type from `attribute`, else from its `type` tagged value.
/// Blank values count as missing.
fn declared_type<'a>(feature: Node<'a, '_>, attribute: &str) -> Option<&'a str> {
    let present = |value: &&str| !value.trim().is_empty();
    feature
        .attribute(attribute)
        .filter(present)
        .or_else(|| xml::tagged_value(feature, "type").filter(present))
}
