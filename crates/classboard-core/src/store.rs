//! Persistent board shape.
//!
//! Boards are stored as `{ description, nodes, edges }` documents where nodes
//! and edges keep the canvas layout the editor works with: domain fields live
//! under a `data` object next to canvas bookkeeping such as `type` and the
//! connection handles. [`ClassNode`] and [`RelationshipEdge`] serialize
//! through the types in this module so the rest of the crate only sees the
//! flat model.

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Point,
    graph::{ClassNode, DEFAULT_END_LABEL, DEFAULT_START_LABEL, DiagramGraph, RelationshipEdge},
    relationship::RelationshipType,
};

const NODE_KIND: &str = "classNode";
const EDGE_KIND: &str = "start-end";
const SOURCE_HANDLE: &str = "right";
const TARGET_HANDLE: &str = "left";

/// A titled board as held by the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    graph: DiagramGraph,
}

impl Board {
    pub fn new(description: impl Into<String>, graph: DiagramGraph) -> Self {
        Self {
            description: description.into(),
            graph,
        }
    }

    /// The board title shown in the board list.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn graph(&self) -> &DiagramGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut DiagramGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> DiagramGraph {
        self.graph
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredNode {
    id: String,
    #[serde(rename = "type", default = "node_kind")]
    kind: String,
    #[serde(default)]
    position: Point,
    #[serde(default)]
    data: StoredNodeData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNodeData {
    #[serde(default)]
    class_name: String,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredEdge {
    id: String,
    source: String,
    target: String,
    #[serde(default = "source_handle")]
    source_handle: String,
    #[serde(default = "target_handle")]
    target_handle: String,
    #[serde(rename = "type", default = "edge_kind")]
    kind: String,
    #[serde(default)]
    data: StoredEdgeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEdgeData {
    #[serde(default = "default_start_label")]
    start_label: String,
    #[serde(default = "default_end_label")]
    end_label: String,
    #[serde(rename = "type", default)]
    relationship_type: RelationshipType,
}

impl Default for StoredEdgeData {
    fn default() -> Self {
        Self {
            start_label: default_start_label(),
            end_label: default_end_label(),
            relationship_type: RelationshipType::default(),
        }
    }
}

impl From<StoredNode> for ClassNode {
    fn from(stored: StoredNode) -> Self {
        ClassNode::new(stored.id, stored.data.class_name, stored.position)
            .with_attributes(stored.data.attributes)
            .with_methods(stored.data.methods)
    }
}

impl From<ClassNode> for StoredNode {
    fn from(node: ClassNode) -> Self {
        Self {
            id: node.id().to_string(),
            kind: node_kind(),
            position: node.position(),
            data: StoredNodeData {
                class_name: node.class_name().to_string(),
                attributes: node.attributes().to_vec(),
                methods: node.methods().to_vec(),
            },
        }
    }
}

impl From<StoredEdge> for RelationshipEdge {
    fn from(stored: StoredEdge) -> Self {
        RelationshipEdge::new(stored.source, stored.target)
            .with_id(stored.id)
            .with_type(stored.data.relationship_type)
            .with_labels(stored.data.start_label, stored.data.end_label)
    }
}

impl From<RelationshipEdge> for StoredEdge {
    fn from(edge: RelationshipEdge) -> Self {
        Self {
            id: edge.id().to_string(),
            source: edge.source().to_string(),
            target: edge.target().to_string(),
            source_handle: source_handle(),
            target_handle: target_handle(),
            kind: edge_kind(),
            data: StoredEdgeData {
                start_label: edge.start_label().to_string(),
                end_label: edge.end_label().to_string(),
                relationship_type: edge.relationship_type().clone(),
            },
        }
    }
}

fn node_kind() -> String {
    NODE_KIND.to_string()
}

fn edge_kind() -> String {
    EDGE_KIND.to_string()
}

fn source_handle() -> String {
    SOURCE_HANDLE.to_string()
}

fn target_handle() -> String {
    TARGET_HANDLE.to_string()
}

fn default_start_label() -> String {
    DEFAULT_START_LABEL.to_string()
}

fn default_end_label() -> String {
    DEFAULT_END_LABEL.to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_serializes_to_canvas_shape() {
        let node = ClassNode::new("1", "Persona", Point::new(10.0, 20.0))
            .with_attributes(vec!["+ nombre: string".to_string()]);

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "type": "classNode",
                "position": { "x": 10.0, "y": 20.0 },
                "data": {
                    "className": "Persona",
                    "attributes": ["+ nombre: string"],
                    "methods": []
                }
            })
        );
    }

    #[test]
    fn test_edge_serializes_to_canvas_shape() {
        let edge = RelationshipEdge::new("1", "2").with_type(RelationshipType::Aggregation);

        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "xy-edge__1right-2left",
                "source": "1",
                "target": "2",
                "sourceHandle": "right",
                "targetHandle": "left",
                "type": "start-end",
                "data": {
                    "startLabel": "0..*",
                    "endLabel": "1",
                    "type": "Aggregation"
                }
            })
        );
    }

    #[test]
    fn test_edge_without_data_takes_defaults() {
        let edge: RelationshipEdge = serde_json::from_value(json!({
            "id": "e1",
            "source": "1",
            "target": "2"
        }))
        .unwrap();

        assert_eq!(edge.id(), "e1");
        assert_eq!(edge.start_label(), "0..*");
        assert_eq!(edge.end_label(), "1");
        assert_eq!(edge.relationship_type(), &RelationshipType::Association);
    }

    #[test]
    fn test_board_round_trip() {
        let mut graph = DiagramGraph::new();
        graph.add_class(Point::new(5.0, 6.0));
        graph.add_class(Point::new(50.0, 60.0));
        graph.connect("1", "2").unwrap();
        let board = Board::new("Tablero de Clase 1", graph);

        let text = serde_json::to_string_pretty(&board).unwrap();
        let restored: Board = serde_json::from_str(&text).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.description(), "Tablero de Clase 1");
    }

    #[test]
    fn test_board_with_missing_collections() {
        let board: Board = serde_json::from_str(r#"{"description": "Vacio"}"#).unwrap();
        assert!(board.graph().is_empty());
    }
}
