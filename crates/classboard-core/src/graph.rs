//! The board's class diagram model.
//!
//! A [`DiagramGraph`] owns its [`ClassNode`]s and [`RelationshipEdge`]s by
//! value. Edges refer to their endpoints by node id only, so an edge may
//! outlive the node it names. Such dangling edges are tolerated everywhere
//! and reported by [`DiagramGraph::validate`](crate::validate).

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    feature::{DEFAULT_ATTRIBUTE_TYPE, DEFAULT_RETURN_TYPE, format_attribute, format_method},
    geometry::Point,
    relationship::RelationshipType,
    store::{StoredEdge, StoredNode},
};

/// Multiplicity used for the source end when none is given.
pub const DEFAULT_START_LABEL: &str = "0..*";

/// Multiplicity used for the target end when none is given.
pub const DEFAULT_END_LABEL: &str = "1";

/// Errors raised by editor mutations on a [`DiagramGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node `{0}` does not exist")]
    UnknownNode(String),

    #[error("edge `{0}` does not exist")]
    UnknownEdge(String),

    #[error("node id `{0}` is already in use")]
    DuplicateNode(String),

    #[error("edge `{0}` already exists")]
    DuplicateEdge(String),

    #[error("class name must not be empty")]
    EmptyClassName,
}

/// A class box on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredNode", into = "StoredNode")]
pub struct ClassNode {
    id: String,
    class_name: String,
    attributes: Vec<String>,
    methods: Vec<String>,
    position: Point,
}

impl ClassNode {
    /// Create a class node with no features at the given position.
    pub fn new(id: impl Into<String>, class_name: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
            position,
        }
    }

    /// Set the formatted attribute strings (builder style).
    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the formatted method strings (builder style).
    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A typed, labelled relationship between two class nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredEdge", into = "StoredEdge")]
pub struct RelationshipEdge {
    id: String,
    source: String,
    target: String,
    relationship_type: RelationshipType,
    start_label: String,
    end_label: String,
}

impl RelationshipEdge {
    /// Create an edge between `source` and `target` with default labels and
    /// type. The id is synthesized with [`RelationshipEdge::synthesize_id`].
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Self::synthesize_id(&source, &target),
            source,
            target,
            relationship_type: RelationshipType::default(),
            start_label: DEFAULT_START_LABEL.to_string(),
            end_label: DEFAULT_END_LABEL.to_string(),
        }
    }

    /// Edge id for a connection from the right handle of `source` to the left
    /// handle of `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use classboard_core::graph::RelationshipEdge;
    /// assert_eq!(RelationshipEdge::synthesize_id("1", "2"), "xy-edge__1right-2left");
    /// ```
    pub fn synthesize_id(source: &str, target: &str) -> String {
        format!("xy-edge__{source}right-{target}left")
    }

    /// Replace the synthesized id (builder style).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the relationship type (builder style).
    pub fn with_type(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship_type = relationship_type;
        self
    }

    /// Set both multiplicity labels (builder style).
    pub fn with_labels(
        mut self,
        start_label: impl Into<String>,
        end_label: impl Into<String>,
    ) -> Self {
        self.start_label = start_label.into();
        self.end_label = end_label.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn relationship_type(&self) -> &RelationshipType {
        &self.relationship_type
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    pub fn end_label(&self) -> &str {
        &self.end_label
    }
}

/// All classes and relationships of one board.
///
/// Nodes and edges keep insertion order; exporters rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramGraph {
    #[serde(default)]
    nodes: Vec<ClassNode>,
    #[serde(default)]
    edges: Vec<RelationshipEdge>,
}

impl DiagramGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from already assembled parts without any checks.
    ///
    /// Decoders use this to hand over whatever they recovered; call
    /// [`validate`](Self::validate) to inspect the result.
    pub fn from_parts(nodes: Vec<ClassNode>, edges: Vec<RelationshipEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[ClassNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RelationshipEdge] {
        &self.edges
    }

    /// True when the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&ClassNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&RelationshipEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// The next numeric node id that is not in use.
    ///
    /// Ids are one past the largest numeric id present, so ids freed by a
    /// deletion are not reused while a higher id still exists. When the
    /// largest id is `u64::MAX` the smallest unused id is taken instead.
    pub fn next_node_id(&self) -> String {
        let highest = self
            .nodes
            .iter()
            .filter_map(|node| node.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        let mut candidate = highest.checked_add(1).unwrap_or(1);
        // At most one step per node, so this cannot overflow.
        while self.node(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Add a placeholder class at `position` with the next free id.
    pub fn add_class(&mut self, position: Point) -> &ClassNode {
        let id = self.next_node_id();
        let node = ClassNode::new(id.clone(), format!("Clase {id}"), position)
            .with_attributes(vec![format_attribute("nuevoAtributo", Some(DEFAULT_ATTRIBUTE_TYPE))])
            .with_methods(vec![format_method("nuevoMetodo", Some(DEFAULT_RETURN_TYPE))]);

        debug!(id = node.id.as_str(); "Adding class");
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Insert a fully built node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] when the id is taken and
    /// [`GraphError::EmptyClassName`] when the class has no name.
    pub fn insert_node(&mut self, node: ClassNode) -> Result<(), GraphError> {
        if node.class_name.trim().is_empty() {
            return Err(GraphError::EmptyClassName);
        }
        if self.node(&node.id).is_some() {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Remove a node together with every edge attached to it.
    pub fn remove_node(&mut self, id: &str) -> Option<ClassNode> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        let node = self.nodes.remove(index);

        let before = self.edges.len();
        self.edges
            .retain(|edge| edge.source != node.id && edge.target != node.id);
        debug!(
            id,
            removed_edges = before - self.edges.len();
            "Removed class"
        );

        Some(node)
    }

    /// Move a node to a new position.
    pub fn move_node(&mut self, id: &str, position: Point) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        node.position = position;
        Ok(())
    }

    /// Replace the name and features of a class.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] or [`GraphError::EmptyClassName`].
    pub fn update_class(
        &mut self,
        id: &str,
        class_name: impl Into<String>,
        attributes: Vec<String>,
        methods: Vec<String>,
    ) -> Result<(), GraphError> {
        let class_name = class_name.into();
        if class_name.trim().is_empty() {
            return Err(GraphError::EmptyClassName);
        }

        let node = self.node_mut(id)?;
        node.class_name = class_name;
        node.attributes = attributes;
        node.methods = methods;
        trace!(id; "Updated class");
        Ok(())
    }

    /// Connect two existing nodes with a default association.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] when an endpoint does not exist and
    /// [`GraphError::DuplicateEdge`] when the same connection is already
    /// present.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&RelationshipEdge, GraphError> {
        for endpoint in [source, target] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::UnknownNode(endpoint.to_string()));
            }
        }
        self.insert_edge(RelationshipEdge::new(source, target))?;
        Ok(&self.edges[self.edges.len() - 1])
    }

    /// Insert an edge as is. Endpoints are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] when the edge id is taken.
    pub fn insert_edge(&mut self, edge: RelationshipEdge) -> Result<(), GraphError> {
        if self.edge(&edge.id).is_some() {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        debug!(id = edge.id.as_str(); "Adding relationship");
        self.edges.push(edge);
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<RelationshipEdge> {
        let index = self.edges.iter().position(|edge| edge.id == id)?;
        Some(self.edges.remove(index))
    }

    /// Replace the labels and type of an edge.
    pub fn update_edge(
        &mut self,
        id: &str,
        start_label: impl Into<String>,
        end_label: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Result<(), GraphError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|edge| edge.id == id)
            .ok_or_else(|| GraphError::UnknownEdge(id.to_string()))?;

        edge.start_label = start_label.into();
        edge.end_label = end_label.into();
        edge.relationship_type = relationship_type;
        Ok(())
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut ClassNode, GraphError> {
        self.nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> DiagramGraph {
        let mut graph = DiagramGraph::new();
        graph
            .insert_node(ClassNode::new("1", "Persona", Point::new(10.0, 20.0)))
            .unwrap();
        graph
            .insert_node(ClassNode::new("2", "Bicicleta", Point::new(300.0, 40.0)))
            .unwrap();
        graph
    }

    #[test]
    fn test_new_edge_defaults() {
        let edge = RelationshipEdge::new("1", "2");
        assert_eq!(edge.id(), "xy-edge__1right-2left");
        assert_eq!(edge.start_label(), "0..*");
        assert_eq!(edge.end_label(), "1");
        assert_eq!(edge.relationship_type(), &RelationshipType::Association);
    }

    #[test]
    fn test_add_class_uses_next_free_id() {
        let mut graph = sample_graph();
        let node = graph.add_class(Point::default());

        assert_eq!(node.id(), "3");
        assert_eq!(node.class_name(), "Clase 3");
        assert_eq!(node.attributes(), ["+ nuevoAtributo: string"]);
        assert_eq!(node.methods(), ["+ nuevoMetodo(): void"]);
    }

    #[test]
    fn test_add_class_after_deletion_does_not_collide() {
        let mut graph = sample_graph();
        graph.add_class(Point::default());
        graph.remove_node("1");

        // Two nodes remain ("2" and "3"), the next id must not be "3".
        let id = graph.add_class(Point::default()).id().to_string();
        assert_eq!(id, "4");
    }

    #[test]
    fn test_next_node_id_after_largest_possible_id() {
        let mut graph = DiagramGraph::from_parts(
            vec![
                ClassNode::new(u64::MAX.to_string(), "Ultima", Point::default()),
                ClassNode::new("1", "Primera", Point::default()),
            ],
            vec![],
        );

        assert_eq!(graph.next_node_id(), "2");
        assert_eq!(graph.add_class(Point::default()).id(), "2");
        assert_eq!(graph.add_class(Point::default()).id(), "3");
    }

    #[test]
    fn test_next_node_id_skips_non_numeric_ids() {
        let mut graph = DiagramGraph::new();
        graph
            .insert_node(ClassNode::new("abc", "Motor", Point::default()))
            .unwrap();
        assert_eq!(graph.next_node_id(), "1");
    }

    #[test]
    fn test_insert_node_rejects_duplicates_and_empty_names() {
        let mut graph = sample_graph();

        let err = graph
            .insert_node(ClassNode::new("1", "Otro", Point::default()))
            .unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("1".to_string()));

        let err = graph
            .insert_node(ClassNode::new("9", "  ", Point::default()))
            .unwrap_err();
        assert_eq!(err, GraphError::EmptyClassName);
    }

    #[test]
    fn test_connect_and_reject_duplicate() {
        let mut graph = sample_graph();
        let id = graph.connect("1", "2").unwrap().id().to_string();
        assert_eq!(id, "xy-edge__1right-2left");

        let err = graph.connect("1", "2").unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge(id));
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_connect_unknown_endpoint() {
        let mut graph = sample_graph();
        let err = graph.connect("1", "7").unwrap_err();
        assert_eq!(err, GraphError::UnknownNode("7".to_string()));
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph = sample_graph();
        graph.add_class(Point::default());
        graph.connect("1", "2").unwrap();
        graph.connect("2", "3").unwrap();
        graph.connect("3", "1").unwrap();

        let removed = graph.remove_node("2").unwrap();
        assert_eq!(removed.class_name(), "Bicicleta");
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].id(), "xy-edge__3right-1left");
    }

    #[test]
    fn test_update_class_and_move() {
        let mut graph = sample_graph();
        graph
            .update_class(
                "2",
                "Bici",
                vec!["+ ruedas: int".to_string()],
                vec!["+ pedalear(): void".to_string()],
            )
            .unwrap();
        graph.move_node("2", Point::new(1.0, 2.0)).unwrap();

        let node = graph.node("2").unwrap();
        assert_eq!(node.class_name(), "Bici");
        assert_eq!(node.attributes(), ["+ ruedas: int"]);
        assert_eq!(node.position(), Point::new(1.0, 2.0));

        assert_eq!(
            graph.update_class("2", "", vec![], vec![]),
            Err(GraphError::EmptyClassName)
        );
        assert_eq!(
            graph.move_node("8", Point::default()),
            Err(GraphError::UnknownNode("8".to_string()))
        );
    }

    #[test]
    fn test_update_and_remove_edge() {
        let mut graph = sample_graph();
        let id = graph.connect("1", "2").unwrap().id().to_string();

        graph
            .update_edge(&id, "1", "1..*", RelationshipType::Composition)
            .unwrap();
        let edge = graph.edge(&id).unwrap();
        assert_eq!(edge.start_label(), "1");
        assert_eq!(edge.end_label(), "1..*");
        assert_eq!(edge.relationship_type(), &RelationshipType::Composition);

        assert!(graph.remove_edge(&id).is_some());
        assert!(graph.remove_edge(&id).is_none());
        assert_eq!(
            graph.update_edge(&id, "", "", RelationshipType::Association),
            Err(GraphError::UnknownEdge(id))
        );
    }

    #[test]
    fn test_insert_edge_allows_dangling_endpoints() {
        let mut graph = sample_graph();
        graph.insert_edge(RelationshipEdge::new("1", "42")).unwrap();
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_is_empty() {
        assert!(DiagramGraph::new().is_empty());
        assert!(!sample_graph().is_empty());
        assert!(
            !DiagramGraph::from_parts(vec![], vec![RelationshipEdge::new("1", "2")]).is_empty()
        );
    }
}
