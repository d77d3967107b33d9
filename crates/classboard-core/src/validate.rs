//! Consistency report for a [`DiagramGraph`].
//!
//! Validation only reports. Editors and renderers are expected to tolerate
//! everything listed here; the report tells them what to filter.

use std::{collections::HashSet, fmt};

use crate::graph::DiagramGraph;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => write!(f, "source"),
            EdgeEnd::Target => write!(f, "target"),
        }
    }
}

/// A single consistency problem found in a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// Two or more nodes share an id.
    DuplicateNodeId { id: String },
    /// A node has a blank class name.
    EmptyClassName { id: String },
    /// An edge names a node that is not in the graph.
    DanglingEdge {
        edge: String,
        end: EdgeEnd,
        node: String,
    },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::DuplicateNodeId { id } => {
                write!(f, "node id `{id}` is used more than once")
            }
            GraphIssue::EmptyClassName { id } => write!(f, "node `{id}` has an empty class name"),
            GraphIssue::DanglingEdge { edge, end, node } => {
                write!(f, "edge `{edge}` {end} refers to missing node `{node}`")
            }
        }
    }
}

impl DiagramGraph {
    /// Report duplicate node ids, blank class names and dangling edges.
    ///
    /// Node issues come first in node order, then edge issues in edge order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use classboard_core::{graph::{DiagramGraph, RelationshipEdge}, validate::GraphIssue};
    /// let graph = DiagramGraph::from_parts(vec![], vec![RelationshipEdge::new("1", "2")]);
    /// assert_eq!(graph.validate().len(), 2);
    /// ```
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for node in self.nodes() {
            if !seen.insert(node.id()) && reported.insert(node.id()) {
                issues.push(GraphIssue::DuplicateNodeId {
                    id: node.id().to_string(),
                });
            }
            if node.class_name().trim().is_empty() {
                issues.push(GraphIssue::EmptyClassName {
                    id: node.id().to_string(),
                });
            }
        }

        for edge in self.edges() {
            let ends = [
                (EdgeEnd::Source, edge.source()),
                (EdgeEnd::Target, edge.target()),
            ];
            for (end, node) in ends {
                if !seen.contains(node) {
                    issues.push(GraphIssue::DanglingEdge {
                        edge: edge.id().to_string(),
                        end,
                        node: node.to_string(),
                    });
                }
            }
        }

        issues
    }

    /// True when every edge endpoint resolves to a node of this graph.
    pub fn is_referentially_complete(&self) -> bool {
        self.edges()
            .iter()
            .all(|edge| self.node(edge.source()).is_some() && self.node(edge.target()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Point,
        graph::{ClassNode, RelationshipEdge},
    };

    #[test]
    fn test_valid_graph_has_no_issues() {
        let graph = DiagramGraph::from_parts(
            vec![
                ClassNode::new("1", "Persona", Point::default()),
                ClassNode::new("2", "Bicicleta", Point::default()),
            ],
            vec![RelationshipEdge::new("1", "2")],
        );
        assert!(graph.validate().is_empty());
        assert!(graph.is_referentially_complete());
    }

    #[test]
    fn test_reports_dangling_edges() {
        let graph = DiagramGraph::from_parts(
            vec![ClassNode::new("1", "Persona", Point::default())],
            vec![RelationshipEdge::new("1", "5")],
        );

        let issues = graph.validate();
        assert_eq!(
            issues,
            vec![GraphIssue::DanglingEdge {
                edge: "xy-edge__1right-5left".to_string(),
                end: EdgeEnd::Target,
                node: "5".to_string(),
            }]
        );
        assert!(!graph.is_referentially_complete());
        assert_eq!(
            issues[0].to_string(),
            "edge `xy-edge__1right-5left` target refers to missing node `5`"
        );
    }

    #[test]
    fn test_reports_duplicate_ids_once_and_empty_names() {
        let graph = DiagramGraph::from_parts(
            vec![
                ClassNode::new("1", "A", Point::default()),
                ClassNode::new("1", "B", Point::default()),
                ClassNode::new("1", "", Point::default()),
            ],
            vec![],
        );

        let issues = graph.validate();
        assert_eq!(
            issues,
            vec![
                GraphIssue::DuplicateNodeId { id: "1".to_string() },
                GraphIssue::EmptyClassName { id: "1".to_string() },
            ]
        );
    }
}
