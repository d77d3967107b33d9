//! Classboard Core Types and Definitions
//!
//! This crate provides the class diagram model shared by the Classboard
//! importer, exporter and editor. It includes:
//!
//! - **Graph**: The board model ([`graph::DiagramGraph`]) with its class nodes
//!   and relationship edges, plus the editor mutations
//! - **Relationships**: Relationship kinds and their aggregation encoding
//!   ([`relationship`] module)
//! - **Features**: Formatting of attribute and method strings ([`feature`] module)
//! - **Geometry**: Canvas positions ([`geometry`] module)
//! - **Store**: The persisted board shape ([`store::Board`])
//! - **Validation**: Referential consistency reports ([`validate`] module)

pub mod feature;
pub mod geometry;
pub mod graph;
pub mod relationship;
pub mod store;
pub mod validate;
