//! Export of boards to interchange formats.
//!
//! # Pipeline Position
//!
//! ```text
//! XMI text
//!     ↓ decode (classboard-parser)
//! DiagramGraph
//!     ↓ edit
//! DiagramGraph
//!     ↓ export (this module)
//! XMI text
//! ```
//!
//! # Available Backends
//!
//! - [`xmi`]: XMI 1.1 for Enterprise Architect 2.5 via [`xmi::encode`]
//!
//! Exporting never fails: every graph, including one with dangling edges,
//! has a document.

mod templates;
pub mod xmi;

pub use xmi::{ExportOptions, class_xmi_id, encode};
