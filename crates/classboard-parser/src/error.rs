//! Error and diagnostic system for the XMI importer.
//!
//! Import problems come in two flavours:
//! - Fatal [`DecodeError`]s that abort the whole import
//! - Non-fatal [`Diagnostic`] warnings for pieces of the document that were
//!   skipped, collected while decoding continues
//!
//! # Example
//!
//! ```
//! # use classboard_parser::error::{Diagnostic, ErrorCode};
//! # use classboard_parser::Span;
//!
//! let diag = Diagnostic::warning("relationship 2 has no `UML:Target`")
//!     .with_code(ErrorCode::W100)
//!     .with_label(Span::new(120..180), "skipped association end")
//!     .with_help("add `UML:Source` and `UML:Target` elements with a `ref` child");
//! ```

mod collector;
mod decode_error;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use decode_error::DecodeError;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
