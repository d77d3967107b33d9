//! Fatal import errors.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Errors that abort an import. No partial board is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text is not well-formed XML.
    #[error("malformed document: {message}")]
    MalformedDocument {
        message: String,
        span: Option<Span>,
    },

    /// The document is well-formed but holds no importable class and no
    /// importable relationship.
    #[error("no classes or relationships found in the document")]
    NoContentFound,
}

impl DecodeError {
    /// Create a `MalformedDocument` error.
    pub fn malformed(message: impl Into<String>, span: Option<Span>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
            span,
        }
    }

    /// Returns the code matching this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::MalformedDocument { .. } => ErrorCode::E001,
            DecodeError::NoContentFound => ErrorCode::E002,
        }
    }

    /// Converts the error into a diagnostic suitable for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).with_code(self.code());
        match self {
            DecodeError::MalformedDocument {
                span: Some(span), ..
            } => diag.with_label(*span, "the document stops being valid XML here"),
            DecodeError::MalformedDocument { span: None, .. } => diag,
            DecodeError::NoContentFound => diag.with_help(
                "the importer reads `UML:Class` elements and `UML:AssociationEnd` relationships",
            ),
        }
    }
}
