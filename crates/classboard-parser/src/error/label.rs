//! Spans of the imported document that a diagnostic points at.

use crate::span::Span;

/// A span of the XML text with a short note.
///
/// A diagnostic has at most one primary label, on the element it is about.
/// Secondary labels mark context, such as the association owning a
/// skipped end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), false)
    }

    fn new(span: Span, message: String, primary: bool) -> Self {
        Self {
            span,
            message,
            primary,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The note rendered next to the span.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.primary
    }
}
