//! Error codes for the import diagnostic system.
//!
//! Codes are organized by what they concern:
//! - `E0xx` - Document errors (fatal)
//! - `W1xx` - Relationship warnings
//! - `W2xx` - Class warnings

use std::fmt;

/// Codes for categorizing import diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The input is not well-formed XML.
    E001,

    /// No content found.
    ///
    /// The document is well-formed but holds no importable class and no
    /// importable relationship.
    E002,

    // =========================================================================
    // Relationship Warnings (W1xx)
    // =========================================================================
    /// Missing endpoint element.
    ///
    /// An association end has no `UML:Source` or no `UML:Target`.
    W100,

    /// Missing endpoint reference.
    ///
    /// A `UML:Source` or `UML:Target` has no `ref` child with text.
    W101,

    /// Unresolved class reference.
    ///
    /// An association end names a class `xmi.id` that is not in the document.
    W102,

    /// Incomplete association.
    ///
    /// A `UML:Association.connection` does not hold exactly two ends.
    W103,

    // =========================================================================
    // Class Warnings (W2xx)
    // =========================================================================
    /// Unnamed class.
    ///
    /// A `UML:Class` has no `name` attribute.
    W200,

    /// Invalid diagram geometry.
    ///
    /// A `UML:DiagramElement` geometry string could not be read, so the class
    /// was placed randomly.
    W201,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "W100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::W100 => "W100",
            ErrorCode::W101 => "W101",
            ErrorCode::W102 => "W102",
            ErrorCode::W103 => "W103",
            ErrorCode::W200 => "W200",
            ErrorCode::W201 => "W201",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed document",
            ErrorCode::E002 => "no content found",
            ErrorCode::W100 => "missing relationship endpoint",
            ErrorCode::W101 => "missing endpoint reference",
            ErrorCode::W102 => "unresolved class reference",
            ErrorCode::W103 => "incomplete association",
            ErrorCode::W200 => "unnamed class",
            ErrorCode::W201 => "invalid diagram geometry",
        }
    }

    /// Returns `true` for codes that mark a skipped relationship.
    pub fn is_skipped_relationship(&self) -> bool {
        matches!(
            self,
            ErrorCode::W100 | ErrorCode::W101 | ErrorCode::W102 | ErrorCode::W103
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::W100.to_string(), "W100");
        assert_eq!(ErrorCode::W201.to_string(), "W201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "no content found");
        assert_eq!(ErrorCode::W101.description(), "missing endpoint reference");
    }

    #[test]
    fn test_skipped_relationship_codes() {
        assert!(ErrorCode::W100.is_skipped_relationship());
        assert!(ErrorCode::W103.is_skipped_relationship());
        assert!(!ErrorCode::W200.is_skipped_relationship());
        assert!(!ErrorCode::E001.is_skipped_relationship());
    }
}
