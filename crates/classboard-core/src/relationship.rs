//! Relationship vocabulary shared by the board and the XMI interchange format.
//!
//! The board knows three relationship kinds. XMI distinguishes them only
//! through the `aggregation` attribute of the target association end, see
//! [`RelationshipType::aggregation`].

use std::{
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Kind of a relationship edge.
///
/// The stored value is free text, so anything outside the three known kinds
/// is kept verbatim in [`RelationshipType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    #[default]
    Association,
    Aggregation,
    Composition,
    Other(String),
}

impl RelationshipType {
    /// Returns the textual name as stored on the board and in `ea_type`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Association => "Association",
            Self::Aggregation => "Aggregation",
            Self::Composition => "Composition",
            Self::Other(name) => name,
        }
    }

    /// Aggregation encoding of the target end of this relationship.
    ///
    /// Total: anything that is not an association or an aggregation is
    /// exported as a composition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use classboard_core::relationship::{AggregationKind, RelationshipType};
    /// assert_eq!(RelationshipType::Association.aggregation(), AggregationKind::None);
    /// assert_eq!(RelationshipType::Aggregation.aggregation(), AggregationKind::Shared);
    /// let custom: RelationshipType = "Dependency".into();
    /// assert_eq!(custom.aggregation(), AggregationKind::Composite);
    /// ```
    pub fn aggregation(&self) -> AggregationKind {
        match self {
            Self::Association => AggregationKind::None,
            Self::Aggregation => AggregationKind::Shared,
            Self::Composition | Self::Other(_) => AggregationKind::Composite,
        }
    }

    /// Recovers the relationship kind from a target end aggregation.
    pub fn from_aggregation(kind: AggregationKind) -> Self {
        match kind {
            AggregationKind::None => Self::Association,
            AggregationKind::Shared => Self::Aggregation,
            AggregationKind::Composite => Self::Composition,
        }
    }
}

impl From<&str> for RelationshipType {
    fn from(value: &str) -> Self {
        match value {
            "Association" => Self::Association,
            "Aggregation" => Self::Aggregation,
            "Composition" => Self::Composition,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RelationshipType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Association" | "Aggregation" | "Composition" => Self::from(value.as_str()),
            _ => Self::Other(value),
        }
    }
}

impl From<RelationshipType> for String {
    fn from(value: RelationshipType) -> Self {
        match value {
            RelationshipType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RelationshipType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// XMI `aggregation` attribute value of an association end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    None,
    Shared,
    Composite,
}

impl AggregationKind {
    /// Returns the XMI attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shared => "shared",
            Self::Composite => "composite",
        }
    }

    /// Parses an XMI attribute value. Surrounding whitespace is ignored since
    /// some exporters pad the value.
    pub fn from_xmi(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(Self::None),
            "shared" => Some(Self::Shared),
            "composite" => Some(Self::Composite),
            _ => None,
        }
    }
}

impl Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_aggregation_is_total(name: &str) -> Result<(), TestCaseError> {
        let kind = RelationshipType::from(name);
        let encoded = kind.aggregation().as_str();

        prop_assert!(matches!(encoded, "none" | "shared" | "composite"));
        if name != "Association" && name != "Aggregation" {
            prop_assert_eq!(encoded, "composite");
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn aggregation_is_total(name in ".*") {
            check_aggregation_is_total(&name)?;
        }

        #[test]
        fn string_conversion_is_lossless(name in ".*") {
            let kind = RelationshipType::from(name.clone());
            prop_assert_eq!(String::from(kind), name);
        }
    }
}
