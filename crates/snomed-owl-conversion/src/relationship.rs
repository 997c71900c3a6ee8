//! The relationship model: typed, optionally grouped connections from a
//! concept to other concepts or concrete values.

use std::collections::BTreeMap;

use snomed_owl::SctId;

use crate::constants;

/// Relationship groups keyed by group number.
///
/// Group 0 is the reserved ungrouped bucket; every other number denotes a
/// role group whose members co-occur. Insertion order within a group is
/// preserved.
pub type RelationshipGroups = BTreeMap<u32, Vec<Relationship>>;

/// The kind of a concrete value literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcreteValueKind {
    /// A decimal number.
    Decimal,
    /// An integer number.
    Integer,
    /// A string.
    String,
}

/// A typed literal used as a relationship destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcreteValue {
    /// The value kind.
    pub kind: ConcreteValueKind,
    /// The textual value, kept exactly as given.
    pub value: String,
}

impl ConcreteValue {
    /// Creates a decimal concrete value.
    pub fn decimal(value: impl Into<String>) -> Self {
        ConcreteValue { kind: ConcreteValueKind::Decimal, value: value.into() }
    }

    /// Creates an integer concrete value.
    pub fn integer(value: impl Into<String>) -> Self {
        ConcreteValue { kind: ConcreteValueKind::Integer, value: value.into() }
    }

    /// Creates a string concrete value.
    pub fn string(value: impl Into<String>) -> Self {
        ConcreteValue { kind: ConcreteValueKind::String, value: value.into() }
    }
}

impl std::fmt::Display for ConcreteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ConcreteValueKind::Decimal | ConcreteValueKind::Integer => {
                write!(f, "#{}", self.value)
            }
            ConcreteValueKind::String => write!(f, "\"{}\"", self.value),
        }
    }
}

/// The destination of a relationship: a concept or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    /// A named concept destination.
    Concept(SctId),
    /// A concrete value destination.
    Value(ConcreteValue),
}

impl Destination {
    /// Returns the destination concept id, if the destination is a concept.
    pub fn concept_id(&self) -> Option<SctId> {
        match self {
            Destination::Concept(id) => Some(*id),
            Destination::Value(_) => None,
        }
    }

    /// Returns the concrete value, if the destination is one.
    pub fn concrete_value(&self) -> Option<&ConcreteValue> {
        match self {
            Destination::Concept(_) => None,
            Destination::Value(value) => Some(value),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Concept(id) => write!(f, "{}", id),
            Destination::Value(value) => write!(f, "{}", value),
        }
    }
}

/// A single relationship: group number, attribute type and destination.
///
/// Relationships compare and hash by full value so collections of them have
/// set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// The role group number; 0 means ungrouped.
    pub group: u32,
    /// The attribute type concept id.
    pub type_id: SctId,
    /// The destination concept or concrete value.
    pub destination: Destination,
}

impl Relationship {
    /// Creates a relationship with a concept destination.
    pub fn new(group: u32, type_id: SctId, destination_id: SctId) -> Self {
        Relationship { group, type_id, destination: Destination::Concept(destination_id) }
    }

    /// Creates a relationship with a concrete value destination.
    pub fn concrete(group: u32, type_id: SctId, value: ConcreteValue) -> Self {
        Relationship { group, type_id, destination: Destination::Value(value) }
    }

    /// Returns true if this is an IS-A relationship.
    pub fn is_is_a(&self) -> bool {
        self.type_id == constants::IS_A
    }
}
