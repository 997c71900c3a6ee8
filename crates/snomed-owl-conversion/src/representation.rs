//! Intermediate representations produced by decomposition.

use snomed_owl::SctId;

use crate::relationship::RelationshipGroups;

/// The relationship-level representation of one class or property axiom.
///
/// Exactly two shapes exist: the normal form places the defined concept on
/// the left and its definition (as relationship groups) on the right; the
/// GCI form places a composite expression on the left and a named concept on
/// the right. Representations compare and hash by value so a concept's
/// axioms can be aggregated with set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxiomRepresentation {
    /// Normal form: a named concept defined by relationship groups.
    Normal {
        /// The concept being defined (left hand side).
        named_concept: SctId,
        /// The definition (right hand side).
        relationships: RelationshipGroups,
        /// True for SubClassOf-derived axioms, false for EquivalentClasses.
        primitive: bool,
    },

    /// General Concept Inclusion: a composite expression implying a named
    /// concept. GCI groups never share numbering with the concept's normal
    /// form and are excluded from its necessary normal form.
    Gci {
        /// The expression side (left hand side).
        relationships: RelationshipGroups,
        /// The implied concept (right hand side).
        named_concept: SctId,
    },
}

impl AxiomRepresentation {
    /// The named concept side of the representation.
    pub fn named_concept(&self) -> SctId {
        match self {
            AxiomRepresentation::Normal { named_concept, .. }
            | AxiomRepresentation::Gci { named_concept, .. } => *named_concept,
        }
    }

    /// The relationship group side of the representation.
    pub fn relationships(&self) -> &RelationshipGroups {
        match self {
            AxiomRepresentation::Normal { relationships, .. }
            | AxiomRepresentation::Gci { relationships, .. } => relationships,
        }
    }

    /// Whether the axiom states a primitive (sufficient-only) definition.
    /// GCI forms are always treated as primitive.
    pub fn is_primitive(&self) -> bool {
        match self {
            AxiomRepresentation::Normal { primitive, .. } => *primitive,
            AxiomRepresentation::Gci { .. } => true,
        }
    }

    /// Returns true for the GCI form.
    pub fn is_gci(&self) -> bool {
        matches!(self, AxiomRepresentation::Gci { .. })
    }
}

/// Classification of an object property axiom.
///
/// Transitivity, reflexivity and property chains are not convertible to
/// relationships; they are surfaced as flags against the original
/// expression text instead. At most one flag is set for a given axiom.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectPropertyAxiomRepresentation {
    /// The original axiom expression text.
    pub axiom: String,
    /// True for `TransitiveObjectProperty` axioms.
    pub transitive: bool,
    /// True for `ReflexiveObjectProperty` axioms.
    pub reflexive: bool,
    /// True for `SubObjectPropertyOf(ObjectPropertyChain(...) ...)` axioms.
    pub property_chain: bool,
}

impl ObjectPropertyAxiomRepresentation {
    /// Creates a representation with no characteristics set.
    pub fn new(axiom: impl Into<String>) -> Self {
        ObjectPropertyAxiomRepresentation {
            axiom: axiom.into(),
            transitive: false,
            reflexive: false,
            property_chain: false,
        }
    }
}
