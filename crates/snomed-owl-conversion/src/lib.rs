//! # snomed-owl-conversion
//!
//! Exact, bidirectional conversion between SNOMED CT OWL axiom expressions
//! and the SNOMED CT relationship model: a concept connected to other
//! concepts or concrete values through typed, optionally grouped
//! relationships.
//!
//! Relationships derived from an axiom reproduce an equivalent axiom when
//! rebuilt, and vice versa. The conversion is purely structural; no
//! reasoning or terminology-wide validation is performed.
//!
//! ## Forward: axiom to relationships
//!
//! ```rust
//! use std::collections::HashSet;
//! use snomed_owl_conversion::{AxiomConverter, AxiomRepresentation};
//!
//! let converter = AxiomConverter::new(HashSet::new());
//! let representation = converter
//!     .convert_axiom_to_relationships(
//!         "SubClassOf(:100 ObjectIntersectionOf(:200 \
//!          ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:300 :400))))",
//!     )
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(representation.named_concept(), 100);
//! // Group 0 holds the IS-A, group 1 holds the role-grouped attribute.
//! assert_eq!(representation.relationships().len(), 2);
//! ```
//!
//! ## Reverse: relationships to axiom
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::collections::HashSet;
//! use snomed_owl_conversion::{
//!     AxiomConverter, AxiomRepresentation, Relationship,
//! };
//!
//! let converter = AxiomConverter::new(HashSet::new());
//! let mut relationships = BTreeMap::new();
//! relationships.insert(0, vec![Relationship::new(0, 116680003, 200)]);
//!
//! let axiom = converter
//!     .convert_relationships_to_axiom(&AxiomRepresentation::Normal {
//!         named_concept: 100,
//!         relationships,
//!         primitive: true,
//!     })
//!     .unwrap();
//! assert_eq!(axiom, "SubClassOf(:100 :200)");
//! ```
//!
//! Axiom types with no relationship rendition (transitivity, reflexivity,
//! property chains) decompose to `None` and can instead be classified with
//! [`AxiomConverter::as_object_property_axiom`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
pub mod constants;
mod converter;
mod error;
mod normalize;
mod relationship;
mod representation;
pub mod resolver;

pub use builder::AxiomBuilder;
pub use converter::{AxiomConverter, AxiomConverterBuilder, GroupOffset};
pub use error::{ConversionError, ConversionResult};
pub use relationship::{
    ConcreteValue, ConcreteValueKind, Destination, Relationship, RelationshipGroups,
};
pub use representation::{AxiomRepresentation, ObjectPropertyAxiomRepresentation};

pub use snomed_owl::SctId;
