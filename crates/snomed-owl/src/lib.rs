//! # snomed-owl
//!
//! A Rust library for the OWL functional syntax subset used to define
//! SNOMED CT concepts.
//!
//! SNOMED CT logical definitions are distributed as OWL axiom expression
//! strings in the OWL Axiom reference set. Only a constrained subset of OWL
//! is used; this crate models exactly that subset:
//!
//! | Axiom | Example |
//! |-------|---------|
//! | SubClassOf | `SubClassOf(:73211009 :362969004)` |
//! | EquivalentClasses | `EquivalentClasses(:73211009 ObjectIntersectionOf(...))` |
//! | SubObjectPropertyOf | `SubObjectPropertyOf(:363698007 :762705008)` |
//! | SubDataPropertyOf | `SubDataPropertyOf(:3264475007 :762706009)` |
//! | SubAnnotationPropertyOf | `SubAnnotationPropertyOf(:1295448001 :1295447006)` |
//! | TransitiveObjectProperty | `TransitiveObjectProperty(:738774007)` |
//! | ReflexiveObjectProperty | `ReflexiveObjectProperty(:738774007)` |
//! | Property chain | `SubObjectPropertyOf(ObjectPropertyChain(:363701004 :127489000) :363701004)` |
//!
//! Class expressions are limited to named classes, `ObjectIntersectionOf`,
//! `ObjectSomeValuesFrom` and `DataHasValue` (concrete values).
//!
//! ## Usage
//!
//! ```rust
//! use snomed_owl::{parse, OwlAxiom};
//!
//! // Parse an axiom expression using the SNOMED prefix form
//! let axiom = parse("SubClassOf(:404684003 :138875005)").unwrap();
//! assert!(matches!(axiom, OwlAxiom::SubClassOf { .. }));
//!
//! // Rendering expands entities to full IRIs
//! assert_eq!(
//!     axiom.to_string(),
//!     "SubClassOf(<http://snomed.info/id/404684003> <http://snomed.info/id/138875005>)"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod parser;

pub use ast::{
    AnnotationProperty, ClassExpression, DataProperty, Datatype, Entity, Iri, Literal,
    ObjectProperty, OwlAxiom, OwlClass,
};
pub use error::{OwlError, OwlResult};
pub use parser::parse;

/// SNOMED CT Identifier type (64-bit unsigned integer).
pub type SctId = u64;

/// The IRI namespace under which SNOMED CT components are published.
pub const SNOMED_IRI_NAMESPACE: &str = "http://snomed.info/id/";
