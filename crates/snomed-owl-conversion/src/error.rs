//! Error types for axiom/relationship conversion.

use snomed_owl::OwlError;
use thiserror::Error;

/// Errors that can occur while converting between OWL axioms and
/// relationship groups.
///
/// Unsupported but well-formed axiom *types* are not errors; those yield
/// `None` from the decomposition entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The axiom expression text could not be parsed.
    #[error("failed to deserialise axiom expression '{expression}'")]
    Deserialisation {
        /// The malformed expression text.
        expression: String,
        /// The underlying parse error.
        #[source]
        source: OwlError,
    },

    /// The axiom or class expression has a shape the converter does not
    /// accept at that position.
    #[error("{message} - expression '{expression}'")]
    UnexpectedStructure {
        /// What was expected and what was found.
        message: String,
        /// The offending axiom or expression text.
        expression: String,
    },

    /// A relationship representation cannot be rebuilt into an axiom.
    #[error("{0}")]
    InvalidRepresentation(String),

    /// An entity IRI does not carry a SNOMED CT identifier.
    #[error("'{iri}' is not a SNOMED CT concept IRI")]
    UnresolvableIri {
        /// The offending IRI.
        iri: String,
    },
}

/// Result type for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
