//! Resolution of OWL entities to SNOMED CT concept identifiers.

use snomed_owl::{Entity, Iri, ObjectProperty, SctId};

use crate::constants;
use crate::error::{ConversionError, ConversionResult};

/// Extracts the SNOMED CT identifier named by an entity IRI.
pub fn concept_id_of(iri: &Iri) -> ConversionResult<SctId> {
    iri.sct_id().ok_or_else(|| ConversionError::UnresolvableIri {
        iri: iri.as_str().to_string(),
    })
}

/// Returns true if the signature entity is a named concept, as opposed to an
/// object, data or annotation property.
pub fn is_named_concept(entity: &Entity<'_>) -> bool {
    matches!(entity, Entity::Class(_))
}

/// Returns true if the property is the reserved role-group property.
pub fn is_role_group(property: &ObjectProperty) -> bool {
    property.0.sct_id() == Some(constants::ROLE_GROUP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snomed_owl::OwlClass;

    #[test]
    fn test_concept_id_of() {
        assert_eq!(concept_id_of(&Iri::snomed(404684003)).unwrap(), 404684003);
        assert!(matches!(
            concept_id_of(&Iri::new("http://example.org/thing")),
            Err(ConversionError::UnresolvableIri { .. })
        ));
    }

    #[test]
    fn test_is_named_concept() {
        let class = OwlClass(Iri::snomed(100));
        let property = ObjectProperty(Iri::snomed(300));
        assert!(is_named_concept(&Entity::Class(&class)));
        assert!(!is_named_concept(&Entity::ObjectProperty(&property)));
    }

    #[test]
    fn test_is_role_group() {
        assert!(is_role_group(&ObjectProperty(Iri::snomed(constants::ROLE_GROUP))));
        assert!(!is_role_group(&ObjectProperty(Iri::snomed(363698007))));
    }
}
