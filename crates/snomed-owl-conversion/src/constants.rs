//! Well-known SNOMED CT concept identifiers used by the concept model.

use snomed_owl::SctId;

/// 116680003 |Is a (attribute)|
pub const IS_A: SctId = 116680003;

/// 609096000 |Role group (attribute)| - the reserved grouping property.
pub const ROLE_GROUP: SctId = 609096000;

/// 762705008 |Concept model object attribute (attribute)| - root of the
/// object attribute hierarchy usually supplied as the object attribute set.
pub const CONCEPT_MODEL_OBJECT_ATTRIBUTE: SctId = 762705008;

/// 762706009 |Concept model data attribute (attribute)| - root of the data
/// attribute hierarchy usually supplied as the data attribute set.
pub const CONCEPT_MODEL_DATA_ATTRIBUTE: SctId = 762706009;

/// 1295447006 |Annotation attribute (attribute)| - root of the annotation
/// attribute hierarchy usually supplied as the annotation attribute set.
pub const ANNOTATION_ATTRIBUTE: SctId = 1295447006;
