//! Construction of OWL axiom trees from relationship representations.
//!
//! The builder owns the reserved role-group property and the concrete value
//! literal encoding, and applies the grouping rules in reverse: group 0
//! IS-A relationships become parent classes, group 0 attributes stay
//! ungrouped only when their type is registered as an ungrouped attribute,
//! and every numbered group becomes an existential restriction on the
//! role-group property.

use std::collections::HashSet;

use snomed_owl::{
    AnnotationProperty, ClassExpression, DataProperty, Datatype, Iri, Literal, ObjectProperty,
    OwlAxiom, SctId,
};

use crate::constants;
use crate::error::{ConversionError, ConversionResult};
use crate::relationship::{ConcreteValueKind, Destination, Relationship, RelationshipGroups};
use crate::representation::AxiomRepresentation;

/// Builds OWL axiom trees for the supported axiom shapes.
#[derive(Debug, Clone, Default)]
pub struct AxiomBuilder {
    ungrouped_attributes: HashSet<SctId>,
}

impl AxiomBuilder {
    /// Creates a builder. `ungrouped_attributes` holds the ids of attribute
    /// types allowed outside role groups (MRCM attribute domain members with
    /// group 0).
    pub fn new(ungrouped_attributes: HashSet<SctId>) -> Self {
        AxiomBuilder { ungrouped_attributes }
    }

    /// Builds a `SubObjectPropertyOf` axiom between two attribute concepts.
    pub fn sub_object_property_of(&self, sub: SctId, sup: SctId) -> OwlAxiom {
        OwlAxiom::SubObjectPropertyOf {
            sub_property: ObjectProperty(Iri::snomed(sub)),
            super_property: ObjectProperty(Iri::snomed(sup)),
        }
    }

    /// Builds a `SubDataPropertyOf` axiom between two attribute concepts.
    pub fn sub_data_property_of(&self, sub: SctId, sup: SctId) -> OwlAxiom {
        OwlAxiom::SubDataPropertyOf {
            sub_property: DataProperty(Iri::snomed(sub)),
            super_property: DataProperty(Iri::snomed(sup)),
        }
    }

    /// Builds a `SubAnnotationPropertyOf` axiom between two attribute
    /// concepts.
    pub fn sub_annotation_property_of(&self, sub: SctId, sup: SctId) -> OwlAxiom {
        OwlAxiom::SubAnnotationPropertyOf {
            sub_property: AnnotationProperty(Iri::snomed(sub)),
            super_property: AnnotationProperty(Iri::snomed(sup)),
        }
    }

    /// Builds the class axiom for a representation: `SubClassOf` for
    /// primitive normal forms and GCIs, `EquivalentClasses` for fully
    /// defined normal forms.
    pub fn class_axiom(&self, representation: &AxiomRepresentation) -> ConversionResult<OwlAxiom> {
        match representation {
            AxiomRepresentation::Normal { named_concept, relationships, primitive } => {
                let named = ClassExpression::named(*named_concept);
                let definition = self.expression_from_groups(relationships)?;
                if *primitive {
                    Ok(OwlAxiom::SubClassOf { sub_class: named, super_class: definition })
                } else {
                    Ok(OwlAxiom::EquivalentClasses(vec![named, definition]))
                }
            }
            AxiomRepresentation::Gci { relationships, named_concept } => Ok(OwlAxiom::SubClassOf {
                sub_class: self.expression_from_groups(relationships)?,
                super_class: ClassExpression::named(*named_concept),
            }),
        }
    }

    /// Rebuilds the nested intersection/existential/role-group structure
    /// from relationship groups.
    fn expression_from_groups(
        &self,
        groups: &RelationshipGroups,
    ) -> ConversionResult<ClassExpression> {
        let mut operands = Vec::new();
        for (group, relationships) in groups {
            if *group == 0 {
                for relationship in relationships {
                    operands.push(self.ungrouped_operand(relationship)?);
                }
            } else {
                let members = relationships
                    .iter()
                    .map(|relationship| self.restriction(relationship))
                    .collect::<ConversionResult<Vec<_>>>()?;
                operands.push(self.role_group(Self::single_or_intersection(members)?));
            }
        }
        Self::single_or_intersection(operands)
    }

    fn ungrouped_operand(&self, relationship: &Relationship) -> ConversionResult<ClassExpression> {
        if relationship.is_is_a() {
            let destination = relationship.destination.concept_id().ok_or_else(|| {
                ConversionError::InvalidRepresentation(
                    "an IS-A relationship cannot have a concrete value destination".to_string(),
                )
            })?;
            return Ok(ClassExpression::named(destination));
        }
        let restriction = self.restriction(relationship)?;
        if self.ungrouped_attributes.contains(&relationship.type_id) {
            Ok(restriction)
        } else {
            // Attributes not registered as ungrouped are wrapped in a role
            // group of their own.
            Ok(self.role_group(restriction))
        }
    }

    fn role_group(&self, filler: ClassExpression) -> ClassExpression {
        ClassExpression::some_values_from(
            ObjectProperty(Iri::snomed(constants::ROLE_GROUP)),
            filler,
        )
    }

    fn restriction(&self, relationship: &Relationship) -> ConversionResult<ClassExpression> {
        match &relationship.destination {
            Destination::Concept(destination_id) => Ok(ClassExpression::some_values_from(
                ObjectProperty(Iri::snomed(relationship.type_id)),
                ClassExpression::named(*destination_id),
            )),
            Destination::Value(value) => {
                let datatype = match value.kind {
                    ConcreteValueKind::Decimal => Datatype::XsdDecimal,
                    ConcreteValueKind::Integer => Datatype::XsdInteger,
                    ConcreteValueKind::String => Datatype::XsdString,
                };
                Ok(ClassExpression::DataHasValue {
                    property: DataProperty(Iri::snomed(relationship.type_id)),
                    literal: Literal::new(value.value.clone(), datatype),
                })
            }
        }
    }

    fn single_or_intersection(
        mut operands: Vec<ClassExpression>,
    ) -> ConversionResult<ClassExpression> {
        match operands.len() {
            0 => Err(ConversionError::InvalidRepresentation(
                "at least one relationship is required to build a class expression".to_string(),
            )),
            1 => Ok(operands.remove(0)),
            _ => Ok(ClassExpression::ObjectIntersectionOf(operands)),
        }
    }
}
