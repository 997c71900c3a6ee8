//! Bidirectional conversion between OWL axioms and relationship groups.

use std::collections::{HashMap, HashSet};

use snomed_owl::{ClassExpression, OwlAxiom, SctId};
use tracing::{debug, error};

use crate::builder::AxiomBuilder;
use crate::constants;
use crate::error::{ConversionError, ConversionResult};
use crate::normalize::normalize_rendered_axiom;
use crate::relationship::{
    ConcreteValue, ConcreteValueKind, Relationship, RelationshipGroups,
};
use crate::representation::{AxiomRepresentation, ObjectPropertyAxiomRepresentation};
use crate::resolver;

/// Rolling role-group number, shared across the axioms of one concept so
/// their groups never collide. Starts at 1; group 0 is reserved for
/// ungrouped relationships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOffset(u32);

impl GroupOffset {
    /// Creates a counter starting at 1.
    pub fn new() -> Self {
        GroupOffset(1)
    }

    /// Creates a counter starting at an arbitrary group number.
    pub fn starting_at(start: u32) -> Self {
        GroupOffset(start)
    }

    /// The group number the next role group will receive.
    pub fn current(&self) -> u32 {
        self.0
    }

    fn advance(&mut self) {
        self.0 += 1;
    }
}

impl Default for GroupOffset {
    fn default() -> Self {
        GroupOffset::new()
    }
}

/// Converts between OWL axioms and the SNOMED CT relationship model.
///
/// The attribute classification sets control which property-subsumption
/// axiom shapes the reverse direction can emit; an absent set disables its
/// shape and the conversion falls through to a general class axiom.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use snomed_owl_conversion::AxiomConverter;
///
/// let converter = AxiomConverter::new(HashSet::new());
/// let representation = converter
///     .convert_axiom_to_relationships("SubClassOf(:100 :200)")
///     .unwrap()
///     .unwrap();
/// assert_eq!(representation.named_concept(), 100);
/// assert!(representation.is_primitive());
/// ```
#[derive(Debug, Clone)]
pub struct AxiomConverter {
    builder: AxiomBuilder,
    object_attributes: Option<HashSet<SctId>>,
    data_attributes: Option<HashSet<SctId>>,
    annotation_attributes: Option<HashSet<SctId>>,
}

impl AxiomConverter {
    /// Creates a converter with only the ungrouped-attribute set configured.
    /// Reverse composition will emit class axioms exclusively.
    pub fn new(ungrouped_attributes: HashSet<SctId>) -> Self {
        AxiomConverter {
            builder: AxiomBuilder::new(ungrouped_attributes),
            object_attributes: None,
            data_attributes: None,
            annotation_attributes: None,
        }
    }

    /// Creates a builder for a fully configured converter.
    pub fn builder() -> AxiomConverterBuilder {
        AxiomConverterBuilder::default()
    }

    // =========================================================================
    // Forward: axiom -> relationships
    // =========================================================================

    /// Parses an axiom expression string and decomposes it into a
    /// relationship representation.
    ///
    /// Returns `Ok(None)` when the axiom type is well formed but not
    /// convertible to relationships (transitivity, reflexivity, property
    /// chains).
    pub fn convert_axiom_to_relationships(
        &self,
        axiom_expression: &str,
    ) -> ConversionResult<Option<AxiomRepresentation>> {
        let axiom = self.deserialise(axiom_expression)?;
        self.convert_axiom(&axiom)
    }

    /// Decomposes an axiom tree with a fresh group counter.
    pub fn convert_axiom(&self, axiom: &OwlAxiom) -> ConversionResult<Option<AxiomRepresentation>> {
        self.convert_axiom_with_offset(axiom, &mut GroupOffset::new())
    }

    /// Decomposes an axiom tree, numbering role groups from the supplied
    /// counter. The counter should be shared across all axioms of one
    /// concept, in axiom order.
    pub fn convert_axiom_with_offset(
        &self,
        axiom: &OwlAxiom,
        group_offset: &mut GroupOffset,
    ) -> ConversionResult<Option<AxiomRepresentation>> {
        let (left_expression, right_expression, primitive) = match axiom {
            OwlAxiom::SubObjectPropertyOf { sub_property, super_property } => {
                return Ok(Some(self.property_subsumption(
                    resolver::concept_id_of(&sub_property.0)?,
                    resolver::concept_id_of(&super_property.0)?,
                )));
            }
            OwlAxiom::SubDataPropertyOf { sub_property, super_property } => {
                return Ok(Some(self.property_subsumption(
                    resolver::concept_id_of(&sub_property.0)?,
                    resolver::concept_id_of(&super_property.0)?,
                )));
            }
            OwlAxiom::SubAnnotationPropertyOf { sub_property, super_property } => {
                return Ok(Some(self.property_subsumption(
                    resolver::concept_id_of(&sub_property.0)?,
                    resolver::concept_id_of(&super_property.0)?,
                )));
            }
            OwlAxiom::TransitiveObjectProperty(_)
            | OwlAxiom::ReflexiveObjectProperty(_)
            | OwlAxiom::SubObjectPropertyChainOf { .. } => {
                debug!(
                    axiom_type = axiom.type_name(),
                    "axiom type cannot be converted to relationships, returning none"
                );
                return Ok(None);
            }
            OwlAxiom::EquivalentClasses(expressions) => {
                if expressions.len() != 2 {
                    return Err(ConversionError::UnexpectedStructure {
                        message: format!(
                            "expecting EquivalentClasses expression to contain 2 expressions, got {}",
                            expressions.len()
                        ),
                        expression: self.axiom_to_string(axiom),
                    });
                }
                (&expressions[0], &expressions[1], false)
            }
            OwlAxiom::SubClassOf { sub_class, super_class } => (sub_class, super_class, true),
        };

        let left_named = Self::named_concept_of(left_expression)?;
        let right_named = Self::named_concept_of(right_expression)?;

        if let Some(named_concept) = left_named {
            // Normal axiom
            let relationships = match right_named {
                Some(parent) => Self::single_is_a(parent),
                None => self.decompose_intersection(right_expression, group_offset)?,
            };
            Ok(Some(AxiomRepresentation::Normal { named_concept, relationships, primitive }))
        } else {
            // GCI - groups are numbered independently because GCI axioms do
            // not contribute to the concept's necessary normal form.
            let relationships =
                self.decompose_intersection(left_expression, &mut GroupOffset::new())?;
            let Some(named_concept) = right_named else {
                return Err(ConversionError::UnexpectedStructure {
                    message: "axioms with expressions on both sides are not supported".to_string(),
                    expression: self.axiom_to_string(axiom),
                });
            };
            Ok(Some(AxiomRepresentation::Gci { relationships, named_concept }))
        }
    }

    /// Converts each concept's axiom list to a set of relationship
    /// representations, sharing one group counter per concept.
    ///
    /// Axioms of unconvertible types are silently dropped; when
    /// `ignore_gci_axioms` is set, GCI-shaped `SubClassOf` axioms are skipped
    /// entirely. The first structural error aborts the whole batch.
    pub fn convert_axioms_to_relationships(
        &self,
        concept_axioms: &HashMap<SctId, Vec<OwlAxiom>>,
        ignore_gci_axioms: bool,
    ) -> ConversionResult<HashMap<SctId, HashSet<AxiomRepresentation>>> {
        let mut concept_axiom_statements: HashMap<SctId, HashSet<AxiomRepresentation>> =
            HashMap::new();
        for (concept_id, axioms) in concept_axioms {
            // Skipping to 1 as 0 is reserved for non-grouped relationships.
            let mut group_offset = GroupOffset::new();
            for axiom in axioms {
                if ignore_gci_axioms && axiom.is_gci() {
                    continue;
                }
                let representation = self
                    .convert_axiom_with_offset(axiom, &mut group_offset)
                    .map_err(|conversion_error| {
                        error!(
                            axiom = %axiom,
                            error = %conversion_error,
                            "failed to convert axiom"
                        );
                        conversion_error
                    })?;
                if let Some(representation) = representation {
                    concept_axiom_statements
                        .entry(*concept_id)
                        .or_default()
                        .insert(representation);
                }
            }
        }
        Ok(concept_axiom_statements)
    }

    // =========================================================================
    // Reverse: relationships -> axiom
    // =========================================================================

    /// Composes an axiom expression string from a relationship
    /// representation.
    ///
    /// Normal-form representations must carry at least one IS-A relationship
    /// in group 0. When the first IS-A destination is a configured
    /// annotation, object or data attribute (checked in that priority
    /// order), the matching property-subsumption axiom is emitted; otherwise
    /// a general class axiom is built.
    pub fn convert_relationships_to_axiom(
        &self,
        representation: &AxiomRepresentation,
    ) -> ConversionResult<String> {
        if let AxiomRepresentation::Normal { named_concept, relationships, .. } = representation {
            let Some(group_zero) = relationships.get(&0) else {
                return Err(ConversionError::InvalidRepresentation(
                    "at least one relationship is required in group 0".to_string(),
                ));
            };
            if !group_zero.iter().any(Relationship::is_is_a) {
                return Err(ConversionError::InvalidRepresentation(
                    "at least one relationship with type '116680003 | Is a (attribute) |' \
                     is required in group 0"
                        .to_string(),
                ));
            }
            for relationship in group_zero {
                if relationship.is_is_a() {
                    if let Some(destination) = relationship.destination.concept_id() {
                        if let Some(axiom) = self.property_axiom(*named_concept, destination) {
                            return Ok(self.axiom_to_string(&axiom));
                        }
                    }
                    // If the first parent is not an attribute then the
                    // concept is not an attribute.
                    break;
                }
            }
        }

        // Normal axioms and GCI axioms go through here.
        let axiom = self.builder.class_axiom(representation)?;
        Ok(self.axiom_to_string(&axiom))
    }

    /// Classifies an IS-A destination against the configured attribute sets
    /// and builds the matching property-subsumption axiom. Attribute
    /// concepts have at most one classified parent, so priority order only
    /// matters for misconfigured overlapping sets.
    fn property_axiom(&self, sub: SctId, destination: SctId) -> Option<OwlAxiom> {
        if self.contains(&self.annotation_attributes, destination) {
            Some(self.builder.sub_annotation_property_of(sub, destination))
        } else if self.contains(&self.object_attributes, destination) {
            Some(self.builder.sub_object_property_of(sub, destination))
        } else if self.contains(&self.data_attributes, destination) {
            Some(self.builder.sub_data_property_of(sub, destination))
        } else {
            None
        }
    }

    fn contains(&self, attribute_set: &Option<HashSet<SctId>>, id: SctId) -> bool {
        attribute_set.as_ref().is_some_and(|set| set.contains(&id))
    }

    /// Renders an axiom tree and normalizes the text: SNOMED concept IRIs
    /// collapse to the `:id` prefix form and serializer separator artifacts
    /// are removed.
    pub fn axiom_to_string(&self, axiom: &OwlAxiom) -> String {
        normalize_rendered_axiom(&axiom.to_string())
    }

    // =========================================================================
    // Auxiliary extractors
    // =========================================================================

    /// Classifies an axiom expression's object property characteristics:
    /// transitivity, reflexivity or being the head of a property chain.
    /// None of these are converted through the relationship model.
    pub fn as_object_property_axiom(
        &self,
        axiom_expression: &str,
    ) -> ConversionResult<ObjectPropertyAxiomRepresentation> {
        let axiom = self.deserialise(axiom_expression)?;
        let mut representation = ObjectPropertyAxiomRepresentation::new(axiom_expression);
        match axiom {
            OwlAxiom::TransitiveObjectProperty(_) => representation.transitive = true,
            OwlAxiom::ReflexiveObjectProperty(_) => representation.reflexive = true,
            OwlAxiom::SubObjectPropertyChainOf { .. } => representation.property_chain = true,
            _ => {}
        }
        Ok(representation)
    }

    /// Extracts the ids of all named concepts referenced anywhere in an
    /// axiom expression, excluding properties. Intended for validation.
    pub fn ids_of_concepts_named_in_axiom(
        &self,
        axiom_expression: &str,
    ) -> ConversionResult<HashSet<SctId>> {
        let axiom = self.deserialise(axiom_expression)?;
        axiom
            .signature()
            .iter()
            .filter(|entity| resolver::is_named_concept(entity))
            .map(|entity| resolver::concept_id_of(entity.iri()))
            .collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn deserialise(&self, axiom_expression: &str) -> ConversionResult<OwlAxiom> {
        snomed_owl::parse(axiom_expression).map_err(|source| ConversionError::Deserialisation {
            expression: axiom_expression.to_string(),
            source,
        })
    }

    fn property_subsumption(&self, sub: SctId, sup: SctId) -> AxiomRepresentation {
        AxiomRepresentation::Normal {
            named_concept: sub,
            relationships: Self::single_is_a(sup),
            primitive: true,
        }
    }

    fn single_is_a(parent: SctId) -> RelationshipGroups {
        let mut relationships = RelationshipGroups::new();
        relationships.insert(0, vec![Relationship::new(0, constants::IS_A, parent)]);
        relationships
    }

    /// Reduces an expression to a concept id if and only if it is a bare
    /// named class. Composite expressions reduce to `None` without error.
    fn named_concept_of(expression: &ClassExpression) -> ConversionResult<Option<SctId>> {
        match expression.as_named_class() {
            Some(class) => resolver::concept_id_of(&class.0).map(Some),
            None => Ok(None),
        }
    }

    /// Decomposes a definition expression into relationship groups. The top
    /// level must be an intersection; operands are named classes (IS-A),
    /// concrete value restrictions, ungrouped attributes or role groups.
    fn decompose_intersection(
        &self,
        expression: &ClassExpression,
        group_offset: &mut GroupOffset,
    ) -> ConversionResult<RelationshipGroups> {
        let ClassExpression::ObjectIntersectionOf(operands) = expression else {
            return Err(self.structure_error(
                format!(
                    "expecting ObjectIntersectionOf at first level of expression, got {}",
                    expression.type_name()
                ),
                expression,
            ));
        };

        let mut relationship_groups = RelationshipGroups::new();
        for operand in operands {
            match operand {
                ClassExpression::Class(class) => {
                    // Is-a relationship
                    let parent = resolver::concept_id_of(&class.0)?;
                    relationship_groups
                        .entry(0)
                        .or_default()
                        .push(Relationship::new(0, constants::IS_A, parent));
                }
                ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                    if resolver::is_role_group(property) {
                        let group = group_offset.current();
                        let members = self.role_group_members(filler, group)?;
                        if !members.is_empty() {
                            relationship_groups.entry(group).or_default().extend(members);
                        }
                        group_offset.advance();
                    } else {
                        let relationship = self.extract_relationship(property, filler, 0)?;
                        relationship_groups.entry(0).or_default().push(relationship);
                    }
                }
                ClassExpression::DataHasValue { property, literal } => {
                    let relationship = self.extract_concrete_relationship(property, literal, 0)?;
                    relationship_groups.entry(0).or_default().push(relationship);
                }
                ClassExpression::ObjectIntersectionOf(_) => {
                    return Err(self.structure_error(
                        format!(
                            "expecting Class, ObjectSomeValuesFrom or DataHasValue at second \
                             level of expression, got {}",
                            operand.type_name()
                        ),
                        expression,
                    ));
                }
            }
        }
        Ok(relationship_groups)
    }

    /// Extracts the relationships of one role group from its filler: a
    /// single restriction, a single concrete value, or an intersection of
    /// those two shapes.
    fn role_group_members(
        &self,
        filler: &ClassExpression,
        group: u32,
    ) -> ConversionResult<Vec<Relationship>> {
        match filler {
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                Ok(vec![self.extract_relationship(property, filler, group)?])
            }
            ClassExpression::DataHasValue { property, literal } => {
                Ok(vec![self.extract_concrete_relationship(property, literal, group)?])
            }
            ClassExpression::ObjectIntersectionOf(members) => members
                .iter()
                .map(|member| match member {
                    ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                        self.extract_relationship(property, filler, group)
                    }
                    ClassExpression::DataHasValue { property, literal } => {
                        self.extract_concrete_relationship(property, literal, group)
                    }
                    other => Err(self.structure_error(
                        format!(
                            "expecting ObjectSomeValuesFrom or DataHasValue within \
                             ObjectIntersectionOf as part of role group, got {}",
                            other.type_name()
                        ),
                        other,
                    )),
                })
                .collect(),
            other => Err(self.structure_error(
                format!(
                    "expecting role group to have one of ObjectSomeValuesFrom, DataHasValue \
                     or ObjectIntersectionOf, got {}",
                    other.type_name()
                ),
                other,
            )),
        }
    }

    /// Extracts a relationship from an existential restriction: the property
    /// gives the type, the filler must be a bare named class.
    fn extract_relationship(
        &self,
        property: &snomed_owl::ObjectProperty,
        filler: &ClassExpression,
        group: u32,
    ) -> ConversionResult<Relationship> {
        let type_id = resolver::concept_id_of(&property.0)?;
        let Some(destination_class) = filler.as_named_class() else {
            return Err(self.structure_error(
                format!(
                    "expecting right hand side of ObjectSomeValuesFrom to be type Class, got {}",
                    filler.type_name()
                ),
                filler,
            ));
        };
        let destination = resolver::concept_id_of(&destination_class.0)?;
        Ok(Relationship::new(group, type_id, destination))
    }

    /// Extracts a concrete-value relationship from a `DataHasValue`
    /// restriction. Only decimal, integer and string datatypes are
    /// recognized.
    fn extract_concrete_relationship(
        &self,
        property: &snomed_owl::DataProperty,
        literal: &snomed_owl::Literal,
        group: u32,
    ) -> ConversionResult<Relationship> {
        let type_id = resolver::concept_id_of(&property.0)?;
        let kind = match &literal.datatype {
            snomed_owl::Datatype::XsdDecimal => ConcreteValueKind::Decimal,
            snomed_owl::Datatype::XsdInteger => ConcreteValueKind::Integer,
            snomed_owl::Datatype::XsdString => ConcreteValueKind::String,
            snomed_owl::Datatype::Other(datatype) => {
                return Err(ConversionError::UnexpectedStructure {
                    message: format!(
                        "unsupported datatype '{}', expecting xsd:decimal, xsd:integer \
                         or xsd:string",
                        datatype
                    ),
                    expression: literal.to_string(),
                });
            }
        };
        Ok(Relationship::concrete(
            group,
            type_id,
            ConcreteValue { kind, value: literal.value.clone() },
        ))
    }

    fn structure_error(&self, message: String, expression: &ClassExpression) -> ConversionError {
        ConversionError::UnexpectedStructure {
            message,
            expression: normalize_rendered_axiom(&expression.to_string()),
        }
    }
}

/// Builder for [`AxiomConverter`].
#[derive(Debug, Clone, Default)]
pub struct AxiomConverterBuilder {
    ungrouped_attributes: HashSet<SctId>,
    object_attributes: Option<HashSet<SctId>>,
    data_attributes: Option<HashSet<SctId>>,
    annotation_attributes: Option<HashSet<SctId>>,
}

impl AxiomConverterBuilder {
    /// Sets the attribute types allowed outside role groups (MRCM attribute
    /// domain members with group 0).
    pub fn with_ungrouped_attributes(mut self, ungrouped_attributes: HashSet<SctId>) -> Self {
        self.ungrouped_attributes = ungrouped_attributes;
        self
    }

    /// Enables `SubObjectPropertyOf` composition for the given attribute
    /// concepts (descendants of 762705008 |Concept model object attribute|).
    pub fn with_object_attributes(mut self, object_attributes: HashSet<SctId>) -> Self {
        self.object_attributes = Some(object_attributes);
        self
    }

    /// Enables `SubDataPropertyOf` composition for the given attribute
    /// concepts (descendants of 762706009 |Concept model data attribute|).
    pub fn with_data_attributes(mut self, data_attributes: HashSet<SctId>) -> Self {
        self.data_attributes = Some(data_attributes);
        self
    }

    /// Enables `SubAnnotationPropertyOf` composition for the given attribute
    /// concepts (descendants of 1295447006 |Annotation attribute|).
    pub fn with_annotation_attributes(mut self, annotation_attributes: HashSet<SctId>) -> Self {
        self.annotation_attributes = Some(annotation_attributes);
        self
    }

    /// Builds the converter.
    pub fn build(self) -> AxiomConverter {
        AxiomConverter {
            builder: AxiomBuilder::new(self.ungrouped_attributes),
            object_attributes: self.object_attributes,
            data_attributes: self.data_attributes,
            annotation_attributes: self.annotation_attributes,
        }
    }
}
