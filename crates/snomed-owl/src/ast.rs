//! Abstract Syntax Tree types for the SNOMED CT OWL axiom subset.
//!
//! The node set is closed: SNOMED CT logical definitions only ever use the
//! shapes modelled here. Rendering via `Display` produces OWL functional
//! syntax with entities expanded to full IRIs.

use crate::{SctId, SNOMED_IRI_NAMESPACE};

// =============================================================================
// Entities
// =============================================================================

/// An IRI, stored fully expanded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iri(String);

impl Iri {
    /// Creates an IRI from its full textual form.
    pub fn new(iri: impl Into<String>) -> Self {
        Iri(iri.into())
    }

    /// Creates the IRI of a SNOMED CT component.
    pub fn snomed(id: SctId) -> Self {
        Iri(format!("{}{}", SNOMED_IRI_NAMESPACE, id))
    }

    /// Returns the full IRI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the SNOMED CT identifier this IRI names, if it lies in the
    /// SNOMED CT namespace.
    pub fn sct_id(&self) -> Option<SctId> {
        self.0.strip_prefix(SNOMED_IRI_NAMESPACE)?.parse().ok()
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A named OWL class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwlClass(pub Iri);

/// A named OWL object property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectProperty(pub Iri);

/// A named OWL data property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProperty(pub Iri);

/// A named OWL annotation property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationProperty(pub Iri);

impl std::fmt::Display for OwlClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for DataProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AnnotationProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named entity referenced somewhere in an axiom, tagged with its kind.
///
/// Produced by [`OwlAxiom::signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    /// A named class.
    Class(&'a OwlClass),
    /// A named object property.
    ObjectProperty(&'a ObjectProperty),
    /// A named data property.
    DataProperty(&'a DataProperty),
    /// A named annotation property.
    AnnotationProperty(&'a AnnotationProperty),
}

impl<'a> Entity<'a> {
    /// Returns the IRI of the entity.
    pub fn iri(&self) -> &'a Iri {
        match self {
            Entity::Class(c) => &c.0,
            Entity::ObjectProperty(p) => &p.0,
            Entity::DataProperty(p) => &p.0,
            Entity::AnnotationProperty(p) => &p.0,
        }
    }
}

// =============================================================================
// Literals
// =============================================================================

/// Datatype of an OWL literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datatype {
    /// `xsd:decimal`
    XsdDecimal,
    /// `xsd:integer`
    XsdInteger,
    /// `xsd:string`
    XsdString,
    /// Any other datatype, kept in its textual form.
    Other(String),
}

impl Datatype {
    /// Maps a full datatype IRI to a datatype tag.
    pub fn from_iri(iri: &str) -> Self {
        match iri {
            "http://www.w3.org/2001/XMLSchema#decimal" => Datatype::XsdDecimal,
            "http://www.w3.org/2001/XMLSchema#integer" => Datatype::XsdInteger,
            "http://www.w3.org/2001/XMLSchema#string" => Datatype::XsdString,
            other => Datatype::Other(format!("<{}>", other)),
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datatype::XsdDecimal => write!(f, "xsd:decimal"),
            Datatype::XsdInteger => write!(f, "xsd:integer"),
            Datatype::XsdString => write!(f, "xsd:string"),
            Datatype::Other(s) => write!(f, "{}", s),
        }
    }
}

/// An OWL literal: a textual value with a datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The lexical value, without quotes.
    pub value: String,
    /// The literal's datatype.
    pub datatype: Datatype,
}

impl Literal {
    /// Creates a literal.
    pub fn new(value: impl Into<String>, datatype: Datatype) -> Self {
        Literal { value: value.into(), datatype }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"^^{}", self.value, self.datatype)
    }
}

// =============================================================================
// Class expressions
// =============================================================================

/// A class expression in the SNOMED CT OWL subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassExpression {
    /// A named class: `:404684003`
    Class(OwlClass),

    /// Intersection of class expressions:
    /// `ObjectIntersectionOf(:200 ObjectSomeValuesFrom(...))`
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// Existential restriction: `ObjectSomeValuesFrom(:363698007 :39057004)`
    ObjectSomeValuesFrom {
        /// The property being restricted.
        property: ObjectProperty,
        /// The restriction filler.
        filler: Box<ClassExpression>,
    },

    /// Concrete value restriction: `DataHasValue(:3264475007 "1"^^xsd:integer)`
    DataHasValue {
        /// The data property being restricted.
        property: DataProperty,
        /// The literal value.
        literal: Literal,
    },
}

impl ClassExpression {
    /// Creates a named class expression for a SNOMED CT concept.
    pub fn named(id: SctId) -> Self {
        ClassExpression::Class(OwlClass(Iri::snomed(id)))
    }

    /// Creates an existential restriction.
    pub fn some_values_from(property: ObjectProperty, filler: ClassExpression) -> Self {
        ClassExpression::ObjectSomeValuesFrom { property, filler: Box::new(filler) }
    }

    /// Returns the named class if this expression is a bare named class.
    pub fn as_named_class(&self) -> Option<&OwlClass> {
        match self {
            ClassExpression::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Returns true if this expression is a bare named class.
    pub fn is_named_class(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }

    /// The functional syntax keyword for this expression shape, used in
    /// diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClassExpression::Class(_) => "Class",
            ClassExpression::ObjectIntersectionOf(_) => "ObjectIntersectionOf",
            ClassExpression::ObjectSomeValuesFrom { .. } => "ObjectSomeValuesFrom",
            ClassExpression::DataHasValue { .. } => "DataHasValue",
        }
    }

    /// Appends every named entity referenced in this expression to `out`.
    pub fn collect_signature<'a>(&'a self, out: &mut Vec<Entity<'a>>) {
        match self {
            ClassExpression::Class(class) => out.push(Entity::Class(class)),
            ClassExpression::ObjectIntersectionOf(operands) => {
                for operand in operands {
                    operand.collect_signature(out);
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                out.push(Entity::ObjectProperty(property));
                filler.collect_signature(out);
            }
            ClassExpression::DataHasValue { property, .. } => {
                out.push(Entity::DataProperty(property));
            }
        }
    }
}

impl std::fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassExpression::Class(class) => write!(f, "{}", class),
            ClassExpression::ObjectIntersectionOf(operands) => {
                write!(f, "ObjectIntersectionOf(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                write!(f, ")")
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({} {})", property, filler)
            }
            ClassExpression::DataHasValue { property, literal } => {
                write!(f, "DataHasValue({} {})", property, literal)
            }
        }
    }
}

// =============================================================================
// Axioms
// =============================================================================

/// An OWL axiom in the SNOMED CT subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OwlAxiom {
    /// `SubClassOf(sub super)`
    SubClassOf {
        /// The subclass expression.
        sub_class: ClassExpression,
        /// The superclass expression.
        super_class: ClassExpression,
    },

    /// `EquivalentClasses(e1 e2 ...)` - SNOMED CT always uses exactly two
    /// operands, but the parser preserves whatever it is given so that the
    /// converter can report the cardinality.
    EquivalentClasses(Vec<ClassExpression>),

    /// `SubObjectPropertyOf(sub super)`
    SubObjectPropertyOf {
        /// The sub-property.
        sub_property: ObjectProperty,
        /// The super-property.
        super_property: ObjectProperty,
    },

    /// `SubDataPropertyOf(sub super)`
    SubDataPropertyOf {
        /// The sub-property.
        sub_property: DataProperty,
        /// The super-property.
        super_property: DataProperty,
    },

    /// `SubAnnotationPropertyOf(sub super)`
    SubAnnotationPropertyOf {
        /// The sub-property.
        sub_property: AnnotationProperty,
        /// The super-property.
        super_property: AnnotationProperty,
    },

    /// `TransitiveObjectProperty(p)`
    TransitiveObjectProperty(ObjectProperty),

    /// `ReflexiveObjectProperty(p)`
    ReflexiveObjectProperty(ObjectProperty),

    /// `SubObjectPropertyOf(ObjectPropertyChain(p1 p2 ...) super)`
    SubObjectPropertyChainOf {
        /// The chained properties.
        chain: Vec<ObjectProperty>,
        /// The super-property implied by the chain.
        super_property: ObjectProperty,
    },
}

impl OwlAxiom {
    /// The functional syntax keyword for this axiom shape, used in
    /// diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            OwlAxiom::SubClassOf { .. } => "SubClassOf",
            OwlAxiom::EquivalentClasses(_) => "EquivalentClasses",
            OwlAxiom::SubObjectPropertyOf { .. } => "SubObjectPropertyOf",
            OwlAxiom::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            OwlAxiom::SubAnnotationPropertyOf { .. } => "SubAnnotationPropertyOf",
            OwlAxiom::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            OwlAxiom::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            OwlAxiom::SubObjectPropertyChainOf { .. } => "SubObjectPropertyChainOf",
        }
    }

    /// Returns true if this is a General Concept Inclusion: a `SubClassOf`
    /// axiom whose left hand side is a composite expression rather than a
    /// named class.
    pub fn is_gci(&self) -> bool {
        matches!(
            self,
            OwlAxiom::SubClassOf { sub_class, .. } if !sub_class.is_named_class()
        )
    }

    /// Returns every named entity referenced anywhere in this axiom.
    pub fn signature(&self) -> Vec<Entity<'_>> {
        let mut entities = Vec::new();
        match self {
            OwlAxiom::SubClassOf { sub_class, super_class } => {
                sub_class.collect_signature(&mut entities);
                super_class.collect_signature(&mut entities);
            }
            OwlAxiom::EquivalentClasses(expressions) => {
                for expression in expressions {
                    expression.collect_signature(&mut entities);
                }
            }
            OwlAxiom::SubObjectPropertyOf { sub_property, super_property } => {
                entities.push(Entity::ObjectProperty(sub_property));
                entities.push(Entity::ObjectProperty(super_property));
            }
            OwlAxiom::SubDataPropertyOf { sub_property, super_property } => {
                entities.push(Entity::DataProperty(sub_property));
                entities.push(Entity::DataProperty(super_property));
            }
            OwlAxiom::SubAnnotationPropertyOf { sub_property, super_property } => {
                entities.push(Entity::AnnotationProperty(sub_property));
                entities.push(Entity::AnnotationProperty(super_property));
            }
            OwlAxiom::TransitiveObjectProperty(property)
            | OwlAxiom::ReflexiveObjectProperty(property) => {
                entities.push(Entity::ObjectProperty(property));
            }
            OwlAxiom::SubObjectPropertyChainOf { chain, super_property } => {
                for property in chain {
                    entities.push(Entity::ObjectProperty(property));
                }
                entities.push(Entity::ObjectProperty(super_property));
            }
        }
        entities
    }
}

impl std::fmt::Display for OwlAxiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwlAxiom::SubClassOf { sub_class, super_class } => {
                write!(f, "SubClassOf({} {})", sub_class, super_class)
            }
            OwlAxiom::EquivalentClasses(expressions) => {
                write!(f, "EquivalentClasses(")?;
                for (i, expression) in expressions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", expression)?;
                }
                write!(f, ")")
            }
            OwlAxiom::SubObjectPropertyOf { sub_property, super_property } => {
                write!(f, "SubObjectPropertyOf({} {})", sub_property, super_property)
            }
            OwlAxiom::SubDataPropertyOf { sub_property, super_property } => {
                write!(f, "SubDataPropertyOf({} {})", sub_property, super_property)
            }
            OwlAxiom::SubAnnotationPropertyOf { sub_property, super_property } => {
                write!(f, "SubAnnotationPropertyOf({} {})", sub_property, super_property)
            }
            OwlAxiom::TransitiveObjectProperty(property) => {
                write!(f, "TransitiveObjectProperty({})", property)
            }
            OwlAxiom::ReflexiveObjectProperty(property) => {
                write!(f, "ReflexiveObjectProperty({})", property)
            }
            OwlAxiom::SubObjectPropertyChainOf { chain, super_property } => {
                write!(f, "SubObjectPropertyOf(ObjectPropertyChain(")?;
                for (i, property) in chain.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", property)?;
                }
                write!(f, ") {})", super_property)
            }
        }
    }
}
