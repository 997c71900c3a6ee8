//! Axiom expression parser implementation using nom.
//!
//! Parses the OWL functional syntax subset used in the SNOMED CT OWL Axiom
//! reference set. Entities can be written as full IRIs (`<http://...>`) or
//! in the SNOMED prefix form (`:404684003`); the prefix form is expanded
//! against `http://snomed.info/id/`.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list1,
    sequence::{delimited, preceded},
    IResult,
};

use crate::ast::{
    AnnotationProperty, ClassExpression, DataProperty, Datatype, Iri, Literal, ObjectProperty,
    OwlAxiom, OwlClass,
};
use crate::error::{OwlError, OwlResult};
use crate::SNOMED_IRI_NAMESPACE;

/// Parse an OWL axiom expression string.
///
/// # Examples
///
/// ```rust
/// use snomed_owl::parse;
///
/// let axiom = parse("SubClassOf(:100 :200)").unwrap();
///
/// let axiom = parse(
///     "SubClassOf(:100 ObjectIntersectionOf(:200 \
///      ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:300 :400))))",
/// )
/// .unwrap();
/// ```
pub fn parse(input: &str) -> OwlResult<OwlAxiom> {
    let input = input.trim();
    if input.is_empty() {
        return Err(OwlError::EmptyExpression);
    }

    match all_consuming(delimited(ws, axiom, ws))(input) {
        Ok((_, axiom)) => Ok(axiom),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = input.len() - e.input.len();
            Err(OwlError::ParseError {
                position,
                message: format!("unexpected input at: '{}'", truncate(e.input, 30)),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(OwlError::Incomplete("axiom".to_string())),
    }
}

fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        &s[..max_len]
    }
}

// ============================================================================
// Axioms
// ============================================================================

fn axiom(input: &str) -> IResult<&str, OwlAxiom> {
    alt((
        sub_class_of,
        equivalent_classes,
        sub_object_property_of,
        sub_data_property_of,
        sub_annotation_property_of,
        transitive_object_property,
        reflexive_object_property,
    ))(input)
}

fn sub_class_of(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("SubClassOf")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, sub_class) = class_expression(input)?;
    let (input, _) = mws(input)?;
    let (input, super_class) = class_expression(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::SubClassOf { sub_class, super_class }))
}

fn equivalent_classes(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("EquivalentClasses")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, expressions) = separated_list1(mws, class_expression)(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::EquivalentClasses(expressions)))
}

fn sub_object_property_of(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("SubObjectPropertyOf")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, axiom) = alt((property_chain_body, object_property_pair_body))(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, axiom))
}

fn property_chain_body(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("ObjectPropertyChain")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, chain) = separated_list1(mws, object_property)(input)?;
    let (input, _) = arg_close(input)?;
    let (input, _) = mws(input)?;
    let (input, super_property) = object_property(input)?;
    Ok((input, OwlAxiom::SubObjectPropertyChainOf { chain, super_property }))
}

fn object_property_pair_body(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, sub_property) = object_property(input)?;
    let (input, _) = mws(input)?;
    let (input, super_property) = object_property(input)?;
    Ok((input, OwlAxiom::SubObjectPropertyOf { sub_property, super_property }))
}

fn sub_data_property_of(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("SubDataPropertyOf")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, sub_property) = data_property(input)?;
    let (input, _) = mws(input)?;
    let (input, super_property) = data_property(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::SubDataPropertyOf { sub_property, super_property }))
}

fn sub_annotation_property_of(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("SubAnnotationPropertyOf")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, sub_property) = annotation_property(input)?;
    let (input, _) = mws(input)?;
    let (input, super_property) = annotation_property(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::SubAnnotationPropertyOf { sub_property, super_property }))
}

fn transitive_object_property(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("TransitiveObjectProperty")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, property) = object_property(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::TransitiveObjectProperty(property)))
}

fn reflexive_object_property(input: &str) -> IResult<&str, OwlAxiom> {
    let (input, _) = tag("ReflexiveObjectProperty")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, property) = object_property(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, OwlAxiom::ReflexiveObjectProperty(property)))
}

// ============================================================================
// Class expressions
// ============================================================================

fn class_expression(input: &str) -> IResult<&str, ClassExpression> {
    alt((
        object_intersection_of,
        object_some_values_from,
        data_has_value,
        map(iri, |iri| ClassExpression::Class(OwlClass(iri))),
    ))(input)
}

fn object_intersection_of(input: &str) -> IResult<&str, ClassExpression> {
    let (input, _) = tag("ObjectIntersectionOf")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, operands) = separated_list1(mws, class_expression)(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, ClassExpression::ObjectIntersectionOf(operands)))
}

fn object_some_values_from(input: &str) -> IResult<&str, ClassExpression> {
    let (input, _) = tag("ObjectSomeValuesFrom")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, property) = object_property(input)?;
    let (input, _) = mws(input)?;
    let (input, filler) = class_expression(input)?;
    let (input, _) = arg_close(input)?;
    Ok((
        input,
        ClassExpression::ObjectSomeValuesFrom { property, filler: Box::new(filler) },
    ))
}

fn data_has_value(input: &str) -> IResult<&str, ClassExpression> {
    let (input, _) = tag("DataHasValue")(input)?;
    let (input, _) = arg_open(input)?;
    let (input, property) = data_property(input)?;
    let (input, _) = mws(input)?;
    let (input, literal) = literal(input)?;
    let (input, _) = arg_close(input)?;
    Ok((input, ClassExpression::DataHasValue { property, literal }))
}

// ============================================================================
// Entities and literals
// ============================================================================

fn object_property(input: &str) -> IResult<&str, ObjectProperty> {
    map(iri, ObjectProperty)(input)
}

fn data_property(input: &str) -> IResult<&str, DataProperty> {
    map(iri, DataProperty)(input)
}

fn annotation_property(input: &str) -> IResult<&str, AnnotationProperty> {
    map(iri, AnnotationProperty)(input)
}

fn iri(input: &str) -> IResult<&str, Iri> {
    alt((
        map(full_iri, Iri::new),
        map(preceded(char(':'), take_while1(is_local_name_char)), |local: &str| {
            Iri::new(format!("{}{}", SNOMED_IRI_NAMESPACE, local))
        }),
    ))(input)
}

fn full_iri(input: &str) -> IResult<&str, &str> {
    delimited(char('<'), take_while1(|c| c != '>'), char('>'))(input)
}

fn is_local_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn literal(input: &str) -> IResult<&str, Literal> {
    let (input, lexical_value) =
        delimited(char('"'), take_while(|c| c != '"'), char('"'))(input)?;
    let (input, datatype) = opt(preceded(tag("^^"), datatype))(input)?;
    Ok((
        input,
        Literal {
            value: lexical_value.to_string(),
            // A plain literal carries an implicit string datatype.
            datatype: datatype.unwrap_or(Datatype::XsdString),
        },
    ))
}

fn datatype(input: &str) -> IResult<&str, Datatype> {
    alt((
        value(Datatype::XsdDecimal, tag("xsd:decimal")),
        value(Datatype::XsdInteger, tag("xsd:integer")),
        value(Datatype::XsdString, tag("xsd:string")),
        map(full_iri, Datatype::from_iri),
        map(take_while1(is_datatype_name_char), |name: &str| {
            Datatype::Other(name.to_string())
        }),
    ))(input)
}

fn is_datatype_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ':' || c == '_' || c == '#' || c == '.'
}

// ============================================================================
// Whitespace and punctuation
// ============================================================================

fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

fn mws(input: &str) -> IResult<&str, &str> {
    multispace1(input)
}

fn arg_open(input: &str) -> IResult<&str, ()> {
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = ws(input)?;
    Ok((input, ()))
}

fn arg_close(input: &str) -> IResult<&str, ()> {
    let (input, _) = ws(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, ()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Entity;

    #[test]
    fn test_parse_simple_sub_class_of() {
        let axiom = parse("SubClassOf(:100 :200)").unwrap();
        match axiom {
            OwlAxiom::SubClassOf { sub_class, super_class } => {
                assert_eq!(sub_class.as_named_class().unwrap().0.sct_id(), Some(100));
                assert_eq!(super_class.as_named_class().unwrap().0.sct_id(), Some(200));
            }
            other => panic!("unexpected axiom: {:?}", other),
        }
    }

    #[test]
    fn test_parse_full_iri_form() {
        let axiom = parse(
            "SubClassOf(<http://snomed.info/id/100> <http://snomed.info/id/200>)",
        )
        .unwrap();
        assert_eq!(axiom, parse("SubClassOf(:100 :200)").unwrap());
    }

    #[test]
    fn test_parse_intersection_with_role_group() {
        let axiom = parse(
            "SubClassOf(:100 ObjectIntersectionOf(:200 \
             ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:300 :400))))",
        )
        .unwrap();
        let OwlAxiom::SubClassOf { super_class, .. } = axiom else {
            panic!("expected SubClassOf");
        };
        let ClassExpression::ObjectIntersectionOf(operands) = super_class else {
            panic!("expected ObjectIntersectionOf");
        };
        assert_eq!(operands.len(), 2);
        assert!(operands[0].is_named_class());
        assert!(matches!(operands[1], ClassExpression::ObjectSomeValuesFrom { .. }));
    }

    #[test]
    fn test_parse_equivalent_classes() {
        let axiom = parse(
            "EquivalentClasses(:73211009 ObjectIntersectionOf(:64572001 \
             ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:363698007 :113331007))))",
        )
        .unwrap();
        let OwlAxiom::EquivalentClasses(expressions) = axiom else {
            panic!("expected EquivalentClasses");
        };
        assert_eq!(expressions.len(), 2);
    }

    #[test]
    fn test_parse_data_has_value() {
        let axiom = parse(
            "SubClassOf(:100 ObjectIntersectionOf(:200 DataHasValue(:1142135004 \"1\"^^xsd:integer)))",
        )
        .unwrap();
        let OwlAxiom::SubClassOf { super_class, .. } = axiom else {
            panic!("expected SubClassOf");
        };
        let ClassExpression::ObjectIntersectionOf(operands) = super_class else {
            panic!("expected ObjectIntersectionOf");
        };
        let ClassExpression::DataHasValue { literal, .. } = &operands[1] else {
            panic!("expected DataHasValue");
        };
        assert_eq!(literal.value, "1");
        assert_eq!(literal.datatype, Datatype::XsdInteger);
    }

    #[test]
    fn test_parse_full_iri_datatype() {
        let axiom = parse(
            "SubClassOf(:100 ObjectIntersectionOf(:200 \
             DataHasValue(:1142135004 \"55.5\"^^<http://www.w3.org/2001/XMLSchema#decimal>)))",
        )
        .unwrap();
        let OwlAxiom::SubClassOf { super_class, .. } = axiom else {
            panic!("expected SubClassOf");
        };
        let ClassExpression::ObjectIntersectionOf(operands) = super_class else {
            panic!("expected ObjectIntersectionOf");
        };
        let ClassExpression::DataHasValue { literal, .. } = &operands[1] else {
            panic!("expected DataHasValue");
        };
        assert_eq!(literal.datatype, Datatype::XsdDecimal);
    }

    #[test]
    fn test_parse_unknown_datatype() {
        let axiom = parse(
            "SubClassOf(:100 ObjectIntersectionOf(:200 \
             DataHasValue(:1142135004 \"true\"^^xsd:boolean)))",
        )
        .unwrap();
        let OwlAxiom::SubClassOf { super_class, .. } = axiom else {
            panic!("expected SubClassOf");
        };
        let ClassExpression::ObjectIntersectionOf(operands) = super_class else {
            panic!("expected ObjectIntersectionOf");
        };
        let ClassExpression::DataHasValue { literal, .. } = &operands[1] else {
            panic!("expected DataHasValue");
        };
        assert_eq!(literal.datatype, Datatype::Other("xsd:boolean".to_string()));
    }

    #[test]
    fn test_parse_sub_object_property_of() {
        let axiom = parse("SubObjectPropertyOf(:363698007 :762705008)").unwrap();
        assert!(matches!(axiom, OwlAxiom::SubObjectPropertyOf { .. }));
    }

    #[test]
    fn test_parse_property_chain() {
        let axiom =
            parse("SubObjectPropertyOf(ObjectPropertyChain(:363701004 :738774007) :363701004)")
                .unwrap();
        let OwlAxiom::SubObjectPropertyChainOf { chain, super_property } = axiom else {
            panic!("expected SubObjectPropertyChainOf");
        };
        assert_eq!(chain.len(), 2);
        assert_eq!(super_property.0.sct_id(), Some(363701004));
    }

    #[test]
    fn test_parse_transitive_and_reflexive() {
        assert!(matches!(
            parse("TransitiveObjectProperty(:738774007)").unwrap(),
            OwlAxiom::TransitiveObjectProperty(_)
        ));
        assert!(matches!(
            parse("ReflexiveObjectProperty(:738774007)").unwrap(),
            OwlAxiom::ReflexiveObjectProperty(_)
        ));
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        let text = "SubClassOf(:100 ObjectIntersectionOf(:200 \
                    ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:300 :400))))";
        let axiom = parse(text).unwrap();
        let rendered = axiom.to_string();
        assert_eq!(parse(&rendered).unwrap(), axiom);
    }

    #[test]
    fn test_parse_empty_expression() {
        assert_eq!(parse("   "), Err(OwlError::EmptyExpression));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let result = parse("SubClassOf(:100 :200) extra");
        assert!(matches!(result, Err(OwlError::ParseError { .. })));
    }

    #[test]
    fn test_parse_unknown_axiom_type() {
        let result = parse("DisjointClasses(:100 :200)");
        assert!(matches!(result, Err(OwlError::ParseError { .. })));
    }

    #[test]
    fn test_signature_excludes_duplicate_kinds_correctly() {
        let axiom = parse(
            "SubClassOf(:100 ObjectIntersectionOf(:200 \
             ObjectSomeValuesFrom(:609096000 ObjectSomeValuesFrom(:300 :400))))",
        )
        .unwrap();
        let signature = axiom.signature();
        let classes = signature
            .iter()
            .filter(|entity| matches!(entity, Entity::Class(_)))
            .count();
        let properties = signature
            .iter()
            .filter(|entity| matches!(entity, Entity::ObjectProperty(_)))
            .count();
        assert_eq!(classes, 3);
        assert_eq!(properties, 2);
    }
}
