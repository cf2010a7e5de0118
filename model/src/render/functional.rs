//! OWL functional-syntax renderer.

use crate::annotation::Annotations;
use crate::axiom::{
    Axiom, DisjointClassesAxiom, EquivalentClassesAxiom, NaryClassAxiom, OwlAxiom,
    SubClassOfAxiom,
};
use crate::visitor::AxiomVisitorEx;

/// Renders each visited axiom as a functional-syntax string.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionalSyntaxRenderer;

impl AxiomVisitorEx for FunctionalSyntaxRenderer {
    type Output = String;

    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom) -> String {
        let mut out = open("SubClassOf", axiom.annotations());
        out.push_str(&axiom.sub_class().to_string());
        out.push(' ');
        out.push_str(&axiom.super_class().to_string());
        out.push(')');
        out
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom) -> String {
        nary("EquivalentClasses", axiom)
    }

    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom) -> String {
        nary("DisjointClasses", axiom)
    }
}

/// Renders one axiom in functional syntax.
#[must_use]
pub fn to_functional(axiom: &Axiom) -> String {
    axiom.accept_with(&mut FunctionalSyntaxRenderer)
}

fn open(name: &str, annotations: &Annotations) -> String {
    let mut out = format!("{name}(");
    for ann in annotations {
        out.push_str(&ann.to_string());
        out.push(' ');
    }
    out
}

fn nary(name: &str, axiom: &impl NaryClassAxiom) -> String {
    let mut out = open(name, axiom.annotations());
    let operands: Vec<String> = axiom
        .class_expressions()
        .iter()
        .map(ToString::to_string)
        .collect();
    out.push_str(&operands.join(" "));
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::iri::iris::RDFS_COMMENT;
    use crate::{ClassExpression, DataFactory};

    #[test]
    fn renders_annotated_equivalence() {
        let df = DataFactory::default();
        let ax: Axiom = df
            .equivalent_classes(
                [
                    df.class("http://example.org/B"),
                    df.class("http://example.org/A"),
                ],
                [Annotation::literal(RDFS_COMMENT, "synonyms")],
            )
            .expect("valid operands")
            .into();
        assert_eq!(
            to_functional(&ax),
            format!(
                "EquivalentClasses(Annotation(<{RDFS_COMMENT}> \"synonyms\") \
                 <http://example.org/A> <http://example.org/B>)"
            )
        );
    }

    #[test]
    fn renders_subclass_with_restriction() {
        let df = DataFactory::default();
        let ax: Axiom = df
            .subclass_of(
                df.class("http://example.org/Parent"),
                ClassExpression::some_values_from(
                    "http://example.org/hasChild",
                    df.owl_thing(),
                ),
                Annotations::new(),
            )
            .into();
        assert_eq!(
            to_functional(&ax),
            "SubClassOf(<http://example.org/Parent> ObjectSomeValuesFrom(\
             <http://example.org/hasChild> <http://www.w3.org/2002/07/owl#Thing>))"
        );
    }
}
