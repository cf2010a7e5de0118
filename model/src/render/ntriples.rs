//! N-Triples serializer for class axioms.
//!
//! Follows the OWL 2 mapping to RDF graphs. Anonymous class expressions
//! become blank nodes, operand lists become `rdf:List`s, and annotated
//! axioms are reified through `owl:Axiom`. An n-ary equivalence is written as
//! its pairwise chain of `owl:equivalentClass` triples; a single-operand
//! equivalence as `c owl:equivalentClass c`.

use crate::annotation::{escape_literal, AnnotationValue, Annotations};
use crate::axiom::{
    Axiom, DisjointClassesAxiom, EquivalentClassesAxiom, NaryClassAxiom, OwlAxiom,
    SubClassOfAxiom,
};
use crate::class_expr::ClassExpression;
use crate::factory::DataFactory;
use crate::iri::iris::{
    OWL_ALL_DISJOINT_CLASSES, OWL_ALL_VALUES_FROM, OWL_ANNOTATED_PROPERTY, OWL_ANNOTATED_SOURCE,
    OWL_ANNOTATED_TARGET, OWL_AXIOM, OWL_CLASS, OWL_COMPLEMENT_OF, OWL_DISJOINT_WITH,
    OWL_EQUIVALENT_CLASS, OWL_INTERSECTION_OF, OWL_MEMBERS, OWL_ON_PROPERTY, OWL_RESTRICTION,
    OWL_SOME_VALUES_FROM, OWL_UNION_OF, RDFS_SUBCLASS_OF, RDF_FIRST, RDF_NIL,
    RDF_REST, RDF_TYPE, XSD_STRING,
};
use crate::visitor::AxiomVisitor;

/// Serializes `axioms` to an N-Triples string.
///
/// `factory` supplies the pairwise decomposition of n-ary equivalences.
#[must_use]
pub fn to_ntriples(factory: &DataFactory, axioms: &[Axiom]) -> String {
    let mut writer = NTriplesWriter::new(factory);
    for axiom in axioms {
        axiom.accept(&mut writer);
    }
    writer.finish()
}

/// Accumulates triples for every visited axiom.
#[derive(Debug)]
pub struct NTriplesWriter<'f> {
    factory: &'f DataFactory,
    out: String,
    next_blank: usize,
}

impl<'f> NTriplesWriter<'f> {
    /// Creates an empty writer.
    #[must_use]
    pub fn new(factory: &'f DataFactory) -> Self {
        Self {
            factory,
            out: String::with_capacity(4 * 1024),
            next_blank: 0,
        }
    }

    /// Returns the accumulated document.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn blank(&mut self) -> String {
        let node = format!("_:b{}", self.next_blank);
        self.next_blank += 1;
        node
    }

    fn triple(&mut self, subj: &str, pred: &str, obj: &str) {
        self.out.push_str(subj);
        self.out.push_str(" <");
        self.out.push_str(pred);
        self.out.push_str("> ");
        self.out.push_str(obj);
        self.out.push_str(" .\n");
    }

    /// Writes the triples describing `ce` and returns the term denoting it.
    fn class_expression(&mut self, ce: &ClassExpression) -> String {
        match ce {
            ClassExpression::Class(c) => iri(c.iri().as_str()),
            ClassExpression::ObjectIntersectionOf(ops) => {
                self.boolean_class(OWL_INTERSECTION_OF, ops.iter())
            }
            ClassExpression::ObjectUnionOf(ops) => self.boolean_class(OWL_UNION_OF, ops.iter()),
            ClassExpression::ObjectComplementOf(op) => {
                let node = self.blank();
                let target = self.class_expression(op);
                self.triple(&node, RDF_TYPE, &iri(OWL_CLASS));
                self.triple(&node, OWL_COMPLEMENT_OF, &target);
                node
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                self.restriction(property.as_str(), OWL_SOME_VALUES_FROM, filler)
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                self.restriction(property.as_str(), OWL_ALL_VALUES_FROM, filler)
            }
        }
    }

    fn boolean_class<'a>(
        &mut self,
        connective: &str,
        operands: impl Iterator<Item = &'a ClassExpression>,
    ) -> String {
        let node = self.blank();
        let list = self.list(operands);
        self.triple(&node, RDF_TYPE, &iri(OWL_CLASS));
        self.triple(&node, connective, &list);
        node
    }

    fn restriction(&mut self, property: &str, pred: &str, filler: &ClassExpression) -> String {
        let node = self.blank();
        let target = self.class_expression(filler);
        self.triple(&node, RDF_TYPE, &iri(OWL_RESTRICTION));
        self.triple(&node, OWL_ON_PROPERTY, &iri(property));
        self.triple(&node, pred, &target);
        node
    }

    fn list<'a>(&mut self, items: impl Iterator<Item = &'a ClassExpression>) -> String {
        let terms: Vec<String> = items.map(|ce| self.class_expression(ce)).collect();
        let mut rest = iri(RDF_NIL);
        for term in terms.iter().rev() {
            let cell = self.blank();
            self.triple(&cell, RDF_FIRST, term);
            self.triple(&cell, RDF_REST, &rest);
            rest = cell;
        }
        rest
    }

    /// Writes `subj pred obj`, reified with `annotations` when non-empty.
    fn axiom_triple(&mut self, subj: &str, pred: &str, obj: &str, annotations: &Annotations) {
        self.triple(subj, pred, obj);
        if annotations.is_empty() {
            return;
        }
        let node = self.blank();
        self.triple(&node, RDF_TYPE, &iri(OWL_AXIOM));
        self.triple(&node, OWL_ANNOTATED_SOURCE, subj);
        self.triple(&node, OWL_ANNOTATED_PROPERTY, &iri(pred));
        self.triple(&node, OWL_ANNOTATED_TARGET, obj);
        self.annotations(&node, annotations);
    }

    fn annotations(&mut self, subj: &str, annotations: &Annotations) {
        for ann in annotations {
            let value = match &ann.value {
                AnnotationValue::Iri(target) => iri(target.as_str()),
                AnnotationValue::Literal { value, lang: None } => lit(value),
                AnnotationValue::Literal {
                    value,
                    lang: Some(lang),
                } => lang_lit(value, lang),
            };
            self.triple(subj, ann.property.as_str(), &value);
        }
    }
}

impl AxiomVisitor for NTriplesWriter<'_> {
    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom) {
        let sub = self.class_expression(axiom.sub_class());
        let sup = self.class_expression(axiom.super_class());
        self.axiom_triple(&sub, RDFS_SUBCLASS_OF, &sup, axiom.annotations());
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom) {
        // A single-operand axiom is the reflexive equivalence.
        if let [only] = axiom.class_expressions_as_list().as_slice() {
            let term = self.class_expression(only);
            self.axiom_triple(&term, OWL_EQUIVALENT_CLASS, &term, axiom.annotations());
            return;
        }
        for pair in axiom.as_pairwise_axioms(self.factory) {
            let operands = pair.class_expressions_as_list();
            if let [first, second] = operands.as_slice() {
                let a = self.class_expression(first);
                let b = self.class_expression(second);
                self.axiom_triple(&a, OWL_EQUIVALENT_CLASS, &b, axiom.annotations());
            }
        }
    }

    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom) {
        let operands = axiom.class_expressions_as_list();
        if let [first, second] = operands.as_slice() {
            let a = self.class_expression(first);
            let b = self.class_expression(second);
            self.axiom_triple(&a, OWL_DISJOINT_WITH, &b, axiom.annotations());
            return;
        }
        let node = self.blank();
        let members = self.list(operands.into_iter());
        self.triple(&node, RDF_TYPE, &iri(OWL_ALL_DISJOINT_CLASSES));
        self.triple(&node, OWL_MEMBERS, &members);
        self.annotations(&node, axiom.annotations());
    }
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str) -> String {
    format!("\"{}\"^^<{}>", escape_literal(s), XSD_STRING)
}

fn lang_lit(s: &str, lang: &str) -> String {
    format!("\"{}\"@{}", escape_literal(s), lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::iri::iris::RDFS_COMMENT;

    const A: &str = "http://example.org/A";
    const B: &str = "http://example.org/B";
    const C: &str = "http://example.org/C";

    #[test]
    fn nary_equivalence_is_written_as_chain() {
        let df = DataFactory::default();
        let ax: Axiom = df
            .equivalent_classes([df.class(A), df.class(B), df.class(C)], Annotations::new())
            .expect("valid operands")
            .into();
        let nt = to_ntriples(&df, &[ax]);
        let equivalences: Vec<&str> = nt
            .lines()
            .filter(|l| l.contains(OWL_EQUIVALENT_CLASS))
            .collect();
        assert_eq!(equivalences.len(), 2);
        assert!(nt.contains(&format!("<{A}> <{OWL_EQUIVALENT_CLASS}> <{B}> .")));
        assert!(nt.contains(&format!("<{B}> <{OWL_EQUIVALENT_CLASS}> <{C}> .")));
    }

    #[test]
    fn every_line_ends_with_period() {
        let df = DataFactory::default();
        let axioms: Vec<Axiom> = vec![
            df.subclass_of(
                ClassExpression::intersection_of([df.class(A), df.class(B)]),
                ClassExpression::all_values_from("http://example.org/p", df.class(C)),
                [Annotation::lang_literal(RDFS_COMMENT, "gci", "en")],
            )
            .into(),
            df.disjoint_classes([df.class(A), df.class(B), df.class(C)], Annotations::new())
                .expect("valid operands")
                .into(),
        ];
        let nt = to_ntriples(&df, &axioms);
        assert!(!nt.is_empty());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
        assert!(nt.contains(&format!("<{OWL_AXIOM}>")));
        assert!(nt.contains("\"gci\"@en"));
        assert!(nt.contains(&format!("<{OWL_ALL_DISJOINT_CLASSES}>")));
    }

    #[test]
    fn annotated_binary_disjointness_is_reified() {
        let df = DataFactory::default();
        let ax: Axiom = df
            .disjoint_classes(
                [df.class(A), df.class(B)],
                [Annotation::literal(RDFS_COMMENT, "no overlap")],
            )
            .expect("valid operands")
            .into();
        let nt = to_ntriples(&df, &[ax]);
        assert!(nt.contains(&format!("<{A}> <{OWL_DISJOINT_WITH}> <{B}> .")));
        assert!(nt.contains(&format!("<{OWL_ANNOTATED_SOURCE}> <{A}> .")));
        assert!(nt.contains(&format!(
            "<{RDFS_COMMENT}> \"no overlap\"^^<{XSD_STRING}> ."
        )));
    }

    #[test]
    fn single_operand_equivalence_keeps_annotations() {
        let df = DataFactory::new(crate::FactoryConfig {
            min_class_expressions: 1,
            intern: true,
        });
        let ax: Axiom = df
            .equivalent_classes([df.class(A)], [Annotation::literal(RDFS_COMMENT, "alone")])
            .expect("single operand allowed")
            .into();
        let nt = to_ntriples(&df, &[ax]);
        assert!(nt.contains(&format!("<{A}> <{OWL_EQUIVALENT_CLASS}> <{A}> .")));
        assert!(nt.contains(&format!("<{OWL_ANNOTATED_TARGET}> <{A}> .")));
        assert!(nt.contains("\"alone\""));
    }
}
