//! Double-dispatch processors over the closed axiom family.
//!
//! A processor implements one `visit_*` method per axiom kind and is handed
//! to [`Axiom::accept`](crate::Axiom::accept) or
//! [`OwlAxiom::accept`](crate::OwlAxiom::accept); the axiom calls back the
//! method for its own kind. Adding an axiom kind breaks every processor at
//! compile time.

use std::collections::BTreeMap;

use crate::axiom::{
    AxiomType, DisjointClassesAxiom, EquivalentClassesAxiom, OwlAxiom, SubClassOfAxiom,
};

/// A processor that performs a side effect per axiom.
pub trait AxiomVisitor {
    /// Visits a subsumption.
    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom);
    /// Visits an equivalence.
    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom);
    /// Visits a disjointness.
    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom);
}

/// A processor that produces a value per axiom.
pub trait AxiomVisitorEx {
    /// Value produced for each visited axiom.
    type Output;

    /// Visits a subsumption.
    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom) -> Self::Output;
    /// Visits an equivalence.
    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom) -> Self::Output;
    /// Visits a disjointness.
    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom) -> Self::Output;
}

/// Counts visited axioms per kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AxiomCounter {
    counts: BTreeMap<AxiomType, usize>,
    annotated: usize,
}

impl AxiomCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visited axioms of `axiom_type`.
    #[must_use]
    pub fn count(&self, axiom_type: AxiomType) -> usize {
        self.counts.get(&axiom_type).copied().unwrap_or(0)
    }

    /// Number of visited axioms in total.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of visited axioms carrying annotations.
    #[must_use]
    pub fn annotated(&self) -> usize {
        self.annotated
    }

    fn record(&mut self, axiom: &impl OwlAxiom) {
        *self.counts.entry(axiom.axiom_type()).or_insert(0) += 1;
        if axiom.is_annotated() {
            self.annotated += 1;
        }
    }
}

impl AxiomVisitor for AxiomCounter {
    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom) {
        self.record(axiom);
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom) {
        self.record(axiom);
    }

    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom) {
        self.record(axiom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, Annotations};
    use crate::iri::iris::RDFS_LABEL;
    use crate::{Axiom, DataFactory};

    #[test]
    fn counts_by_kind() {
        let df = DataFactory::default();
        let a = df.class("http://example.org/A");
        let b = df.class("http://example.org/B");
        let c = df.class("http://example.org/C");
        let equiv = df
            .equivalent_classes(
                [a.clone(), b.clone(), c.clone()],
                [Annotation::literal(RDFS_LABEL, "abc")],
            )
            .expect("valid operands");
        let mut axioms: Vec<Axiom> = vec![equiv.clone().into()];
        axioms.extend(equiv.as_subclass_of_axioms(&df).into_iter().map(Axiom::from));
        axioms.push(
            df.disjoint_classes([a, c], Annotations::new())
                .expect("valid operands")
                .into(),
        );

        let mut counter = AxiomCounter::new();
        for axiom in &axioms {
            axiom.accept(&mut counter);
        }
        assert_eq!(counter.count(AxiomType::EquivalentClasses), 1);
        assert_eq!(counter.count(AxiomType::SubClassOf), 6);
        assert_eq!(counter.count(AxiomType::DisjointClasses), 1);
        assert_eq!(counter.total(), 8);
        assert_eq!(counter.annotated(), 1);

        // direct dispatch through the axiom trait reaches the same method
        equiv.accept(&mut counter);
        assert_eq!(counter.count(AxiomType::EquivalentClasses), 2);
    }
}
