//! `DisjointClasses`.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::annotation::{merge_annotations, Annotation, Annotations};
use crate::axiom::{AxiomType, NaryClassAxiom, OwlAxiom};
use crate::class_expr::ClassExpression;
use crate::factory::DataFactory;
use crate::visitor::{AxiomVisitor, AxiomVisitorEx};

#[derive(Debug)]
pub(crate) struct DisjointClassesData {
    class_expressions: BTreeSet<ClassExpression>,
    annotations: Annotations,
}

impl DisjointClassesData {
    pub(crate) fn new(class_expressions: BTreeSet<ClassExpression>, annotations: Annotations) -> Self {
        Self {
            class_expressions,
            annotations,
        }
    }
}

/// `DisjointClasses(c1 .. cn)`: no two operands share an individual.
#[derive(Debug, Clone)]
pub struct DisjointClassesAxiom(Arc<DisjointClassesData>);

impl DisjointClassesAxiom {
    pub(crate) fn from_data(data: Arc<DisjointClassesData>) -> Self {
        Self(data)
    }

    /// Returns true if both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns this axiom without annotations.
    #[must_use]
    pub fn without_annotations(&self, factory: &DataFactory) -> Self {
        if !self.is_annotated() {
            return self.clone();
        }
        factory.intern_disjoint_classes(self.0.class_expressions.clone(), Annotations::new())
    }

    /// Returns this axiom with `extra` merged into its annotations.
    #[must_use]
    pub fn with_annotations(
        &self,
        factory: &DataFactory,
        extra: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        factory.intern_disjoint_classes(
            self.0.class_expressions.clone(),
            merge_annotations(&self.0.annotations, extra),
        )
    }

    /// Decomposes into one binary disjointness per unordered pair of
    /// operands, `n * (n - 1) / 2` in all. Disjointness does not chain, so
    /// every pair is needed.
    #[must_use]
    pub fn as_pairwise_axioms(&self, factory: &DataFactory) -> BTreeSet<DisjointClassesAxiom> {
        let operands = self.class_expressions_as_list();
        let mut result = BTreeSet::new();
        for (i, a) in operands.iter().enumerate() {
            for b in &operands[i + 1..] {
                let pair = [(*a).clone(), (*b).clone()].into_iter().collect();
                result.insert(factory.intern_disjoint_classes(pair, Annotations::new()));
            }
        }
        result
    }
}

impl OwlAxiom for DisjointClassesAxiom {
    fn axiom_type(&self) -> AxiomType {
        AxiomType::DisjointClasses
    }

    fn annotations(&self) -> &Annotations {
        &self.0.annotations
    }

    fn accept(&self, visitor: &mut dyn AxiomVisitor) {
        visitor.visit_disjoint_classes(self);
    }

    fn accept_with<V: AxiomVisitorEx + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_disjoint_classes(self)
    }
}

impl NaryClassAxiom for DisjointClassesAxiom {
    fn class_expressions(&self) -> &BTreeSet<ClassExpression> {
        &self.0.class_expressions
    }
}

impl PartialEq for DisjointClassesAxiom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.class_expressions == other.0.class_expressions
    }
}

impl Eq for DisjointClassesAxiom {}

impl Hash for DisjointClassesAxiom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.class_expressions.hash(state);
    }
}

impl PartialOrd for DisjointClassesAxiom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DisjointClassesAxiom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.class_expressions.cmp(&other.0.class_expressions)
    }
}
