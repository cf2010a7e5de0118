//! `EquivalentClasses` and its decompositions.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::annotation::{merge_annotations, Annotation, Annotations};
use crate::axiom::{AxiomType, NaryClassAxiom, OwlAxiom, SubClassOfAxiom};
use crate::class_expr::{ClassExpression, OwlClass};
use crate::factory::DataFactory;
use crate::visitor::{AxiomVisitor, AxiomVisitorEx};

#[derive(Debug)]
pub(crate) struct EquivalentClassesData {
    class_expressions: BTreeSet<ClassExpression>,
    annotations: Annotations,
    named_classes: OnceLock<BTreeSet<OwlClass>>,
}

impl EquivalentClassesData {
    pub(crate) fn new(class_expressions: BTreeSet<ClassExpression>, annotations: Annotations) -> Self {
        Self {
            class_expressions,
            annotations,
            named_classes: OnceLock::new(),
        }
    }
}

/// `EquivalentClasses(c1 .. cn)`: every operand denotes the same set of
/// individuals.
///
/// Built through [`DataFactory::equivalent_classes`]. Cloning shares the
/// underlying data.
#[derive(Debug, Clone)]
pub struct EquivalentClassesAxiom(Arc<EquivalentClassesData>);

impl EquivalentClassesAxiom {
    pub(crate) fn from_data(data: Arc<EquivalentClassesData>) -> Self {
        Self(data)
    }

    /// Returns true if both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns this axiom without annotations.
    ///
    /// An unannotated axiom is returned as-is (same allocation).
    #[must_use]
    pub fn without_annotations(&self, factory: &DataFactory) -> Self {
        if !self.is_annotated() {
            return self.clone();
        }
        factory.intern_equivalent_classes(self.0.class_expressions.clone(), Annotations::new())
    }

    /// Returns an axiom over the same operands whose annotations are the
    /// union of the current ones and `extra`.
    #[must_use]
    pub fn with_annotations(
        &self,
        factory: &DataFactory,
        extra: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        factory.intern_equivalent_classes(
            self.0.class_expressions.clone(),
            merge_annotations(&self.0.annotations, extra),
        )
    }

    /// Decomposes into `n - 1` binary equivalences linking consecutive
    /// operands `e0 ≡ e1, e1 ≡ e2, ..`.
    ///
    /// The chain is a minimal witness set, not the full pairwise closure.
    /// Results carry no annotations.
    #[must_use]
    pub fn as_pairwise_axioms(&self, factory: &DataFactory) -> BTreeSet<EquivalentClassesAxiom> {
        self.class_expressions_as_list()
            .windows(2)
            .map(|pair| {
                let operands = pair.iter().map(|ce| (*ce).clone()).collect();
                factory.intern_equivalent_classes(operands, Annotations::new())
            })
            .collect()
    }

    /// Decomposes into `a ⊑ b` for every ordered pair of distinct operands,
    /// `n * (n - 1)` axioms in all. Results carry no annotations.
    #[must_use]
    pub fn as_subclass_of_axioms(&self, factory: &DataFactory) -> BTreeSet<SubClassOfAxiom> {
        let operands = &self.0.class_expressions;
        let mut result = BTreeSet::new();
        for a in operands {
            for b in operands {
                if a != b {
                    result.insert(factory.subclass_of(a.clone(), b.clone(), Annotations::new()));
                }
            }
        }
        result
    }

    /// Returns true if at least one operand is a named class.
    #[must_use]
    pub fn contains_named_equivalent_class(&self) -> bool {
        !self.named_classes().is_empty()
    }

    /// Returns the operands that are atomic classes other than `owl:Thing`
    /// and `owl:Nothing`.
    ///
    /// Computed on first call and cached.
    #[must_use]
    pub fn named_classes(&self) -> &BTreeSet<OwlClass> {
        self.0.named_classes.get_or_init(|| {
            self.0
                .class_expressions
                .iter()
                .filter(|ce| ce.is_named_class())
                .filter_map(ClassExpression::as_atomic_class)
                .cloned()
                .collect()
        })
    }
}

impl OwlAxiom for EquivalentClassesAxiom {
    fn axiom_type(&self) -> AxiomType {
        AxiomType::EquivalentClasses
    }

    fn annotations(&self) -> &Annotations {
        &self.0.annotations
    }

    fn accept(&self, visitor: &mut dyn AxiomVisitor) {
        visitor.visit_equivalent_classes(self);
    }

    fn accept_with<V: AxiomVisitorEx + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_equivalent_classes(self)
    }
}

impl NaryClassAxiom for EquivalentClassesAxiom {
    fn class_expressions(&self) -> &BTreeSet<ClassExpression> {
        &self.0.class_expressions
    }
}

impl PartialEq for EquivalentClassesAxiom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.class_expressions == other.0.class_expressions
    }
}

impl Eq for EquivalentClassesAxiom {}

impl Hash for EquivalentClassesAxiom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.class_expressions.hash(state);
    }
}

impl PartialOrd for EquivalentClassesAxiom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EquivalentClassesAxiom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.class_expressions.cmp(&other.0.class_expressions)
    }
}
