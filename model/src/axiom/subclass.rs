//! `SubClassOf`, the binary subsumption axiom.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::annotation::{merge_annotations, Annotation, Annotations};
use crate::axiom::{AxiomType, OwlAxiom};
use crate::class_expr::ClassExpression;
use crate::factory::DataFactory;
use crate::visitor::{AxiomVisitor, AxiomVisitorEx};

#[derive(Debug)]
pub(crate) struct SubClassOfData {
    sub_class: ClassExpression,
    super_class: ClassExpression,
    annotations: Annotations,
}

impl SubClassOfData {
    pub(crate) fn new(
        sub_class: ClassExpression,
        super_class: ClassExpression,
        annotations: Annotations,
    ) -> Self {
        Self {
            sub_class,
            super_class,
            annotations,
        }
    }
}

/// `SubClassOf(sub super)`: every individual of `sub` is one of `super`.
#[derive(Debug, Clone)]
pub struct SubClassOfAxiom(Arc<SubClassOfData>);

impl SubClassOfAxiom {
    pub(crate) fn from_data(data: Arc<SubClassOfData>) -> Self {
        Self(data)
    }

    /// The subsumed class expression.
    #[must_use]
    pub fn sub_class(&self) -> &ClassExpression {
        &self.0.sub_class
    }

    /// The subsuming class expression.
    #[must_use]
    pub fn super_class(&self) -> &ClassExpression {
        &self.0.super_class
    }

    /// Returns true for a general concept inclusion (anonymous sub class).
    #[must_use]
    pub fn is_gci(&self) -> bool {
        self.0.sub_class.is_anonymous()
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
        factory.subclass_of(
            self.0.sub_class.clone(),
            self.0.super_class.clone(),
            Annotations::new(),
        )
    }

    /// Returns this axiom with `extra` merged into its annotations.
    #[must_use]
    pub fn with_annotations(
        &self,
        factory: &DataFactory,
        extra: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        factory.subclass_of(
            self.0.sub_class.clone(),
            self.0.super_class.clone(),
            merge_annotations(&self.0.annotations, extra),
        )
    }

    fn key(&self) -> (&ClassExpression, &ClassExpression) {
        (&self.0.sub_class, &self.0.super_class)
    }
}

impl OwlAxiom for SubClassOfAxiom {
    fn axiom_type(&self) -> AxiomType {
        AxiomType::SubClassOf
    }

    fn annotations(&self) -> &Annotations {
        &self.0.annotations
    }

    fn accept(&self, visitor: &mut dyn AxiomVisitor) {
        visitor.visit_subclass_of(self);
    }

    fn accept_with<V: AxiomVisitorEx + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_subclass_of(self)
    }
}

impl PartialEq for SubClassOfAxiom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.key() == other.key()
    }
}

impl Eq for SubClassOfAxiom {}

impl Hash for SubClassOfAxiom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for SubClassOfAxiom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SubClassOfAxiom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
