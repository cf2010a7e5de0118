//! The closed family of class axioms.
//!
//! Every axiom kind is a cheap-to-clone handle around immutable shared data.
//! [`Axiom`] wraps one variant per kind; [`AxiomType`] is the matching tag
//! for filtering without full dispatch.
//!
//! Equality is structural over logical content. Annotations never take part
//! in it: two axioms differing only in annotations are equal, and an
//! [`Axiom`] of one kind never equals an [`Axiom`] of another.

mod disjoint;
mod equivalent;
mod subclass;

use std::collections::BTreeSet;
use std::fmt;

use crate::annotation::Annotations;
use crate::class_expr::ClassExpression;
use crate::visitor::{AxiomVisitor, AxiomVisitorEx};

pub use disjoint::DisjointClassesAxiom;
pub use equivalent::EquivalentClassesAxiom;
pub use subclass::SubClassOfAxiom;

pub(crate) use disjoint::DisjointClassesData;
pub(crate) use equivalent::EquivalentClassesData;
pub(crate) use subclass::SubClassOfData;

/// Stable tag identifying an axiom kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxiomType {
    /// `SubClassOf(sub super)`.
    SubClassOf,
    /// `EquivalentClasses(c1 .. cn)`.
    EquivalentClasses,
    /// `DisjointClasses(c1 .. cn)`.
    DisjointClasses,
}

impl AxiomType {
    /// All axiom kinds in declaration order.
    pub const ALL: [AxiomType; 3] = [
        AxiomType::SubClassOf,
        AxiomType::EquivalentClasses,
        AxiomType::DisjointClasses,
    ];

    /// Returns the functional-syntax name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AxiomType::SubClassOf => "SubClassOf",
            AxiomType::EquivalentClasses => "EquivalentClasses",
            AxiomType::DisjointClasses => "DisjointClasses",
        }
    }

    /// Returns true for kinds over a set of class expressions.
    #[must_use]
    pub fn is_nary(self) -> bool {
        !matches!(self, AxiomType::SubClassOf)
    }
}

impl fmt::Display for AxiomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behaviour shared by every axiom kind.
pub trait OwlAxiom {
    /// Returns the kind tag.
    fn axiom_type(&self) -> AxiomType;

    /// Returns the annotations attached to this axiom.
    fn annotations(&self) -> &Annotations;

    /// Returns true if at least one annotation is attached.
    fn is_annotated(&self) -> bool {
        !self.annotations().is_empty()
    }

    /// Calls back into `visitor` with `self`.
    fn accept(&self, visitor: &mut dyn AxiomVisitor);

    /// Calls back into `visitor` with `self` and returns its result.
    fn accept_with<V: AxiomVisitorEx + ?Sized>(&self, visitor: &mut V) -> V::Output
    where
        Self: Sized;
}

/// Axioms over a set of class expressions.
pub trait NaryClassAxiom: OwlAxiom {
    /// Returns the class expressions, unique by structural equality.
    fn class_expressions(&self) -> &BTreeSet<ClassExpression>;

    /// Returns the class expressions in their fixed enumeration order.
    fn class_expressions_as_list(&self) -> Vec<&ClassExpression> {
        self.class_expressions().iter().collect()
    }

    /// Returns true if `ce` is one of the operands.
    fn contains(&self, ce: &ClassExpression) -> bool {
        self.class_expressions().contains(ce)
    }

    /// Returns the operands with every member of `excluded` removed.
    fn class_expressions_minus(&self, excluded: &[&ClassExpression]) -> BTreeSet<ClassExpression> {
        self.class_expressions()
            .iter()
            .filter(|ce| !excluded.contains(ce))
            .cloned()
            .collect()
    }

    /// Returns true if any operand is `owl:Thing`.
    fn contains_owl_thing(&self) -> bool {
        self.class_expressions().iter().any(ClassExpression::is_top)
    }

    /// Returns true if any operand is `owl:Nothing`.
    fn contains_owl_nothing(&self) -> bool {
        self.class_expressions().iter().any(ClassExpression::is_bottom)
    }
}

/// Any class axiom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axiom {
    /// A subsumption.
    SubClassOf(SubClassOfAxiom),
    /// An equivalence.
    EquivalentClasses(EquivalentClassesAxiom),
    /// A disjointness.
    DisjointClasses(DisjointClassesAxiom),
}

impl Axiom {
    /// Returns the kind tag.
    #[must_use]
    pub fn axiom_type(&self) -> AxiomType {
        match self {
            Axiom::SubClassOf(_) => AxiomType::SubClassOf,
            Axiom::EquivalentClasses(_) => AxiomType::EquivalentClasses,
            Axiom::DisjointClasses(_) => AxiomType::DisjointClasses,
        }
    }

    /// Returns the annotations of the wrapped axiom.
    #[must_use]
    pub fn annotations(&self) -> &Annotations {
        match self {
            Axiom::SubClassOf(ax) => ax.annotations(),
            Axiom::EquivalentClasses(ax) => ax.annotations(),
            Axiom::DisjointClasses(ax) => ax.annotations(),
        }
    }

    /// Dispatches to the matching `visit_*` method.
    pub fn accept(&self, visitor: &mut dyn AxiomVisitor) {
        match self {
            Axiom::SubClassOf(ax) => visitor.visit_subclass_of(ax),
            Axiom::EquivalentClasses(ax) => visitor.visit_equivalent_classes(ax),
            Axiom::DisjointClasses(ax) => visitor.visit_disjoint_classes(ax),
        }
    }

    /// Dispatches to the matching `visit_*` method and returns its result.
    pub fn accept_with<V: AxiomVisitorEx + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Axiom::SubClassOf(ax) => visitor.visit_subclass_of(ax),
            Axiom::EquivalentClasses(ax) => visitor.visit_equivalent_classes(ax),
            Axiom::DisjointClasses(ax) => visitor.visit_disjoint_classes(ax),
        }
    }
}

impl From<SubClassOfAxiom> for Axiom {
    fn from(axiom: SubClassOfAxiom) -> Self {
        Axiom::SubClassOf(axiom)
    }
}

impl From<EquivalentClassesAxiom> for Axiom {
    fn from(axiom: EquivalentClassesAxiom) -> Self {
        Axiom::EquivalentClasses(axiom)
    }
}

impl From<DisjointClassesAxiom> for Axiom {
    fn from(axiom: DisjointClassesAxiom) -> Self {
        Axiom::DisjointClasses(axiom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataFactory;

    #[test]
    fn type_names_are_stable() {
        let names: Vec<&str> = AxiomType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["SubClassOf", "EquivalentClasses", "DisjointClasses"]);
        assert!(!AxiomType::SubClassOf.is_nary());
        assert!(AxiomType::EquivalentClasses.is_nary());
    }

    #[test]
    fn kinds_over_same_operands_are_not_equal() {
        let df = DataFactory::default();
        let ops = [df.class("http://example.org/A"), df.class("http://example.org/B")];
        let equiv: Axiom = df
            .equivalent_classes(ops.clone(), Annotations::new())
            .expect("two operands")
            .into();
        let disjoint: Axiom = df
            .disjoint_classes(ops, Annotations::new())
            .expect("two operands")
            .into();
        assert_eq!(equiv.axiom_type(), AxiomType::EquivalentClasses);
        assert_eq!(disjoint.axiom_type(), AxiomType::DisjointClasses);
        assert_ne!(equiv, disjoint);
    }

    #[test]
    fn class_expressions_minus_drops_excluded() {
        let df = DataFactory::default();
        let a = df.class("http://example.org/A");
        let b = df.class("http://example.org/B");
        let c = df.class("http://example.org/C");
        let ax = df
            .equivalent_classes([a.clone(), b.clone(), c.clone()], Annotations::new())
            .expect("three operands");
        let rest = ax.class_expressions_minus(&[&a]);
        assert_eq!(rest, [b, c].into_iter().collect());
        assert!(ax.contains(&a));
    }
}
