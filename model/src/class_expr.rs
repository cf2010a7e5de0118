//! Class expressions: atomic classes and the object-property constructors.
//!
//! Equality, ordering and hashing are structural and derived, so two
//! expressions built independently from the same parts compare equal and
//! collapse to one element of a [`BTreeSet`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::iri::{iris, Iri};

/// An atomic (named) OWL class, including `owl:Thing` and `owl:Nothing`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwlClass {
    iri: Iri,
}

impl OwlClass {
    /// Creates a class reference from its IRI.
    #[must_use]
    pub fn new(iri: impl Into<Iri>) -> Self {
        Self { iri: iri.into() }
    }

    /// `owl:Thing`.
    #[must_use]
    pub fn thing() -> Self {
        Self::new(iris::OWL_THING)
    }

    /// `owl:Nothing`.
    #[must_use]
    pub fn nothing() -> Self {
        Self::new(iris::OWL_NOTHING)
    }

    /// Returns the class IRI.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.iri
    }

    /// Returns true if this is `owl:Thing`.
    #[must_use]
    pub fn is_owl_thing(&self) -> bool {
        self.iri.as_str() == iris::OWL_THING
    }

    /// Returns true if this is `owl:Nothing`.
    #[must_use]
    pub fn is_owl_nothing(&self) -> bool {
        self.iri.as_str() == iris::OWL_NOTHING
    }
}

impl fmt::Display for OwlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// A formula denoting a set of individuals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    /// A named class (`owl:Thing` and `owl:Nothing` included).
    Class(OwlClass),
    /// Conjunction of the operands.
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    /// Disjunction of the operands.
    ObjectUnionOf(BTreeSet<ClassExpression>),
    /// Complement of the operand.
    ObjectComplementOf(Box<ClassExpression>),
    /// Individuals with at least one `property` successor in `filler`.
    ObjectSomeValuesFrom {
        /// Object property IRI.
        property: Iri,
        /// Filler expression.
        filler: Box<ClassExpression>,
    },
    /// Individuals whose `property` successors all lie in `filler`.
    ObjectAllValuesFrom {
        /// Object property IRI.
        property: Iri,
        /// Filler expression.
        filler: Box<ClassExpression>,
    },
}

impl ClassExpression {
    /// Shorthand for an atomic class expression.
    #[must_use]
    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::Class(OwlClass::new(iri))
    }

    /// The Top constant, `owl:Thing`.
    #[must_use]
    pub fn thing() -> Self {
        Self::Class(OwlClass::thing())
    }

    /// The Bottom constant, `owl:Nothing`.
    #[must_use]
    pub fn nothing() -> Self {
        Self::Class(OwlClass::nothing())
    }

    /// Builds an intersection of the given operands.
    #[must_use]
    pub fn intersection_of(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(operands.into_iter().collect())
    }

    /// Builds a union of the given operands.
    #[must_use]
    pub fn union_of(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectUnionOf(operands.into_iter().collect())
    }

    /// Builds the complement of `operand`.
    #[must_use]
    pub fn complement_of(operand: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(operand))
    }

    /// Builds an existential restriction.
    #[must_use]
    pub fn some_values_from(property: impl Into<Iri>, filler: ClassExpression) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Builds a universal restriction.
    #[must_use]
    pub fn all_values_from(property: impl Into<Iri>, filler: ClassExpression) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Returns true if this expression is `owl:Thing`.
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, Self::Class(c) if c.is_owl_thing())
    }

    /// Returns true if this expression is `owl:Nothing`.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        matches!(self, Self::Class(c) if c.is_owl_nothing())
    }

    /// Returns true for atomic classes (not anonymous). Top and Bottom are
    /// atomic.
    #[must_use]
    pub fn is_atomic_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns true for anonymous (composite) expressions.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        !self.is_atomic_class()
    }

    /// Returns true for atomic classes other than Top and Bottom.
    #[must_use]
    pub fn is_named_class(&self) -> bool {
        matches!(self, Self::Class(c) if !c.is_owl_thing() && !c.is_owl_nothing())
    }

    /// Returns the atomic class, or `None` for anonymous expressions.
    #[must_use]
    pub fn as_atomic_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(class: OwlClass) -> Self {
        Self::Class(class)
    }
}

/// Renders OWL functional syntax.
impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectIntersectionOf(ops) => write_operands(f, "ObjectIntersectionOf", ops),
            Self::ObjectUnionOf(ops) => write_operands(f, "ObjectUnionOf", ops),
            Self::ObjectComplementOf(op) => write!(f, "ObjectComplementOf({op})"),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom(<{property}> {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom(<{property}> {filler})")
            }
        }
    }
}

fn write_operands(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    operands: &BTreeSet<ClassExpression>,
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, op) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{op}")?;
    }
    f.write_str(")")
}
