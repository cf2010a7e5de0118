//! The data factory: validated construction and interning of axioms.
//!
//! Every axiom is created here. With interning enabled, axioms of equal
//! content (operands *and* annotations) share one allocation. The intern
//! tables hold weak references, so an axiom is dropped once nothing outside
//! the factory refers to it. Stale entries are swept as the tables grow;
//! [`DataFactory::purge`] sweeps them eagerly.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::annotation::{Annotation, Annotations};
use crate::axiom::{
    AxiomType, DisjointClassesAxiom, DisjointClassesData, EquivalentClassesAxiom,
    EquivalentClassesData, SubClassOfAxiom, SubClassOfData,
};
use crate::class_expr::ClassExpression;
use crate::config::FactoryConfig;
use crate::error::{Error, Result};
use crate::iri::Iri;

type NaryKey = (BTreeSet<ClassExpression>, Annotations);
type SubClassKey = (ClassExpression, ClassExpression, Annotations);

/// Entry count below which a table is never swept.
const MIN_SWEEP: usize = 64;

#[derive(Debug)]
struct Entries<K, T> {
    map: HashMap<K, Weak<T>>,
    // Sweep dead entries once the map grows past this size.
    sweep_at: usize,
}

impl<K: Eq + Hash, T> Entries<K, T> {
    fn sweep(&mut self) -> usize {
        let before = self.map.len();
        self.map.retain(|_, w| w.strong_count() > 0);
        self.sweep_at = (2 * self.map.len()).max(MIN_SWEEP);
        before - self.map.len()
    }
}

/// A table mapping content keys to live shared values.
///
/// Dead entries are swept on the miss path whenever the table has doubled
/// since the last sweep, so its size stays proportional to the number of
/// live values.
#[derive(Debug)]
struct InternTable<K, T> {
    entries: Mutex<Entries<K, T>>,
}

impl<K: Eq + Hash + Clone, T> InternTable<K, T> {
    fn new() -> Self {
        Self {
            entries: Mutex::new(Entries {
                map: HashMap::new(),
                sweep_at: MIN_SWEEP,
            }),
        }
    }

    /// Returns the live value for `key`, creating it with `make` if absent
    /// or already dropped.
    fn intern(&self, key: K, make: impl FnOnce(K) -> T) -> Arc<T> {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.map.get(&key).and_then(Weak::upgrade) {
            tracing::trace!("intern hit");
            return existing;
        }
        if entries.map.len() >= entries.sweep_at {
            let removed = entries.sweep();
            tracing::trace!(removed, remaining = entries.map.len(), "swept intern table");
        }
        tracing::trace!(entries = entries.map.len(), "intern miss");
        let value = Arc::new(make(key.clone()));
        entries.map.insert(key, Arc::downgrade(&value));
        value
    }

    fn live_len(&self) -> usize {
        self.entries
            .lock()
            .map
            .values()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    #[cfg(test)]
    fn raw_len(&self) -> usize {
        self.entries.lock().map.len()
    }

    fn purge(&self) -> usize {
        self.entries.lock().sweep()
    }
}

/// Constructs and interns class axioms.
///
/// The factory is `Send + Sync` and is passed explicitly to every derivation
/// that produces new axioms.
#[derive(Debug)]
pub struct DataFactory {
    config: FactoryConfig,
    equivalent: InternTable<NaryKey, EquivalentClassesData>,
    disjoint: InternTable<NaryKey, DisjointClassesData>,
    subclass: InternTable<SubClassKey, SubClassOfData>,
}

impl Default for DataFactory {
    fn default() -> Self {
        Self::new(FactoryConfig::default())
    }
}

impl DataFactory {
    /// Creates a factory with the given configuration.
    #[must_use]
    pub fn new(config: FactoryConfig) -> Self {
        Self {
            config,
            equivalent: InternTable::new(),
            disjoint: InternTable::new(),
            subclass: InternTable::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Returns an atomic class expression for `iri`.
    #[must_use]
    pub fn class(&self, iri: impl Into<Iri>) -> ClassExpression {
        ClassExpression::class(iri)
    }

    /// Returns `owl:Thing`.
    #[must_use]
    pub fn owl_thing(&self) -> ClassExpression {
        ClassExpression::thing()
    }

    /// Returns `owl:Nothing`.
    #[must_use]
    pub fn owl_nothing(&self) -> ClassExpression {
        ClassExpression::nothing()
    }

    /// Builds `EquivalentClasses` over the distinct members of `expressions`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewClassExpressions`] if fewer than
    /// [`FactoryConfig::min_class_expressions`] distinct expressions remain
    /// after duplicates collapse.
    pub fn equivalent_classes(
        &self,
        expressions: impl IntoIterator<Item = ClassExpression>,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Result<EquivalentClassesAxiom> {
        let expressions: BTreeSet<ClassExpression> = expressions.into_iter().collect();
        self.check_arity(AxiomType::EquivalentClasses, &expressions)?;
        Ok(self.intern_equivalent_classes(expressions, annotations.into_iter().collect()))
    }

    /// Builds `DisjointClasses` over the distinct members of `expressions`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewClassExpressions`] under the same rule as
    /// [`DataFactory::equivalent_classes`].
    pub fn disjoint_classes(
        &self,
        expressions: impl IntoIterator<Item = ClassExpression>,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Result<DisjointClassesAxiom> {
        let expressions: BTreeSet<ClassExpression> = expressions.into_iter().collect();
        self.check_arity(AxiomType::DisjointClasses, &expressions)?;
        Ok(self.intern_disjoint_classes(expressions, annotations.into_iter().collect()))
    }

    /// Builds `SubClassOf(sub_class super_class)`.
    #[must_use]
    pub fn subclass_of(
        &self,
        sub_class: ClassExpression,
        super_class: ClassExpression,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> SubClassOfAxiom {
        let key = (sub_class, super_class, annotations.into_iter().collect());
        let data = self.intern(&self.subclass, key, |(sub, sup, anns)| {
            SubClassOfData::new(sub, sup, anns)
        });
        SubClassOfAxiom::from_data(data)
    }

    /// Number of interned axioms still referenced outside the factory.
    #[must_use]
    pub fn interned_len(&self) -> usize {
        self.equivalent.live_len() + self.disjoint.live_len() + self.subclass.live_len()
    }

    /// Drops intern entries whose axioms are gone. Returns how many were
    /// removed.
    pub fn purge(&self) -> usize {
        let removed = self.equivalent.purge() + self.disjoint.purge() + self.subclass.purge();
        tracing::debug!(removed, "purged intern tables");
        removed
    }

    // Derivations reach these directly: their operands are subsets of an
    // already validated axiom, so the arity minimum does not apply.
    pub(crate) fn intern_equivalent_classes(
        &self,
        expressions: BTreeSet<ClassExpression>,
        annotations: Annotations,
    ) -> EquivalentClassesAxiom {
        let data = self.intern(&self.equivalent, (expressions, annotations), |(e, a)| {
            EquivalentClassesData::new(e, a)
        });
        EquivalentClassesAxiom::from_data(data)
    }

    pub(crate) fn intern_disjoint_classes(
        &self,
        expressions: BTreeSet<ClassExpression>,
        annotations: Annotations,
    ) -> DisjointClassesAxiom {
        let data = self.intern(&self.disjoint, (expressions, annotations), |(e, a)| {
            DisjointClassesData::new(e, a)
        });
        DisjointClassesAxiom::from_data(data)
    }

    fn intern<K: Eq + Hash + Clone, T>(
        &self,
        table: &InternTable<K, T>,
        key: K,
        make: impl FnOnce(K) -> T,
    ) -> Arc<T> {
        if self.config.intern {
            table.intern(key, make)
        } else {
            Arc::new(make(key))
        }
    }

    fn check_arity(&self, axiom_type: AxiomType, expressions: &BTreeSet<ClassExpression>) -> Result<()> {
        // n-ary axioms never have an empty operand set.
        let required = self.config.min_class_expressions.max(1);
        if expressions.len() < required {
            tracing::debug!(
                %axiom_type,
                required,
                found = expressions.len(),
                "rejected n-ary class axiom"
            );
            return Err(Error::TooFewClassExpressions {
                axiom_type,
                required,
                found: expressions.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::NaryClassAxiom;

    const A: &str = "http://example.org/A";
    const B: &str = "http://example.org/B";

    #[test]
    fn duplicates_collapse_before_validation() {
        let df = DataFactory::default();
        let err = df
            .equivalent_classes([df.class(A), df.class(A)], Annotations::new())
            .unwrap_err();
        assert_eq!(
            err,
            Error::TooFewClassExpressions {
                axiom_type: AxiomType::EquivalentClasses,
                required: 2,
                found: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "EquivalentClasses requires at least 2 distinct class expressions, found 1"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let df = DataFactory::default();
        assert!(df.disjoint_classes(Vec::new(), Annotations::new()).is_err());
    }

    #[test]
    fn degenerate_axioms_when_configured() {
        let df = DataFactory::new(FactoryConfig {
            min_class_expressions: 1,
            intern: true,
        });
        let ax = df
            .equivalent_classes([df.class(A)], Annotations::new())
            .expect("single operand allowed");
        assert_eq!(ax.class_expressions().len(), 1);
        assert!(ax.as_pairwise_axioms(&df).is_empty());
        assert!(ax.as_subclass_of_axioms(&df).is_empty());
    }

    #[test]
    fn equal_content_shares_allocation() {
        let df = DataFactory::default();
        let first = df
            .equivalent_classes([df.class(A), df.class(B)], Annotations::new())
            .expect("valid");
        let second = df
            .equivalent_classes([df.class(B), df.class(A)], Annotations::new())
            .expect("valid");
        assert!(first.ptr_eq(&second));
        assert_eq!(df.interned_len(), 1);
    }

    #[test]
    fn interning_can_be_disabled() {
        let df = DataFactory::new(FactoryConfig {
            intern: false,
            ..FactoryConfig::default()
        });
        let first = df
            .equivalent_classes([df.class(A), df.class(B)], Annotations::new())
            .expect("valid");
        let second = df
            .equivalent_classes([df.class(A), df.class(B)], Annotations::new())
            .expect("valid");
        assert!(!first.ptr_eq(&second));
        assert_eq!(first, second);
        assert_eq!(df.interned_len(), 0);
    }

    #[test]
    fn dropped_axioms_are_purged() {
        let df = DataFactory::default();
        let ax = df.subclass_of(df.class(A), df.class(B), Annotations::new());
        assert_eq!(df.interned_len(), 1);
        drop(ax);
        assert_eq!(df.interned_len(), 0);
        assert_eq!(df.purge(), 1);
        assert_eq!(df.purge(), 0);
    }

    #[test]
    fn dead_entries_are_swept_without_purge() {
        let df = DataFactory::default();
        for i in 0..1000 {
            let ax = df
                .equivalent_classes(
                    [df.class(format!("http://example.org/A{i}")), df.class(B)],
                    Annotations::new(),
                )
                .expect("valid");
            drop(ax);
        }
        assert_eq!(df.interned_len(), 0);
        assert!(df.equivalent.raw_len() <= MIN_SWEEP);
    }

    #[test]
    fn sweeping_keeps_live_entries() {
        let df = DataFactory::default();
        let kept: Vec<_> = (0..100)
            .map(|i| {
                let sub = df.class(format!("http://example.org/A{i}"));
                df.subclass_of(sub, df.class(B), Annotations::new())
            })
            .collect();
        for i in 0..1000 {
            let sup = df.class(format!("http://example.org/B{i}"));
            drop(df.subclass_of(df.class(A), sup, Annotations::new()));
        }
        assert_eq!(df.interned_len(), 100);
        assert!(df.subclass.raw_len() <= 2 * MIN_SWEEP + 100);
        let again = df.subclass_of(
            df.class("http://example.org/A7"),
            df.class(B),
            Annotations::new(),
        );
        assert!(again.ptr_eq(&kept[7]));
    }

    #[test]
    fn zero_minimum_still_rejects_empty_operands() {
        let df = DataFactory::new(FactoryConfig {
            min_class_expressions: 0,
            intern: true,
        });
        let err = df
            .equivalent_classes(Vec::new(), Annotations::new())
            .unwrap_err();
        assert_eq!(
            err,
            Error::TooFewClassExpressions {
                axiom_type: AxiomType::EquivalentClasses,
                required: 1,
                found: 0,
            }
        );
        assert!(df.disjoint_classes(Vec::new(), Annotations::new()).is_err());
        assert!(df.equivalent_classes([df.class(A)], Annotations::new()).is_ok());
    }

    #[test]
    fn factory_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataFactory>();
        assert_send_sync::<EquivalentClassesAxiom>();

        let df = Arc::new(DataFactory::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let df = Arc::clone(&df);
                std::thread::spawn(move || {
                    let ax = df
                        .equivalent_classes([df.class(A), df.class(B)], Annotations::new())
                        .expect("valid");
                    ax.named_classes().len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), 2);
        }
    }
}
