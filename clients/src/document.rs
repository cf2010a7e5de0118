//! JSON input documents.
//!
//! ```json
//! {
//!   "equivalent_classes": [
//!     {
//!       "expressions": [{"Class": "http://example.org/A"}, {"Class": "http://example.org/B"}],
//!       "annotations": [{"property": "http://www.w3.org/2000/01/rdf-schema#comment",
//!                        "value": {"Literal": {"value": "synonyms"}}}]
//!     }
//!   ],
//!   "disjoint_classes": [],
//!   "subclass_of": [
//!     {"sub_class": {"Class": "http://example.org/A"}, "super_class": {"Class": "http://example.org/C"}}
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use owl_model::{Annotation, Axiom, ClassExpression, DataFactory};
use serde::Deserialize;

/// An n-ary class axiom entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NaryEntry {
    /// Operands.
    pub expressions: Vec<ClassExpression>,
    /// Annotations, possibly none.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A subsumption entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubClassEntry {
    /// Subsumed expression.
    pub sub_class: ClassExpression,
    /// Subsuming expression.
    pub super_class: ClassExpression,
    /// Annotations, possibly none.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A collection of class axioms as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxiomDocument {
    /// `EquivalentClasses` entries.
    pub equivalent_classes: Vec<NaryEntry>,
    /// `DisjointClasses` entries.
    pub disjoint_classes: Vec<NaryEntry>,
    /// `SubClassOf` entries.
    pub subclass_of: Vec<SubClassEntry>,
}

impl AxiomDocument {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` does not match the document schema.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid axiom document")
    }

    /// Reads and parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Builds every entry through `factory`, in document order by section.
    ///
    /// # Errors
    ///
    /// Returns the first construction failure, naming the offending entry.
    pub fn build(&self, factory: &DataFactory) -> Result<Vec<Axiom>> {
        let mut axioms = Vec::with_capacity(
            self.equivalent_classes.len() + self.disjoint_classes.len() + self.subclass_of.len(),
        );
        for (i, entry) in self.equivalent_classes.iter().enumerate() {
            let axiom = factory
                .equivalent_classes(entry.expressions.iter().cloned(), entry.annotations.iter().cloned())
                .with_context(|| format!("equivalent_classes[{i}]"))?;
            axioms.push(axiom.into());
        }
        for (i, entry) in self.disjoint_classes.iter().enumerate() {
            let axiom = factory
                .disjoint_classes(entry.expressions.iter().cloned(), entry.annotations.iter().cloned())
                .with_context(|| format!("disjoint_classes[{i}]"))?;
            axioms.push(axiom.into());
        }
        for entry in &self.subclass_of {
            let axiom = factory.subclass_of(
                entry.sub_class.clone(),
                entry.super_class.clone(),
                entry.annotations.iter().cloned(),
            );
            axioms.push(axiom.into());
        }
        tracing::debug!(count = axioms.len(), "built axioms from document");
        Ok(axioms)
    }
}
