//! IRIs and the standard vocabulary constants.
//!
//! An [`Iri`] is a shared, immutable string. Class expressions and axioms are
//! cloned freely during decomposition, so the text itself is reference-counted
//! rather than copied.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An absolute IRI identifying a class, property or annotation property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Creates an IRI from its full textual form.
    #[must_use]
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Returns the full IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(Arc::from(iri))
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Standard IRI constants used by the model and the renderers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `owl:Thing`, the universal class.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:Nothing`, the empty class.
    pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:Axiom`, the reification type for annotated axioms.
    pub const OWL_AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
    /// `owl:AllDisjointClasses`.
    pub const OWL_ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";

    /// `owl:equivalentClass`.
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:disjointWith`.
    pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    /// `owl:members`.
    pub const OWL_MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
    /// `owl:intersectionOf`.
    pub const OWL_INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// `owl:unionOf`.
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:complementOf`.
    pub const OWL_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:someValuesFrom`.
    pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    /// `owl:allValuesFrom`.
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    /// `owl:annotatedSource`.
    pub const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    /// `owl:annotatedProperty`.
    pub const OWL_ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
    /// `owl:annotatedTarget`.
    pub const OWL_ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_text() {
        let a = Iri::new("http://example.org/A");
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(a, Iri::from("http://example.org/A"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let iri = Iri::new(iris::OWL_THING);
        let json = serde_json::to_string(&iri).expect("serialize");
        assert_eq!(json, format!("\"{}\"", iris::OWL_THING));
        let back: Iri = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, iri);
    }
}
