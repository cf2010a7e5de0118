//! OWL class axioms encoded as typed Rust values.
//!
//! The `owl-model` crate represents the class-axiom fragment of OWL 2:
//! class expressions, annotations, and the closed family of
//! `SubClassOf` / `EquivalentClasses` / `DisjointClasses` axioms, together
//! with the decomposition laws that rewrite an axiom into equivalent sets of
//! simpler ones.
//!
//! # Entry Point
//!
//! Every axiom is built by a [`DataFactory`], which validates arity and
//! interns equal content:
//!
//! ```
//! use owl_model::{Annotations, DataFactory, NaryClassAxiom};
//!
//! let df = DataFactory::default();
//! let ax = df
//!     .equivalent_classes(
//!         [
//!             df.class("http://example.org/A"),
//!             df.class("http://example.org/B"),
//!             df.owl_thing(),
//!         ],
//!         Annotations::new(),
//!     )
//!     .expect("three distinct operands");
//!
//! assert_eq!(ax.named_classes().len(), 2);
//! assert!(ax.contains_owl_thing());
//! assert_eq!(ax.as_pairwise_axioms(&df).len(), 2);
//! assert_eq!(ax.as_subclass_of_axioms(&df).len(), 6);
//! ```
//!
//! # Rendering
//!
//! ```
//! # use owl_model::{Annotations, Axiom, DataFactory};
//! # let df = DataFactory::default();
//! # let ax: Axiom = df
//! #     .subclass_of(df.class("http://example.org/A"), df.owl_thing(), Annotations::new())
//! #     .into();
//! let functional = owl_model::render::functional::to_functional(&ax);
//! let ntriples = owl_model::render::ntriples::to_ntriples(&df, &[ax]);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotation;
pub mod axiom;
pub mod class_expr;
pub mod config;
pub mod error;
pub mod factory;
pub mod iri;
pub mod render;
pub mod visitor;

pub use annotation::{merge_annotations, Annotation, AnnotationValue, Annotations};
pub use axiom::{
    Axiom, AxiomType, DisjointClassesAxiom, EquivalentClassesAxiom, NaryClassAxiom, OwlAxiom,
    SubClassOfAxiom,
};
pub use class_expr::{ClassExpression, OwlClass};
pub use config::{ConfigError, FactoryConfig};
pub use error::{Error, Result};
pub use factory::DataFactory;
pub use iri::{iris, Iri};
pub use visitor::{AxiomCounter, AxiomVisitor, AxiomVisitorEx};
