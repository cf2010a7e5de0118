//! Output renderers for class axioms.
//!
//! - **Functional syntax** ([`functional`]) — one line per axiom, as in the
//!   OWL 2 structural specification
//! - **N-Triples** ([`ntriples`]) — the OWL-to-RDF mapping, one triple per line

pub mod functional;
pub mod ntriples;
