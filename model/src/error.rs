//! Construction errors.

use thiserror::Error;

use crate::axiom::AxiomType;

/// Errors raised when an axiom cannot be constructed.
///
/// Every other operation on a constructed axiom is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The n-ary axiom has fewer distinct class expressions than the factory
    /// requires.
    #[error("{axiom_type} requires at least {required} distinct class expressions, found {found}")]
    TooFewClassExpressions {
        /// Kind of axiom being built.
        axiom_type: AxiomType,
        /// Configured minimum.
        required: usize,
        /// Distinct expressions supplied.
        found: usize,
    },
}

/// Result type for axiom construction.
pub type Result<T> = std::result::Result<T, Error>;
