//! Shared plumbing for the `owl-model` client binaries.
//!
//! - [`document`] — the JSON input format and its conversion to axioms
//! - [`decompose`] — the decomposition views offered on the command line
//! - [`logging`] — `tracing-subscriber` setup

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod decompose;
pub mod document;
pub mod logging;
