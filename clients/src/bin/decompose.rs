//! `owl-decompose` — Reads class axioms from JSON and prints their decompositions.
//!
//! **Usage:**
//! ```
//! owl-decompose <INPUT.json> [--config factory.toml] [--view pairwise|subclass|named|none]
//!               [--format functional|ntriples]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owl_clients::decompose::{render, Format, View};
use owl_clients::document::AxiomDocument;
use owl_clients::logging;
use owl_model::{AxiomCounter, AxiomType, DataFactory, FactoryConfig};

/// Decompose OWL class axioms.
#[derive(Parser)]
#[command(
    name = "owl-decompose",
    about = "Decompose n-ary OWL class axioms into pairwise or subsumption form"
)]
struct Args {
    /// JSON document holding the input axioms.
    input: PathBuf,

    /// TOML file with factory settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decomposition to print.
    #[arg(long, value_enum, default_value = "pairwise")]
    view: View,

    /// Output syntax.
    #[arg(long, value_enum, default_value = "functional")]
    format: Format,
}

fn main() -> Result<()> {
    logging::init("warn");
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FactoryConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FactoryConfig::default(),
    };
    let factory = DataFactory::new(config);

    let document = AxiomDocument::from_path(&args.input)?;
    let axioms = document.build(&factory)?;

    let mut counter = AxiomCounter::new();
    for axiom in &axioms {
        axiom.accept(&mut counter);
    }
    tracing::info!(
        total = counter.total(),
        equivalent = counter.count(AxiomType::EquivalentClasses),
        disjoint = counter.count(AxiomType::DisjointClasses),
        subclass = counter.count(AxiomType::SubClassOf),
        annotated = counter.annotated(),
        "loaded {}",
        args.input.display()
    );

    print!("{}", render(&factory, &axioms, args.view, args.format));
    Ok(())
}
