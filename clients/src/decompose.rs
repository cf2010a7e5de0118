//! Decomposition views over a set of axioms.

use std::collections::BTreeSet;

use clap::ValueEnum;
use owl_model::iris::{OWL_CLASS, RDF_TYPE};
use owl_model::render::functional::to_functional;
use owl_model::render::ntriples::to_ntriples;
use owl_model::{
    Axiom, AxiomVisitorEx, DataFactory, DisjointClassesAxiom, EquivalentClassesAxiom, OwlClass,
    SubClassOfAxiom,
};

/// How each input axiom is rewritten before output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Binary equivalences and disjointnesses.
    Pairwise,
    /// Equivalences as mutual subsumptions.
    Subclass,
    /// Only the named classes asserted equivalent to something.
    Named,
    /// The axioms as given.
    None,
}

/// Output syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// OWL functional syntax, one axiom per line.
    Functional,
    /// N-Triples.
    Ntriples,
}

/// Rewrites one axiom into the axioms of a [`View`].
///
/// [`View::Named`] and [`View::None`] rewrite nothing: every axiom maps to
/// itself. [`render`] prints named classes instead of axioms for
/// [`View::Named`].
#[derive(Debug)]
pub struct Decomposer<'f> {
    factory: &'f DataFactory,
    view: View,
}

impl<'f> Decomposer<'f> {
    /// Creates a decomposer for `view`.
    #[must_use]
    pub fn new(factory: &'f DataFactory, view: View) -> Self {
        Self { factory, view }
    }

    /// Rewrites every axiom in input order.
    ///
    /// Unannotated results equal to an earlier unannotated result are
    /// dropped, since overlapping decompositions repeat them. Annotated
    /// axioms are always kept, so no annotation set is lost.
    #[must_use]
    pub fn apply(&mut self, axioms: &[Axiom]) -> Vec<Axiom> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::with_capacity(axioms.len());
        for axiom in axioms {
            for rewritten in axiom.accept_with(self) {
                if !rewritten.annotations().is_empty() || seen.insert(rewritten.clone()) {
                    out.push(rewritten);
                }
            }
        }
        out
    }
}

impl AxiomVisitorEx for Decomposer<'_> {
    type Output = Vec<Axiom>;

    fn visit_subclass_of(&mut self, axiom: &SubClassOfAxiom) -> Vec<Axiom> {
        vec![axiom.clone().into()]
    }

    fn visit_equivalent_classes(&mut self, axiom: &EquivalentClassesAxiom) -> Vec<Axiom> {
        match self.view {
            View::Pairwise => axiom
                .as_pairwise_axioms(self.factory)
                .into_iter()
                .map(Axiom::from)
                .collect(),
            View::Subclass => axiom
                .as_subclass_of_axioms(self.factory)
                .into_iter()
                .map(Axiom::from)
                .collect(),
            View::Named | View::None => vec![axiom.clone().into()],
        }
    }

    fn visit_disjoint_classes(&mut self, axiom: &DisjointClassesAxiom) -> Vec<Axiom> {
        match self.view {
            View::Pairwise => axiom
                .as_pairwise_axioms(self.factory)
                .into_iter()
                .map(Axiom::from)
                .collect(),
            View::Subclass | View::Named | View::None => vec![axiom.clone().into()],
        }
    }
}

/// Collects the named classes of every equivalence in `axioms`.
#[must_use]
pub fn named_classes(axioms: &[Axiom]) -> BTreeSet<OwlClass> {
    axioms
        .iter()
        .filter_map(|ax| match ax {
            Axiom::EquivalentClasses(eq) => Some(eq.named_classes().iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Renders `axioms` through `view` in `format`.
#[must_use]
pub fn render(factory: &DataFactory, axioms: &[Axiom], view: View, format: Format) -> String {
    if view == View::Named {
        return render_classes(&named_classes(axioms), format);
    }
    let rewritten = if view == View::None {
        axioms.to_vec()
    } else {
        Decomposer::new(factory, view).apply(axioms)
    };
    tracing::debug!(before = axioms.len(), after = rewritten.len(), ?view, "decomposed");
    match format {
        Format::Functional => {
            let mut out = String::new();
            for axiom in &rewritten {
                out.push_str(&to_functional(axiom));
                out.push('\n');
            }
            out
        }
        Format::Ntriples => to_ntriples(factory, &rewritten),
    }
}

fn render_classes(classes: &BTreeSet<OwlClass>, format: Format) -> String {
    let mut out = String::new();
    for class in classes {
        match format {
            Format::Functional => {
                out.push_str(&format!("Declaration(Class({class}))\n"));
            }
            Format::Ntriples => {
                out.push_str(&format!("{class} <{RDF_TYPE}> <{OWL_CLASS}> .\n"));
            }
        }
    }
    out
}
