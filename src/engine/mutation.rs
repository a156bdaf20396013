//! Mutation operators producing one child candidate from one parent.

use crate::schema::MutationKind;

use super::candidate::{Candidate, Origin};
use super::rng::LineageRng;

impl MutationKind {
    /// Produce a scored child of `parent`.
    ///
    /// The parent is never modified. The child's age is carried over from
    /// the parent and finalized later by the search driver.
    pub fn mutate<G, F, S>(
        self,
        parent: &Candidate<G, F>,
        alphabet: &[G],
        score: &mut S,
        rng: &mut LineageRng,
    ) -> Candidate<G, F>
    where
        G: Clone + PartialEq,
        S: FnMut(&[G]) -> F,
    {
        match self {
            MutationKind::Substitution => substitute(parent, alphabet, score, rng),
            MutationKind::Transposition => transpose(parent, score, rng),
        }
    }
}

/// Replace one locus with a symbol guaranteed to differ from its current
/// value: of two distinct draws from the alphabet, the first is used unless
/// it matches the existing symbol.
fn substitute<G, F, S>(
    parent: &Candidate<G, F>,
    alphabet: &[G],
    score: &mut S,
    rng: &mut LineageRng,
) -> Candidate<G, F>
where
    G: Clone + PartialEq,
    S: FnMut(&[G]) -> F,
{
    let mut genes = parent.genes.clone();
    let locus = rng.locus(genes.len());
    let (first, second) = rng.two_symbols(alphabet);
    let replacement = if *first == genes[locus] { second } else { first };
    genes[locus] = replacement.clone();
    let fitness = score(&genes);
    Candidate {
        genes,
        fitness,
        age: parent.age,
        origin: Origin::Substitution,
    }
}

/// Exchange the symbols at two distinct loci. Loci are drawn over the
/// genome's own length, not the alphabet's size; the two can differ.
fn transpose<G, F, S>(
    parent: &Candidate<G, F>,
    score: &mut S,
    rng: &mut LineageRng,
) -> Candidate<G, F>
where
    G: Clone + PartialEq,
    S: FnMut(&[G]) -> F,
{
    let mut genes = parent.genes.clone();
    let (a, b) = rng.two_loci(genes.len());
    genes.swap(a, b);
    let fitness = score(&genes);
    Candidate {
        genes,
        fitness,
        age: parent.age,
        origin: Origin::Transposition,
    }
}
