//! Candidate type carried through the search.

use serde::{Deserialize, Serialize};

/// How a candidate came to exist. Informational only; the engine never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Generation 0, drawn directly from the alphabet.
    Seed,
    /// Produced by point substitution.
    Substitution,
    /// Produced by transposition.
    Transposition,
}

/// One genome plus its fitness and age.
///
/// `fitness` is always the value the scoring function returned for exactly
/// these genes; the engine never assigns it independently. `age` counts
/// generations the lineage has survived without a strict improvement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate<G, F> {
    /// Ordered gene sequence; length is constant across one search.
    pub genes: Vec<G>,
    /// Score assigned by the external scoring function.
    pub fitness: F,
    /// Generations survived without producing an improvement.
    pub age: u32,
    /// Operator that produced this candidate.
    pub origin: Origin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serialization() {
        let candidate = Candidate {
            genes: vec!['A', 'T', 'G'],
            fitness: 2u32,
            age: 0,
            origin: Origin::Seed,
        };
        let json = serde_json::to_string(&candidate).unwrap();
        let parsed: Candidate<char, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.genes, candidate.genes);
        assert_eq!(parsed.fitness, candidate.fitness);
        assert_eq!(parsed.origin, Origin::Seed);
    }
}
