//! Lineage - Single-lineage evolutionary search.
//!
//! This crate provides a generic hill-climbing search engine that mutates
//! one candidate genome at a time toward a caller-supplied target score,
//! using age-based staleness detection and a simulated-annealing-style
//! acceptance rule to escape local optima. It is deliberately not a
//! population-based genetic algorithm: exactly one lineage advances per run.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and validation for searches
//! - `engine`: Candidates, mutation operators, annealed acceptance, and the
//!   search driver
//!
//! # Example
//!
//! ```rust,no_run
//! use lineage::{Search, SearchConfig};
//!
//! // Score a genome by how many loci carry 'A'.
//! let count_a = |genes: &[char]| genes.iter().filter(|&&g| g == 'A').count();
//!
//! let config = SearchConfig {
//!     genome_length: 5,
//!     random_seed: 42,
//!     ..Default::default()
//! };
//!
//! let search = Search::new(vec!['A', 'T', 'G', 'C'], count_a, 5, config).unwrap();
//! let result = search.run();
//!
//! let genome: String = result.best.genes.iter().collect();
//! println!("{genome} scored {} after {} evaluations",
//!     result.best.fitness, result.stats.evaluations);
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seeded source per search: identical
//! seed, alphabet, scoring function, genome length, and max age produce an
//! identical sequence of emitted bests and an identical final result.

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{Candidate, Improvement, Origin, Search, SearchResult, SearchStats, StopReason};
pub use schema::{ConfigError, MutationKind, SearchConfig};
