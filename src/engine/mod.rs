//! Single-lineage search engine.
//!
//! The engine advances exactly one lineage at a time: each generation a
//! mutation operator produces one scored child, and the driver decides
//! whether the child replaces the parent.
//!
//! # Overview
//!
//! - **Candidates** (`candidate`): one genome plus its fitness and age
//! - **Mutation Operators** (`mutation`): substitution and transposition
//! - **Annealed Acceptance** (`anneal`): probabilistic escape from stagnation
//! - **Search Driver** (`search`): the generation state machine, improvement
//!   stream, and top-level run loop
//!
//! # Example
//!
//! ```rust,no_run
//! use lineage::engine::Search;
//! use lineage::schema::SearchConfig;
//!
//! let config = SearchConfig {
//!     genome_length: 5,
//!     random_seed: 42,
//!     ..Default::default()
//! };
//! let count_a = |genes: &[char]| genes.iter().filter(|&&g| g == 'A').count();
//!
//! let search = Search::new(vec!['A', 'T', 'G', 'C'], count_a, 5, config).unwrap();
//! let result = search.run_with_callback(|improvement| {
//!     println!(
//!         "improvement {}: fitness = {}",
//!         improvement.index, improvement.candidate.fitness
//!     );
//! });
//!
//! println!("best genome: {:?}", result.best.genes);
//! ```

mod anneal;
mod candidate;
mod mutation;
mod rng;
mod search;

pub use anneal::accepts;
pub use candidate::{Candidate, Origin};
pub use rng::LineageRng;
pub use search::{Improvement, Improvements, Search, SearchResult, SearchStats, StopReason};
