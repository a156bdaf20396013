//! Search driver: the generation state machine and top-level orchestration.

use std::cmp::Ordering::{Equal, Greater, Less};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::schema::{ConfigError, MutationKind, SearchConfig};

use super::anneal;
use super::candidate::{Candidate, Origin};
use super::rng::LineageRng;

/// A configured search, ready to run one lineage.
///
/// `alphabet` supplies the symbols genes may take, `score` maps a genome to
/// a totally-ordered fitness value, and `target` is the fitness at which
/// [`run`](Search::run) stops. Extra context the scoring function needs is
/// captured by its closure.
pub struct Search<G, F, S> {
    alphabet: Vec<G>,
    score: S,
    target: F,
    config: SearchConfig,
    cancelled: Arc<AtomicBool>,
}

impl<G: std::fmt::Debug, F: std::fmt::Debug, S> std::fmt::Debug for Search<G, F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("alphabet", &self.alphabet)
            .field("score", &"<fn>")
            .field("target", &self.target)
            .field("config", &self.config)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

impl<G, F, S> Search<G, F, S>
where
    G: Clone + PartialEq,
    F: PartialOrd + Clone,
    S: FnMut(&[G]) -> F,
{
    /// Create a search. Fails fast on configuration the mutation operators
    /// cannot work with; no scoring happens here.
    pub fn new(
        alphabet: Vec<G>,
        score: S,
        target: F,
        config: SearchConfig,
    ) -> Result<Self, ConfigError> {
        config.validate(distinct_symbols(&alphabet))?;
        Ok(Self {
            alphabet,
            score,
            target,
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get cancellation handle. Once the flag is set, the improvement
    /// stream ends at its next step and `run` reports
    /// [`StopReason::Cancelled`].
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Score generation 0 and expose the lazy, unbounded improvement
    /// stream. Each call to `next` advances the lineage until the next
    /// strict global best; termination is the consumer's responsibility.
    pub fn improvements(mut self) -> Improvements<G, F, S> {
        let mut rng = LineageRng::new(self.config.random_seed);
        let length = self.config.genome_length;

        // Draw without-replacement chunks until the genome is full: no
        // symbol repeats within a window smaller than the alphabet, while
        // genomes longer than the alphabet still repeat across chunks.
        let mut genes = Vec::with_capacity(length);
        while genes.len() < length {
            let chunk = (length - genes.len()).min(self.alphabet.len());
            genes.extend(
                rng.sample_without_replacement(&self.alphabet, chunk)
                    .cloned(),
            );
        }

        let fitness = (self.score)(&genes);
        let seed = Candidate {
            genes,
            fitness,
            age: 0,
            origin: Origin::Seed,
        };
        debug!(
            "generation 0 scored: {} loci over a {}-symbol alphabet",
            length,
            self.alphabet.len()
        );

        Improvements {
            history: vec![seed.fitness.clone()],
            parent: seed.clone(),
            best: seed,
            alphabet: self.alphabet,
            score: self.score,
            mutation: self.config.mutation,
            max_age: self.config.max_age,
            rng,
            cancelled: self.cancelled,
            evaluations: 1,
        }
    }

    /// Run until the target fitness is met or the search is cancelled.
    pub fn run(self) -> SearchResult<G, F> {
        self.run_with_callback(|_| {})
    }

    /// Run with an observer invoked once per improvement.
    pub fn run_with_callback<C>(self, mut observer: C) -> SearchResult<G, F>
    where
        C: FnMut(&Improvement<'_, G, F>),
    {
        let started = Instant::now();
        let target = self.target.clone();
        let mut stream = self.improvements();

        // Generation 0 may already be good enough.
        if stream.best().fitness >= target {
            let best = stream.best().clone();
            return SearchResult {
                best,
                stats: stream.stats(0, started, StopReason::TargetReached),
            };
        }

        let mut improvements = 0u64;
        while let Some(candidate) = stream.next() {
            observer(&Improvement {
                candidate: &candidate,
                index: improvements,
                elapsed: started.elapsed(),
            });
            improvements += 1;
            if candidate.fitness >= target {
                return SearchResult {
                    best: candidate,
                    stats: stream.stats(improvements, started, StopReason::TargetReached),
                };
            }
        }

        // The stream only ends on cancellation; report the best reached.
        SearchResult {
            best: stream.best().clone(),
            stats: stream.stats(improvements, started, StopReason::Cancelled),
        }
    }
}

/// Count of symbols with no earlier duplicate in the alphabet.
fn distinct_symbols<G: PartialEq>(alphabet: &[G]) -> usize {
    alphabet
        .iter()
        .enumerate()
        .filter(|(i, symbol)| !alphabet[..*i].contains(symbol))
        .count()
}

/// Lazy, unbounded stream of strict global-best improvements.
///
/// Owns the whole lineage state: the current parent, the best-ever
/// candidate, the ascending fitness history, and the search's random
/// source. Yields `None` only after cancellation.
pub struct Improvements<G, F, S> {
    alphabet: Vec<G>,
    score: S,
    mutation: MutationKind,
    max_age: Option<u32>,
    rng: LineageRng,
    cancelled: Arc<AtomicBool>,
    parent: Candidate<G, F>,
    best: Candidate<G, F>,
    history: Vec<F>,
    evaluations: u64,
}

impl<G, F, S> Improvements<G, F, S>
where
    G: Clone + PartialEq,
    F: PartialOrd + Clone,
    S: FnMut(&[G]) -> F,
{
    /// Best-ever candidate, generation 0 included.
    pub fn best(&self) -> &Candidate<G, F> {
        &self.best
    }

    /// Ascending record of all-time best fitness values.
    pub fn history(&self) -> &[F] {
        &self.history
    }

    /// Number of scoring-function invocations so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn stats(&self, improvements: u64, started: Instant, stop_reason: StopReason) -> SearchStats {
        SearchStats {
            improvements,
            evaluations: self.evaluations,
            elapsed_seconds: started.elapsed().as_secs_f64(),
            stop_reason,
        }
    }

    fn next_child(&mut self) -> Candidate<G, F> {
        let Improvements {
            alphabet,
            score,
            mutation,
            rng,
            parent,
            evaluations,
            ..
        } = self;
        let mut scored = |genes: &[G]| {
            *evaluations += 1;
            score(genes)
        };
        mutation.mutate(parent, alphabet, &mut scored, rng)
    }
}

impl<G, F, S> Iterator for Improvements<G, F, S>
where
    G: Clone + PartialEq,
    F: PartialOrd + Clone,
    S: FnMut(&[G]) -> F,
{
    type Item = Candidate<G, F>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cancelled.load(Ordering::Relaxed) {
                return None;
            }

            let mut child = self.next_child();
            match child
                .fitness
                .partial_cmp(&self.parent.fitness)
                .expect("scoring function produced incomparable fitness values")
            {
                // Regression: retry, age out, or escape.
                Less => {
                    let Some(max_age) = self.max_age else {
                        continue;
                    };
                    self.parent.age += 1;
                    if self.parent.age < max_age {
                        continue;
                    }
                    if anneal::accepts(&child.fitness, &self.history, &mut self.rng) {
                        // Jump to the worse child to leave the local optimum.
                        self.parent = child;
                    } else {
                        // Revert to the best-ever candidate with a fresh
                        // aging clock.
                        self.best.age = 0;
                        self.parent = self.best.clone();
                    }
                }
                // Lateral move: always accepted, no annealing test.
                Equal => {
                    child.age = self.parent.age.saturating_add(1);
                    self.parent = child;
                }
                Greater => {
                    child.age = 0;
                    let new_best = child.fitness > self.best.fitness;
                    self.parent = child;
                    if new_best {
                        self.best = self.parent.clone();
                        self.history.push(self.best.fitness.clone());
                        debug!(
                            "global best {} of this run; {} evaluations so far",
                            self.history.len() - 1,
                            self.evaluations
                        );
                        return Some(self.best.clone());
                    }
                }
            }
        }
    }
}

/// Progress snapshot handed to the observer once per improvement.
#[derive(Debug)]
pub struct Improvement<'a, G, F> {
    /// The new global best.
    pub candidate: &'a Candidate<G, F>,
    /// Zero-based improvement index.
    pub index: u64,
    /// Time since the search started.
    pub elapsed: Duration,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult<G, F> {
    /// Best candidate found.
    pub best: Candidate<G, F>,
    /// Statistics from the run.
    pub stats: SearchStats,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Strict global-best improvements emitted after generation 0.
    pub improvements: u64,
    /// Scoring-function invocations, generation 0 included.
    pub evaluations: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Reason the run stopped.
    pub stop_reason: StopReason,
}

/// Reason a search run stopped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// The target fitness was met or exceeded.
    TargetReached,
    /// The cancellation flag was set.
    Cancelled,
}
