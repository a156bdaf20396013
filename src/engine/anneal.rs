//! Annealed acceptance of regressing candidates.
//!
//! The search's only escape mechanism from stagnation: a child worse than
//! its stale parent may still take over the lineage, with probability that
//! decays exponentially in how far the child's fitness ranks below the
//! all-time bests.

use super::rng::LineageRng;

/// Normalized distance of `fitness` from the best recorded value, in [0, 1].
///
/// 0 means the candidate is at least as good as the best historical value;
/// 1 means it ranks below the oldest recorded value. `history` must be
/// ascending and non-empty.
fn distance<F: PartialOrd>(fitness: &F, history: &[F]) -> f64 {
    // Stable insertion point: first index whose entry is >= fitness.
    let rank = history.partition_point(|past| past < fitness);
    (history.len() - rank) as f64 / history.len() as f64
}

/// Decide whether a regressing candidate replaces a stale lineage.
///
/// Accepts iff one uniform draw in [0, 1) lands below `exp(-distance)`:
/// near-best candidates are almost always accepted, far-from-best ones
/// rarely.
pub fn accepts<F: PartialOrd>(fitness: &F, history: &[F], rng: &mut LineageRng) -> bool {
    rng.unit() < (-distance(fitness, history)).exp()
}
