//! Construction heuristics: fast, non-optimal tours and m-TSP route sets
//! used as baselines against the exact solvers.

mod multi;
mod nearest;

pub use multi::{greedy_round_robin, origin_sorted};
pub use nearest::{
    best_of, nearest_neighbor, partial_random_nearest_neighbor, stochastic_nearest_neighbor,
};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Deterministic generator for the stochastic heuristics.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
