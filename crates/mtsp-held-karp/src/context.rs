use mtsp_core::{DistanceMatrix, Error, Result};

use super::types::SolveStats;

/// Per-invocation DP state. Dropped as soon as the optimal path is extracted.
pub struct SolverContext<'a> {
    pub dist: &'a DistanceMatrix,
    pub n: usize,

    // Memoization table. City 0 is in every visited set, so the set is
    // stored shifted right by one: slot = (visited >> 1) * n + current.
    // NaN marks an unsolved slot; solved costs are always finite.
    pub cost: Vec<f64>,
    pub next: Vec<u8>,

    pub full_mask: u32,
    pub stats: SolveStats,
    // Expanded states by visited-set size, index = popcount
    pub layer_states: Vec<u64>,
}

impl<'a> SolverContext<'a> {
    /// Allocates the memo up front. An allocation the system refuses is
    /// reported as `ScaleLimitExceeded` against `limit`.
    pub fn new(dist: &'a DistanceMatrix, limit: usize) -> Result<Self> {
        let n = dist.len();
        // Size: n * 2^(n-1)
        let slots = n << n.saturating_sub(1);

        let refused = || {
            log::debug!("memo allocation of {slots} slots refused");
            Error::ScaleLimitExceeded { cities: n, limit }
        };
        let cost = memo_table(slots, f64::NAN).ok_or_else(refused)?;
        let next = memo_table(slots, 0u8).ok_or_else(refused)?;

        Ok(SolverContext {
            dist,
            n,
            cost,
            next,
            full_mask: ((1u64 << n) - 1) as u32,
            stats: SolveStats {
                memo_slots: slots as u64,
                ..SolveStats::default()
            },
            layer_states: vec![0; n + 1],
        })
    }

    #[inline(always)]
    pub fn slot(&self, visited: u32, current: usize) -> usize {
        (visited >> 1) as usize * self.n + current
    }
}

fn memo_table<T: Clone>(slots: usize, fill: T) -> Option<Vec<T>> {
    let mut table = Vec::new();
    table.try_reserve_exact(slots).ok()?;
    table.resize(slots, fill);
    Some(table)
}
