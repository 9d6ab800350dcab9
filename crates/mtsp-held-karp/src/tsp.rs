use mtsp_core::DEPOT;

use super::context::SolverContext;

/// Minimum cost to visit every city outside `visited`, starting from
/// `current`, and return to the depot. Fills the memo as a side effect.
///
/// Candidates are tried in ascending index order and only a strictly
/// cheaper one replaces the incumbent, so ties go to the lowest index.
pub fn remaining_cost(ctx: &mut SolverContext, visited: u32, current: usize) -> f64 {
    // Base case: close the cycle
    if visited == ctx.full_mask {
        return ctx.dist.get(current, DEPOT);
    }

    let slot = ctx.slot(visited, current);
    let cached = ctx.cost[slot];
    if !cached.is_nan() {
        return cached;
    }

    ctx.stats.states += 1;
    ctx.layer_states[visited.count_ones() as usize] += 1;
    let mut best = f64::INFINITY;
    let mut best_next = DEPOT;

    for city in 1..ctx.n {
        let bit = 1u32 << city;
        if visited & bit != 0 {
            continue;
        }
        ctx.stats.transitions += 1;

        let cost = ctx.dist.get(current, city) + remaining_cost(ctx, visited | bit, city);
        if cost < best {
            best = cost;
            best_next = city;
        }
    }

    ctx.cost[slot] = best;
    ctx.next[slot] = best_next as u8;
    best
}

/// Follows the memoized next-city pointers from the initial state.
/// Must run after `remaining_cost(ctx, 1, DEPOT)`.
pub fn extract_path(ctx: &SolverContext) -> Vec<usize> {
    let mut path = Vec::with_capacity(ctx.n);
    path.push(DEPOT);

    let mut visited = 1u32 << DEPOT;
    let mut current = DEPOT;
    while visited != ctx.full_mask {
        let next = ctx.next[ctx.slot(visited, current)] as usize;
        path.push(next);
        visited |= 1 << next;
        current = next;
    }
    path
}
