//! Exact TSP via Held-Karp bitmask dynamic programming, and the m-TSP
//! pipeline built on it: one optimal tour, split into depot-anchored routes.
//!
//! The memo holds `n * 2^(n-1)` states, so the solver refuses instances past
//! the configured [`ScaleLimit`] instead of exhausting memory.

mod context;
mod tsp;
mod types;

use log::{debug, trace};
use mtsp_core::{
    partition_routes, validate_agents, DistanceMatrix, Point, Result, ScaleLimit, Solution,
    SolverConfig, Tour, DEPOT,
};

use context::SolverContext;
use tsp::{extract_path, remaining_cost};

pub use types::{HeldKarpResult, SolveStats};

#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKarp {
    limit: ScaleLimit,
}

impl HeldKarp {
    pub fn new(limit: ScaleLimit) -> Self {
        Self { limit }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.scale_limit())
    }

    /// Minimum-cost Hamiltonian cycle from the depot over every city.
    pub fn solve(&self, matrix: &DistanceMatrix) -> Result<HeldKarpResult> {
        self.limit.check(matrix.len())?;

        let mut ctx = SolverContext::new(matrix, self.limit.max_cities())?;
        debug!(
            "held-karp: n={} memo_slots={}",
            ctx.n, ctx.stats.memo_slots
        );

        let cost = remaining_cost(&mut ctx, 1 << DEPOT, DEPOT);
        let path = extract_path(&ctx);

        for (size, &count) in ctx.layer_states.iter().enumerate() {
            if count > 0 {
                trace!("held-karp: layer |visited|={size} states={count}");
            }
        }
        debug!(
            "held-karp: cost={cost:.3} states={} transitions={}",
            ctx.stats.states, ctx.stats.transitions
        );

        Ok(HeldKarpResult {
            tour: Tour { path, cost },
            stats: ctx.stats,
            layer_states: ctx.layer_states,
        })
    }
}

pub fn solve_tsp(matrix: &DistanceMatrix, config: &SolverConfig) -> Result<Tour> {
    config.validate()?;
    Ok(HeldKarp::from_config(config).solve(matrix)?.tour)
}

/// Coordinates in, priced routes out. The depot is `points[0]`.
pub fn solve_mtsp(points: &[Point], agents: usize, config: &SolverConfig) -> Result<Solution> {
    config.validate()?;
    // Fail before allocating anything for an instance the DP cannot hold.
    config.scale_limit().check(points.len())?;
    let matrix = DistanceMatrix::from_points(points)?;
    solve_mtsp_matrix(&matrix, agents, config)
}

/// Explicit distance rows in, priced routes out. Rows may differ from their
/// transpose by at most `config.symmetry_tolerance`.
pub fn solve_mtsp_rows(rows: &[Vec<f64>], agents: usize, config: &SolverConfig) -> Result<Solution> {
    config.validate()?;
    config.scale_limit().check(rows.len())?;
    let matrix = DistanceMatrix::from_rows(rows, config.symmetry_tolerance)?;
    solve_mtsp_matrix(&matrix, agents, config)
}

pub fn solve_mtsp_matrix(
    matrix: &DistanceMatrix,
    agents: usize,
    config: &SolverConfig,
) -> Result<Solution> {
    config.validate()?;
    let solver = HeldKarp::from_config(config);
    solver.limit.check(matrix.len())?;
    validate_agents(i64::try_from(agents).unwrap_or(i64::MAX), matrix.len())?;

    let result = solver.solve(matrix)?;
    let routes = partition_routes(matrix, &result.tour.path, agents, config.partition_mode)?;
    let solution = Solution::from_routes(routes);

    debug!(
        "m-tsp: agents={agents} tour_cost={:.3} total_distance={:.3}",
        result.tour.cost, solution.total_distance
    );
    Ok(solution)
}
