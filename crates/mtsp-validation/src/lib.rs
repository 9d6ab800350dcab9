//! Sweep harness comparing the exact DP solver against brute force and the
//! nearest-neighbour baseline on seeded random instances.

use log::{error, info};
use mtsp_core::{DistanceMatrix, Point, Result, SolverConfig, DEPOT};
use mtsp_held_karp::{solve_mtsp_matrix, HeldKarp};
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

const AGREEMENT_EPS: f64 = 1e-6;

pub const CSV_HEADER: &str =
    "cities,instance,held_karp,brute_force,nearest_neighbor,nn_gap_pct,agents,mtsp_total,states";

#[derive(Clone, Debug)]
pub struct SweepOptions {
    pub min_cities: usize,
    pub max_cities: usize,
    pub instances: usize,
    pub agents: usize,
    pub coord_max: u32,
    pub config: SolverConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    pub cities: usize,
    pub instance: usize,
    pub held_karp: f64,
    /// `None` above the brute-force ceiling.
    pub brute_force: Option<f64>,
    pub nearest_neighbor: f64,
    /// Agents actually used, clamped to what the instance can hold.
    pub agents: usize,
    pub mtsp_total: f64,
    pub states: u64,
}

impl SweepRow {
    pub fn agrees(&self) -> bool {
        self.brute_force
            .map_or(true, |bf| (bf - self.held_karp).abs() < AGREEMENT_EPS)
    }

    pub fn nn_gap_pct(&self) -> f64 {
        if self.held_karp > 0.0 {
            (self.nearest_neighbor - self.held_karp) / self.held_karp * 100.0
        } else {
            0.0
        }
    }

    pub fn to_csv(&self) -> String {
        let brute_force = self
            .brute_force
            .map(|c| format!("{c:.3}"))
            .unwrap_or_default();
        format!(
            "{},{},{:.3},{},{:.3},{:.2},{},{:.3},{}",
            self.cities,
            self.instance,
            self.held_karp,
            brute_force,
            self.nearest_neighbor,
            self.nn_gap_pct(),
            self.agents,
            self.mtsp_total,
            self.states
        )
    }
}

/// Integer coordinates in `[0, coord_max]`, depot first.
pub fn random_instance(rng: &mut Xoshiro256PlusPlus, n: usize, coord_max: u32) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..=coord_max)),
                f64::from(rng.gen_range(0..=coord_max)),
            )
        })
        .collect()
}

pub fn evaluate(points: &[Point], instance: usize, options: &SweepOptions) -> Result<SweepRow> {
    let matrix = DistanceMatrix::from_points(points)?;
    let n = matrix.len();

    let exact = HeldKarp::from_config(&options.config).solve(&matrix)?;
    let brute_force = if n <= mtsp_brute_force::MAX_BRUTE_FORCE_CITIES {
        Some(mtsp_brute_force::solve(&matrix)?.cost)
    } else {
        None
    };
    let nearest = mtsp_heuristics::nearest_neighbor(&matrix, DEPOT)?;

    let agents = options.agents.clamp(1, n.saturating_sub(1).max(1));
    let mtsp_total = if n > 1 {
        solve_mtsp_matrix(&matrix, agents, &options.config)?.total_distance
    } else {
        0.0
    };

    Ok(SweepRow {
        cities: n,
        instance,
        held_karp: exact.tour.cost,
        brute_force,
        nearest_neighbor: nearest.cost,
        agents,
        mtsp_total,
        states: exact.stats.states,
    })
}

/// Runs the whole sweep, handing each row to `emit` as it completes.
/// Returns the number of rows where the exact solvers disagreed.
pub fn run_sweep<F>(options: &SweepOptions, rng: &mut Xoshiro256PlusPlus, mut emit: F) -> Result<usize>
where
    F: FnMut(&SweepRow),
{
    let mut mismatches = 0;
    for n in options.min_cities..=options.max_cities {
        for instance in 0..options.instances {
            let points = random_instance(rng, n, options.coord_max);
            let row = evaluate(&points, instance, options)?;
            if !row.agrees() {
                mismatches += 1;
                error!(
                    "n={n} instance={instance}: held-karp {:.6} != brute force {:.6}",
                    row.held_karp,
                    row.brute_force.unwrap_or(f64::NAN)
                );
            }
            emit(&row);
        }
        info!("finished n={n}");
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn options() -> SweepOptions {
        SweepOptions {
            min_cities: 1,
            max_cities: 8,
            instances: 3,
            agents: 3,
            coord_max: 100,
            config: SolverConfig::default(),
        }
    }

    #[test]
    fn sweep_finds_no_disagreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let mut rows = Vec::new();
        let mismatches = run_sweep(&options(), &mut rng, |row| rows.push(row.clone())).unwrap();
        assert_eq!(mismatches, 0);
        assert_eq!(rows.len(), 8 * 3);
        for row in &rows {
            assert!(row.held_karp <= row.nearest_neighbor + 1e-9);
            assert!(row.agents <= row.cities.saturating_sub(1).max(1));
        }
    }

    #[test]
    fn rows_above_brute_force_ceiling_leave_column_empty() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let points = random_instance(&mut rng, 11, 50);
        let row = evaluate(&points, 0, &options()).unwrap();
        assert_eq!(row.brute_force, None);
        assert!(row.agrees());
        assert!(row.to_csv().starts_with("11,0,"));
        assert!(row.to_csv().contains(",,"));
    }

    #[test]
    fn csv_row_has_one_field_per_header_column() {
        let row = SweepRow {
            cities: 3,
            instance: 1,
            held_karp: 6.8284,
            brute_force: Some(6.8284),
            nearest_neighbor: 7.0,
            agents: 1,
            mtsp_total: 6.8284,
            states: 3,
        };
        assert_eq!(
            row.to_csv().split(',').count(),
            CSV_HEADER.split(',').count()
        );
        assert_eq!(row.to_csv(), "3,1,6.828,6.828,7.000,2.51,1,6.828,3");
    }
}
