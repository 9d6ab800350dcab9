#![deny(clippy::all)]

use mtsp_core::{
    DistanceMatrix, Error, PartitionMode, Point, Solution, SolverConfig, Tour, DEPOT,
};
use napi::{Result, Status};
use napi_derive::napi;

mod models;

use models::{AgentRouteResult, Coordinate, MtspSolution, SolverOptions, TourResult};

fn to_napi(e: Error) -> napi::Error {
    napi::Error::new(Status::InvalidArg, e.to_string())
}

fn to_points(coords: &[Coordinate]) -> Vec<Point> {
    coords.iter().map(|c| Point::new(c.x, c.y)).collect()
}

fn to_indices(path: &[usize]) -> Vec<u32> {
    path.iter().map(|&i| i as u32).collect()
}

fn to_config(options: Option<SolverOptions>) -> Result<SolverConfig> {
    let options = options.unwrap_or_default();
    let mut config = SolverConfig::default();
    if let Some(max) = options.max_exact_cities {
        config.max_exact_cities = max as usize;
    }
    if let Some(tolerance) = options.symmetry_tolerance {
        config.symmetry_tolerance = tolerance;
    }
    if let Some(mode) = options.partition_mode.as_deref() {
        config.partition_mode = match mode {
            "contiguous" => PartitionMode::Contiguous,
            "round-robin" => PartitionMode::RoundRobin,
            other => {
                return Err(to_napi(Error::invalid_input(format!(
                    "unknown partition mode {other:?}"
                ))))
            }
        };
    }
    config.validate().map_err(to_napi)?;
    Ok(config)
}

// JS numbers arrive as f64; agents must be a positive whole number.
fn to_agents(agents: f64, cities: usize) -> Result<usize> {
    if !agents.is_finite() || agents.fract() != 0.0 || agents < 1.0 {
        return Err(to_napi(Error::InvalidPartition {
            agents: if agents.is_finite() { agents.trunc() as i64 } else { 0 },
            cities,
        }));
    }
    Ok(agents as usize)
}

fn to_tour_result(tour: Tour) -> TourResult {
    TourResult {
        path: to_indices(&tour.path),
        cost: tour.cost,
    }
}

fn to_mtsp_solution(solution: Solution) -> MtspSolution {
    MtspSolution {
        routes: solution
            .routes
            .iter()
            .map(|r| AgentRouteResult {
                stops: to_indices(&r.stops),
                distance: r.distance,
            })
            .collect(),
        total_distance: solution.total_distance,
    }
}

#[napi]
pub fn solve_held_karp(points: Vec<Coordinate>, options: Option<SolverOptions>) -> Result<TourResult> {
    let config = to_config(options)?;
    config.scale_limit().check(points.len()).map_err(to_napi)?;
    let matrix = DistanceMatrix::from_points(&to_points(&points)).map_err(to_napi)?;
    let tour = mtsp_held_karp::solve_tsp(&matrix, &config).map_err(to_napi)?;
    Ok(to_tour_result(tour))
}

#[napi]
pub fn solve_mtsp(
    points: Vec<Coordinate>,
    agents: f64,
    options: Option<SolverOptions>,
) -> Result<MtspSolution> {
    let config = to_config(options)?;
    let agents = to_agents(agents, points.len())?;
    let solution =
        mtsp_held_karp::solve_mtsp(&to_points(&points), agents, &config).map_err(to_napi)?;
    Ok(to_mtsp_solution(solution))
}

#[napi]
pub fn solve_mtsp_rows(
    rows: Vec<Vec<f64>>,
    agents: f64,
    options: Option<SolverOptions>,
) -> Result<MtspSolution> {
    let config = to_config(options)?;
    let agents = to_agents(agents, rows.len())?;
    let solution = mtsp_held_karp::solve_mtsp_rows(&rows, agents, &config).map_err(to_napi)?;
    Ok(to_mtsp_solution(solution))
}

#[napi]
pub fn solve_brute_force(points: Vec<Coordinate>) -> Result<TourResult> {
    let matrix = DistanceMatrix::from_points(&to_points(&points)).map_err(to_napi)?;
    let tour = mtsp_brute_force::solve(&matrix).map_err(to_napi)?;
    Ok(to_tour_result(tour))
}

#[napi]
pub fn nearest_neighbor_tour(points: Vec<Coordinate>) -> Result<TourResult> {
    let matrix = DistanceMatrix::from_points(&to_points(&points)).map_err(to_napi)?;
    let tour = mtsp_heuristics::nearest_neighbor(&matrix, DEPOT).map_err(to_napi)?;
    Ok(to_tour_result(tour))
}

#[napi]
pub fn route_distance(points: Vec<Coordinate>, route: Vec<u32>, closed: bool) -> Result<f64> {
    let matrix = DistanceMatrix::from_points(&to_points(&points)).map_err(to_napi)?;
    let route: Vec<usize> = route.into_iter().map(|i| i as usize).collect();
    mtsp_core::route_cost(&matrix, &route, closed).map_err(to_napi)
}
