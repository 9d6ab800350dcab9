use log::trace;
use mtsp_core::{DistanceMatrix, Error, Result, Tour, DEPOT};
use rand::seq::index::sample;
use rand::Rng;

/// Greedy tour from `start`: always move to the closest unvisited city,
/// lowest index on ties.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<Tour> {
    matrix.check_index(start)?;
    let path = extend_greedy(matrix, vec![start]);
    Ok(depot_tour(matrix, path))
}

/// Nearest neighbour from a uniformly random start city.
pub fn stochastic_nearest_neighbor<R: Rng>(
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> Result<Tour> {
    let start = rng.gen_range(0..matrix.len());
    trace!("stochastic nearest neighbour: start={start}");
    nearest_neighbor(matrix, start)
}

/// The first `floor(n * random_percent / 100)` cities are drawn at random,
/// the rest of the tour is completed greedily.
pub fn partial_random_nearest_neighbor<R: Rng>(
    matrix: &DistanceMatrix,
    random_percent: u32,
    rng: &mut R,
) -> Result<Tour> {
    if random_percent > 100 {
        return Err(Error::invalid_input(format!(
            "random_percent must be between 0 and 100, got {random_percent}"
        )));
    }
    let n = matrix.len();
    let random_count = n * random_percent as usize / 100;

    let mut prefix = sample(rng, n, random_count).into_vec();
    if prefix.is_empty() {
        prefix.push(DEPOT);
    }
    let path = extend_greedy(matrix, prefix);
    Ok(depot_tour(matrix, path))
}

/// Runs a stochastic construction `runs` times and keeps the cheapest tour.
pub fn best_of<F>(runs: usize, mut construct: F) -> Result<Tour>
where
    F: FnMut() -> Result<Tour>,
{
    let mut best: Option<Tour> = None;
    for _ in 0..runs {
        let tour = construct()?;
        if best.as_ref().map_or(true, |b| tour.cost < b.cost) {
            best = Some(tour);
        }
    }
    best.ok_or_else(|| Error::invalid_input("best_of needs at least one run"))
}

fn extend_greedy(matrix: &DistanceMatrix, mut path: Vec<usize>) -> Vec<usize> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    for &city in &path {
        visited[city] = true;
    }

    while path.len() < n {
        let Some(&last) = path.last() else { break };
        let row = matrix.row(last);
        let next = (0..n)
            .filter(|&c| !visited[c])
            .min_by(|&a, &b| row[a].total_cmp(&row[b]));
        let Some(next) = next else { break };
        visited[next] = true;
        path.push(next);
    }
    path
}

// Rotates the cycle so it reads from the depot, then prices it closed.
fn depot_tour(matrix: &DistanceMatrix, cycle: Vec<usize>) -> Tour {
    let path = match cycle.iter().position(|&c| c == DEPOT) {
        Some(0) | None => cycle,
        Some(pos) => {
            let mut rotated = Vec::with_capacity(cycle.len());
            rotated.extend_from_slice(&cycle[pos..]);
            rotated.extend_from_slice(&cycle[..pos]);
            rotated
        }
    };
    let mut cost: f64 = path.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    if let Some(&last) = path.last() {
        cost += matrix.get(last, DEPOT);
    }
    Tour { path, cost }
}
