//! Exhaustive TSP: every ordering of the non-depot cities is priced and the
//! cheapest closed tour kept. `(n-1)!` tours, so only small instances.

use log::debug;
use mtsp_core::{DistanceMatrix, Error, Result, Tour, DEPOT};

/// Largest instance the enumeration accepts (9! = 362 880 orderings).
pub const MAX_BRUTE_FORCE_CITIES: usize = 10;

/// Exact optimum by enumeration. Orders are visited lexicographically and
/// replaced only on a strictly lower cost, so the lexicographically first
/// optimal tour is returned.
pub fn solve(matrix: &DistanceMatrix) -> Result<Tour> {
    let n = matrix.len();
    if n > MAX_BRUTE_FORCE_CITIES {
        return Err(Error::ScaleLimitExceeded {
            cities: n,
            limit: MAX_BRUTE_FORCE_CITIES,
        });
    }

    let mut order: Vec<usize> = (1..n).collect();
    let mut best_cost = tour_cost(matrix, &order);
    let mut best_order = order.clone();
    let mut evaluated = 1u64;

    while next_permutation(&mut order) {
        evaluated += 1;
        let cost = tour_cost(matrix, &order);
        if cost < best_cost {
            best_cost = cost;
            best_order.copy_from_slice(&order);
        }
    }
    debug!("brute-force: n={n} tours={evaluated} best={best_cost:.3}");

    let mut path = Vec::with_capacity(n);
    path.push(DEPOT);
    path.extend(best_order);
    Ok(Tour {
        path,
        cost: best_cost,
    })
}

// Depot -> order... -> depot, summed in visiting order.
fn tour_cost(matrix: &DistanceMatrix, order: &[usize]) -> f64 {
    let mut prev = DEPOT;
    let mut total = 0.0;
    for &city in order {
        total += matrix.get(prev, city);
        prev = city;
    }
    total + matrix.get(prev, DEPOT)
}

/// Rearranges `items` into the next lexicographic permutation. Returns
/// `false` once the last permutation has been passed.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
