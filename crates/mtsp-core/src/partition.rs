use crate::config::PartitionMode;
use crate::distance::DistanceMatrix;
use crate::models::{AgentRoute, DEPOT};
use crate::tour::route_cost_unchecked;
use crate::{Error, Result};

/// Checks that `agents` can each receive at least one of the `cities - 1`
/// non-depot cities.
pub fn validate_agents(agents: i64, cities: usize) -> Result<usize> {
    let interior = cities.saturating_sub(1);
    match usize::try_from(agents) {
        Ok(m) if m >= 1 && m <= interior => Ok(m),
        _ => Err(Error::InvalidPartition { agents, cities }),
    }
}

/// Splits the interior of `path` (everything after the leading depot) into
/// `agents` groups and wraps each group with the depot.
///
/// `Contiguous` keeps order: blocks of `floor((n-1)/m)` cities, with the
/// leftover cities appended to the first agent's block. `RoundRobin` uses the
/// same block size but hands the leftovers out one per agent, starting at
/// the first.
pub fn partition(path: &[usize], agents: usize, mode: PartitionMode) -> Result<Vec<Vec<usize>>> {
    let cities = path.len();
    if path.first() != Some(&DEPOT) {
        return Err(Error::invalid_input("path must start at the depot"));
    }
    let mut seen = vec![false; cities];
    for &city in path {
        match seen.get_mut(city) {
            Some(slot) if !*slot => *slot = true,
            _ => {
                return Err(Error::invalid_input(format!(
                    "path must visit each of the {cities} cities exactly once (city {city})"
                )))
            }
        }
    }
    let agents = validate_agents(i64::try_from(agents).unwrap_or(i64::MAX), cities)?;

    let interior = &path[1..];
    let base = interior.len() / agents;
    let remainder = interior.len() % agents;

    let mut groups: Vec<Vec<usize>> = Vec::with_capacity(agents);
    match mode {
        PartitionMode::Contiguous => {
            let (first, rest) = interior.split_at(base + remainder);
            groups.push(first.to_vec());
            groups.extend(rest.chunks(base).map(<[usize]>::to_vec));
        }
        PartitionMode::RoundRobin => {
            let (blocks, leftover) = interior.split_at(base * agents);
            groups.extend(blocks.chunks(base).map(<[usize]>::to_vec));
            for (i, &city) in leftover.iter().enumerate() {
                groups[i % agents].push(city);
            }
        }
    }
    debug_assert_eq!(groups.len(), agents);

    Ok(groups
        .into_iter()
        .map(|group| {
            let mut route = Vec::with_capacity(group.len() + 2);
            route.push(DEPOT);
            route.extend(group);
            route.push(DEPOT);
            route
        })
        .collect())
}

/// Partitions `path` and prices each resulting route on `matrix`.
pub fn partition_routes(
    matrix: &DistanceMatrix,
    path: &[usize],
    agents: usize,
    mode: PartitionMode,
) -> Result<Vec<AgentRoute>> {
    for &city in path {
        matrix.check_index(city)?;
    }
    let routes = partition(path, agents, mode)?;
    Ok(routes
        .into_iter()
        .map(|stops| AgentRoute {
            distance: route_cost_unchecked(matrix, &stops, false),
            stops,
        })
        .collect())
}
