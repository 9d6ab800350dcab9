use mtsp_core::{
    route_cost, validate_agents, AgentRoute, DistanceMatrix, Result, Solution, DEPOT,
};

/// Agents take turns, each appending the unvisited city closest to its
/// current position, until every city is claimed.
pub fn greedy_round_robin(matrix: &DistanceMatrix, agents: usize) -> Result<Solution> {
    let n = matrix.len();
    let agents = checked_agents(agents, n)?;

    let mut visited = vec![false; n];
    visited[DEPOT] = true;
    let mut remaining = n - 1;
    let mut routes: Vec<Vec<usize>> = vec![vec![DEPOT]; agents];

    while remaining > 0 {
        for route in routes.iter_mut() {
            if remaining == 0 {
                break;
            }
            let last = route[route.len() - 1];
            let row = matrix.row(last);
            let Some(next) = (0..n)
                .filter(|&c| !visited[c])
                .min_by(|&a, &b| row[a].total_cmp(&row[b]))
            else {
                break;
            };
            visited[next] = true;
            remaining -= 1;
            route.push(next);
        }
    }

    close_and_price(matrix, routes)
}

/// Sorts the non-depot cities by distance from the depot, gives each agent
/// a contiguous block of `floor((n-1)/m)` of them, then deals the leftovers
/// one per agent.
pub fn origin_sorted(matrix: &DistanceMatrix, agents: usize) -> Result<Solution> {
    let n = matrix.len();
    let agents = checked_agents(agents, n)?;

    let depot_row = matrix.row(DEPOT);
    let mut cities: Vec<usize> = (1..n).collect();
    cities.sort_by(|&a, &b| depot_row[a].total_cmp(&depot_row[b]));

    let per_agent = cities.len() / agents;
    let (blocks, leftover) = cities.split_at(per_agent * agents);

    let mut routes: Vec<Vec<usize>> = blocks
        .chunks(per_agent)
        .map(|block| {
            let mut route = vec![DEPOT];
            route.extend_from_slice(block);
            route
        })
        .collect();
    for (i, &city) in leftover.iter().enumerate() {
        routes[i % agents].push(city);
    }

    close_and_price(matrix, routes)
}

fn checked_agents(agents: usize, cities: usize) -> Result<usize> {
    validate_agents(i64::try_from(agents).unwrap_or(i64::MAX), cities)
}

fn close_and_price(matrix: &DistanceMatrix, routes: Vec<Vec<usize>>) -> Result<Solution> {
    let routes = routes
        .into_iter()
        .map(|mut stops| {
            stops.push(DEPOT);
            let distance = route_cost(matrix, &stops, false)?;
            Ok(AgentRoute { stops, distance })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Solution::from_routes(routes))
}
