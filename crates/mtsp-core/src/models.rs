use serde::{Deserialize, Serialize};

/// Index of the depot every agent starts and ends at.
pub const DEPOT: usize = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A Hamiltonian cycle starting at the depot. The closing edge back to the
/// depot is implicit in `path` but included in `cost`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub path: Vec<usize>,
    pub cost: f64,
}

impl Tour {
    /// The path with the depot appended, as a closed route.
    pub fn closed_path(&self) -> Vec<usize> {
        let mut route = self.path.clone();
        route.push(DEPOT);
        route
    }
}

/// One agent's closed route: `stops` begins and ends at the depot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentRoute {
    pub stops: Vec<usize>,
    pub distance: f64,
}

impl AgentRoute {
    /// Cities visited strictly between the two depot stops.
    pub fn interior(&self) -> &[usize] {
        match self.stops.len() {
            0..=2 => &[],
            len => &self.stops[1..len - 1],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub routes: Vec<AgentRoute>,
    pub total_distance: f64,
}

impl Solution {
    pub fn from_routes(routes: Vec<AgentRoute>) -> Self {
        let total_distance = routes.iter().map(|r| r.distance).sum();
        Self {
            routes,
            total_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_path_returns_to_depot() {
        let tour = Tour {
            path: vec![0, 2, 1],
            cost: 3.0,
        };
        assert_eq!(tour.closed_path(), vec![0, 2, 1, 0]);
    }

    #[test]
    fn interior_skips_depot_stops() {
        let route = AgentRoute {
            stops: vec![0, 3, 4, 0],
            distance: 0.0,
        };
        assert_eq!(route.interior(), &[3, 4]);
        assert!(AgentRoute::default().interior().is_empty());
    }

    #[test]
    fn solution_total_is_sum_of_routes() {
        let solution = Solution::from_routes(vec![
            AgentRoute {
                stops: vec![0, 1, 0],
                distance: 2.5,
            },
            AgentRoute {
                stops: vec![0, 2, 0],
                distance: 4.0,
            },
        ]);
        assert!((solution.total_distance - 6.5).abs() < 1e-12);
    }
}
