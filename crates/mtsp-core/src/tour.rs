use crate::distance::DistanceMatrix;
use crate::Result;

/// Sums consecutive edge costs along `route`. With `closed`, the edge from
/// the last city back to the first is added as well.
///
/// Every index is checked before any edge is summed, so an out-of-range city
/// fails the whole call.
pub fn route_cost(matrix: &DistanceMatrix, route: &[usize], closed: bool) -> Result<f64> {
    for &city in route {
        matrix.check_index(city)?;
    }
    Ok(route_cost_unchecked(matrix, route, closed))
}

pub(crate) fn route_cost_unchecked(matrix: &DistanceMatrix, route: &[usize], closed: bool) -> f64 {
    let mut total: f64 = route.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    if closed {
        if let (Some(&first), Some(&last)) = (route.first(), route.last()) {
            total += matrix.get(last, first);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use crate::Error;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn open_route_skips_closing_edge() {
        let cost = route_cost(&square(), &[0, 1, 2, 3], false).unwrap();
        assert!((cost - 3.0).abs() < 1e-12);
    }

    #[test]
    fn closed_route_adds_closing_edge() {
        let cost = route_cost(&square(), &[0, 1, 2, 3], true).unwrap();
        assert!((cost - 4.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_depot_return_matches_closed_mode() {
        let m = square();
        let open = route_cost(&m, &[0, 2, 1, 3, 0], false).unwrap();
        let closed = route_cost(&m, &[0, 2, 1, 3], true).unwrap();
        assert!((open - closed).abs() < 1e-12);
    }

    #[test]
    fn degenerate_routes_cost_nothing() {
        let m = square();
        assert_eq!(route_cost(&m, &[], true).unwrap(), 0.0);
        assert_eq!(route_cost(&m, &[2], true).unwrap(), 0.0);
    }

    #[test]
    fn rejects_unknown_city() {
        assert_eq!(
            route_cost(&square(), &[0, 4, 0], false),
            Err(Error::IndexOutOfRange { index: 4, cities: 4 })
        );
    }
}
