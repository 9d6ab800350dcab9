use mtsp_core::{route_cost, DistanceMatrix, Point, DEPOT};
use mtsp_heuristics::{
    best_of, greedy_round_robin, nearest_neighbor, origin_sorted, partial_random_nearest_neighbor,
    seeded_rng, stochastic_nearest_neighbor,
};
use rand::Rng;

const EPS: f64 = 1e-9;

fn random_matrix(seed: u64, n: usize) -> DistanceMatrix {
    let mut rng = seeded_rng(seed);
    let points: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen_range(0..=100) as f64, rng.gen_range(0..=100) as f64))
        .collect();
    DistanceMatrix::from_points(&points).unwrap()
}

#[test]
fn heuristics_never_beat_the_optimum() {
    for n in 2..=8 {
        for seed in 0..5 {
            let matrix = random_matrix(seed * 31 + n as u64, n);
            let optimum = mtsp_brute_force::solve(&matrix).unwrap().cost;

            let greedy = nearest_neighbor(&matrix, DEPOT).unwrap();
            assert!(greedy.cost >= optimum - EPS);

            let mut rng = seeded_rng(seed);
            let sampled = best_of(20, || stochastic_nearest_neighbor(&matrix, &mut rng)).unwrap();
            assert!(sampled.cost >= optimum - EPS);

            let partial = partial_random_nearest_neighbor(&matrix, 50, &mut rng).unwrap();
            assert!(partial.cost >= optimum - EPS);
        }
    }
}

#[test]
fn tour_costs_match_evaluator() {
    let matrix = random_matrix(99, 9);
    let mut rng = seeded_rng(5);
    for tour in [
        nearest_neighbor(&matrix, 4).unwrap(),
        stochastic_nearest_neighbor(&matrix, &mut rng).unwrap(),
        partial_random_nearest_neighbor(&matrix, 30, &mut rng).unwrap(),
    ] {
        assert_eq!(tour.path[0], DEPOT);
        let priced = route_cost(&matrix, &tour.path, true).unwrap();
        assert!((priced - tour.cost).abs() < EPS);
    }
}

#[test]
fn multi_agent_totals_are_route_sums() {
    let matrix = random_matrix(17, 10);
    for agents in 1..10 {
        for solution in [
            greedy_round_robin(&matrix, agents).unwrap(),
            origin_sorted(&matrix, agents).unwrap(),
        ] {
            assert_eq!(solution.routes.len(), agents);
            let summed: f64 = solution.routes.iter().map(|r| r.distance).sum();
            assert!((summed - solution.total_distance).abs() < EPS);
        }
    }
}
