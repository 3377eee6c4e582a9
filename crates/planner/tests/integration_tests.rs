//! Integration tests for teleroute-planner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teleroute_core::insert_waypoints;
use teleroute_planner::{
    solve, Algorithm, Category, CategoryTargets, ComputationRequest, EndpointMode, Error, Point,
    RouteConfig, RouteMetric,
};

/// Deterministic scatter of `n` required points.
fn scatter(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = (i as f64 * 37.0) % 90.0 + 5.0;
            let y = (i as f64 * 53.0) % 70.0 + 10.0;
            Point::required(i, x, y)
        })
        .collect()
}

mod metric_tests {
    use super::*;

    #[test]
    fn test_distance_ignores_history_without_discovery() {
        let waypoints = vec![
            Point::waypoint(0, 40.0, 40.0, 20.0),
            Point::waypoint(1, 90.0, 10.0, 20.0),
        ];
        let metric = RouteMetric::new(&waypoints, false, EndpointMode::Or);
        let points = scatter(6);

        let fresh = metric.discovery().fresh_state();
        let mut walked = metric.discovery().fresh_state();
        for pair in points.windows(2) {
            metric.discovery().discover_along(&pair[0], &pair[1], &mut walked);
        }

        for a in &points {
            for b in &points {
                assert_eq!(metric.distance(a, b, &fresh), metric.distance(a, b, &walked));
            }
        }
    }

    #[test]
    fn test_distance_symmetric_without_waypoints() {
        let metric = RouteMetric::new(&[], true, EndpointMode::Or);
        let state = metric.discovery().fresh_state();
        let points = scatter(6);
        for a in &points {
            for b in &points {
                let ab = metric.distance(a, b, &state);
                let ba = metric.distance(b, a, &state);
                assert!((ab - ba).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_evaluate_bounds() {
        let metric = RouteMetric::new(&[], true, EndpointMode::Or);
        let start = Point::start(0.0, 0.0);
        assert_eq!(metric.evaluate(&[]), 0.0);
        assert_eq!(metric.evaluate(&[start]), 0.0);

        let mut path = vec![start];
        path.extend(scatter(4));
        assert!(metric.evaluate(&path) > 0.0);
    }

    #[test]
    fn test_insertion_never_increases_cost() {
        let waypoints = vec![
            Point::waypoint(0, 20.0, 20.0, 15.0),
            Point::waypoint(1, 80.0, 60.0, 15.0),
            Point::waypoint(2, 50.0, 90.0, 25.0),
        ];
        let points = scatter(7);

        for discovery in [true, false] {
            let metric = RouteMetric::new(&waypoints, discovery, EndpointMode::Or);
            for rotation in 0..points.len() {
                let mut order = points.clone();
                order.rotate_left(rotation);
                if rotation % 2 == 1 {
                    order.reverse();
                }
                let mut raw = vec![Point::start(0.0, 0.0)];
                raw.extend(order);

                let augmented = insert_waypoints(&metric, &raw);
                assert!(
                    metric.evaluate(&augmented) <= metric.evaluate(&raw) + 1e-9,
                    "insertion increased cost for rotation {} (discovery {})",
                    rotation,
                    discovery
                );
            }
        }
    }
}

mod solve_tests {
    use super::*;

    #[test]
    fn test_triangle_every_algorithm_agrees() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_required(vec![Point::required(0, 10.0, 0.0), Point::required(1, 0.0, 10.0)])
            .with_config(RouteConfig::default().with_seed(11));
        let result = solve(&request).unwrap();

        let expected = 10.0 + 200f64.sqrt();
        assert_eq!(result.results.len(), 5);
        for r in &result.results {
            assert!(
                (r.distance - expected).abs() < 1e-9,
                "{} returned {}",
                r.name,
                r.distance
            );
        }
    }

    #[test]
    fn test_waypoint_discovered_on_first_leg() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_ends(vec![Point::end(0, 100.0, 10.0)])
            .with_waypoints(vec![Point::waypoint(0, 50.0, 0.0, 10.0)])
            .with_required(vec![Point::required(0, 100.0, 0.0)])
            .with_config(RouteConfig::default().with_discovery(true).with_seed(3));
        let result = solve(&request).unwrap();

        let best = result.best().unwrap();
        assert!(best.distance <= 110.0 + 1e-9);
        assert_eq!(result.discovered_waypoints, vec![0]);
        assert!(best.path.last().unwrap().is_end());
    }

    #[test]
    fn test_relay_beats_walking() {
        let points = vec![Point::required(0, 100.0, 0.0), Point::required(1, 5.0, 100.0)];
        let base = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_required(points)
            .with_config(RouteConfig::default().with_discovery(true).with_seed(8));

        let walking = solve(&base).unwrap().best().unwrap().distance;

        // The hub is discovered at the start and shortens every later leg.
        let with_hub = base.with_waypoints(vec![Point::waypoint(0, 5.0, 0.0, 15.0)]);
        let result = solve(&with_hub).unwrap();
        let best = result.best().unwrap();

        assert!(best.distance < walking);
        assert!((best.distance - 195.0).abs() < 1e-9);
        assert!(best.path.iter().any(|p| p.is_waypoint() && !p.explicit_visit));
        assert!(best.route_summary().contains("~W1"));
    }

    #[test]
    fn test_brute_force_matches_or_beats_heuristics() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_ends(vec![Point::end(0, 100.0, 100.0), Point::end(1, 0.0, 100.0)])
            .with_required(scatter(6))
            .with_config(RouteConfig::default().with_seed(21));
        let result = solve(&request).unwrap();

        let optimal = result
            .by_name(&Algorithm::BruteForce.name())
            .unwrap()
            .distance;
        for r in &result.results {
            assert!(optimal <= r.distance + 1e-9, "{} beat brute force", r.name);
        }
        assert_eq!(result.best().unwrap().distance, optimal);
    }

    #[test]
    fn test_brute_force_optimal_with_discovery() {
        let mut rng = StdRng::seed_from_u64(2024);
        for scene in 0..24 {
            let n = rng.gen_range(2..=5);
            let k = rng.gen_range(1..=2);
            let required: Vec<Point> = (0..n)
                .map(|i| Point::required(i, rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)))
                .collect();
            let waypoints: Vec<Point> = (0..k)
                .map(|i| {
                    Point::waypoint(
                        i,
                        rng.gen_range(0.0..200.0),
                        rng.gen_range(0.0..200.0),
                        rng.gen_range(15.0..40.0),
                    )
                })
                .collect();
            let ends = if scene % 3 == 0 {
                vec![Point::end(0, rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0))]
            } else {
                Vec::new()
            };

            let request = ComputationRequest::new()
                .with_start(Point::start(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)))
                .with_ends(ends)
                .with_waypoints(waypoints)
                .with_required(required)
                .with_config(RouteConfig::default().with_discovery(true).with_seed(scene));
            let result = solve(&request).unwrap();

            let optimal = result
                .by_name(&Algorithm::BruteForce.name())
                .unwrap()
                .distance;
            for r in &result.results {
                assert!(
                    optimal <= r.distance + 1e-9,
                    "scene {}: {} found {} below brute force {}",
                    scene,
                    r.name,
                    r.distance,
                    optimal
                );
            }
            assert!((result.best().unwrap().distance - optimal).abs() < 1e-9);
        }
    }

    #[test]
    fn test_large_request_skips_brute_force() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_required(scatter(9))
            .with_config(RouteConfig::default().with_seed(2));
        let result = solve(&request).unwrap();

        assert!(result.by_name(&Algorithm::BruteForce.name()).is_none());
        assert!(result.by_name("Nearest Neighbor + 2-Opt").is_some());
        assert!(result.by_name("Random Restart (15x)").is_some());
        for r in &result.results {
            for p in scatter(9) {
                assert_eq!(r.path.iter().filter(|q| q.same_identity(&p)).count(), 1);
            }
        }
    }

    #[test]
    fn test_seeded_solve_is_deterministic() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_waypoints(vec![Point::waypoint(0, 50.0, 50.0, 20.0)])
            .with_required(scatter(12))
            .with_config(RouteConfig::default().with_discovery(true).with_seed(99));

        let a = solve(&request).unwrap();
        let b = solve(&request).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.best_index, b.best_index);
    }
}

mod endpoint_mode_tests {
    use super::*;

    #[test]
    fn test_and_mode_requires_waypoint() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_ends(vec![Point::end(0, 100.0, 0.0), Point::end(1, 0.0, 100.0)])
            .with_config(RouteConfig::default().with_endpoint_mode(EndpointMode::And));
        assert_eq!(
            solve(&request).unwrap_err(),
            Error::AndModeWithoutWaypoint { ends: 2 }
        );
    }

    #[test]
    fn test_and_mode_teleports_out_of_ends() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_ends(vec![Point::end(0, 100.0, 0.0), Point::end(1, 0.0, 100.0)])
            .with_waypoints(vec![Point::waypoint(0, 0.0, 0.0, 15.0)])
            .with_config(
                RouteConfig::default()
                    .with_endpoint_mode(EndpointMode::And)
                    .with_discovery(true)
                    .with_seed(4),
            );
        let result = solve(&request).unwrap();
        let best = result.best().unwrap();

        assert!((best.distance - 200.0).abs() < 1e-9);
        assert_eq!(best.path.iter().filter(|p| p.is_end()).count(), 2);
        // Leaving the first end goes through the hub.
        let first_end = best.path.iter().position(Point::is_end).unwrap();
        assert!(best.path[first_end + 1].is_waypoint());
    }

    #[test]
    fn test_or_mode_tries_every_end() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_ends(vec![Point::end(0, 200.0, 0.0), Point::end(1, 0.0, 30.0)])
            .with_required(vec![Point::required(0, 0.0, 20.0)])
            .with_config(RouteConfig::default().with_seed(6));
        let result = solve(&request).unwrap();
        let best = result.best().unwrap();

        assert!((best.distance - 30.0).abs() < 1e-9);
        assert_eq!(best.path.last().map(|p| p.id), Some(1));
    }
}

mod category_tests {
    use super::*;

    fn targets() -> CategoryTargets {
        CategoryTargets::new()
            .with_points(
                Category::Heart,
                vec![
                    Point::marker(0, Category::Heart, 10.0, 0.0),
                    Point::marker(1, Category::Heart, 400.0, 400.0),
                    Point::marker(2, Category::Heart, 20.0, 5.0),
                ],
            )
            .with_points(
                Category::Vista,
                vec![Point::marker(0, Category::Vista, 30.0, 10.0)],
            )
            .with_requirement(Category::Heart, 2)
            .with_requirement(Category::Vista, 1)
    }

    #[test]
    fn test_subset_visits_required_counts() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_categories(targets())
            .with_config(RouteConfig::default().with_seed(17));
        let result = solve(&request).unwrap();

        let count = |category: Category| {
            result
                .visited
                .iter()
                .filter(|p| p.kind == teleroute_planner::PointKind::CategoryMarker { category })
                .count()
        };
        assert_eq!(count(Category::Heart), 2);
        assert_eq!(count(Category::Vista), 1);
        // The far heart is never worth it.
        assert!(!result.visited.iter().any(|p| p.x == 400.0));
    }

    #[test]
    fn test_unmet_requirements_reported_together() {
        let targets = targets()
            .with_requirement(Category::Heart, 5)
            .with_requirement(Category::Mining, 1);
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_categories(targets);

        let err = solve(&request).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Heart: need 5, have 3"));
        assert!(message.contains("Mining: need 1, have 0"));
    }

    #[test]
    fn test_nothing_to_visit() {
        let targets = targets()
            .with_requirement(Category::Heart, 0)
            .with_requirement(Category::Vista, 0);
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_categories(targets);
        assert_eq!(solve(&request).unwrap_err(), Error::NothingToVisit);
    }

    #[test]
    fn test_seeded_subset_is_deterministic() {
        let request = ComputationRequest::new()
            .with_start(Point::start(0.0, 0.0))
            .with_categories(targets())
            .with_config(RouteConfig::default().with_seed(5));
        let a = solve(&request).unwrap();
        let b = solve(&request).unwrap();
        assert_eq!(a.visited, b.visited);
        assert_eq!(a.results, b.results);
    }
}
