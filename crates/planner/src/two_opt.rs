//! 2-opt local search over whole-path cost.
//!
//! Because discovery makes edge costs depend on everything walked before,
//! a reversal cannot be scored from the four touched edges alone. Each
//! candidate is scored with the full path evaluator instead.

use teleroute_core::{Point, RouteMetric};

const MAX_ITERATIONS: usize = 50;

/// Improves `path` by reversing sub-sequences.
///
/// The start is never moved. The last point stays in place when
/// `fixed_tail` is set (the path ends at a destination).
pub fn two_opt(metric: &RouteMetric<'_>, mut path: Vec<Point>, fixed_tail: bool) -> Vec<Point> {
    let n = path.len();
    if n < 4 {
        return path;
    }

    let last = if fixed_tail { n - 2 } else { n - 1 };
    let max_iterations = MAX_ITERATIONS.min(2 * n);

    let mut improved = true;
    let mut iterations = 0;
    let mut current = metric.evaluate(&path);

    while improved && iterations < max_iterations {
        improved = false;
        iterations += 1;

        for i in 1..last {
            for j in (i + 1)..=last {
                path[i..=j].reverse();
                let candidate = metric.evaluate(&path);

                if candidate < current - 1e-10 {
                    current = candidate;
                    improved = true;
                } else {
                    path[i..=j].reverse();
                }
            }
        }
    }

    log::trace!("2-opt finished after {} iterations at {:.2}", iterations, current);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use teleroute_core::EndpointMode;

    #[test]
    fn test_short_path_unchanged() {
        let metric = RouteMetric::new(&[], false, EndpointMode::Or);
        let path = vec![
            Point::start(0.0, 0.0),
            Point::required(0, 10.0, 0.0),
            Point::required(1, 5.0, 0.0),
        ];
        assert_eq!(two_opt(&metric, path.clone(), false), path);
    }

    #[test]
    fn test_untangles_crossing() {
        let metric = RouteMetric::new(&[], false, EndpointMode::Or);
        let start = Point::start(0.0, 0.0);
        let path = vec![
            start,
            Point::required(0, 30.0, 0.0),
            Point::required(1, 10.0, 0.0),
            Point::required(2, 20.0, 0.0),
            Point::required(3, 40.0, 0.0),
        ];
        let before = metric.evaluate(&path);
        let improved = two_opt(&metric, path, false);
        let after = metric.evaluate(&improved);

        assert!(after < before);
        assert_relative_eq!(after, 40.0);
        assert_eq!(improved[0], start);
    }

    #[test]
    fn test_fixed_tail_keeps_destination() {
        let metric = RouteMetric::new(&[], false, EndpointMode::Or);
        let end = Point::end(0, 0.0, 5.0);
        let path = vec![
            Point::start(0.0, 0.0),
            Point::required(0, 20.0, 0.0),
            Point::required(1, 10.0, 0.0),
            Point::required(2, 30.0, 0.0),
            end,
        ];
        let improved = two_opt(&metric, path.clone(), true);
        assert_eq!(improved.last(), Some(&end));
        assert!(metric.evaluate(&improved) <= metric.evaluate(&path));
    }

    #[test]
    fn test_free_tail_may_move() {
        // Cheapest is to finish at the far point, which starts mid-path.
        let metric = RouteMetric::new(&[], false, EndpointMode::Or);
        let path = vec![
            Point::start(0.0, 0.0),
            Point::required(0, 100.0, 0.0),
            Point::required(1, 10.0, 0.0),
            Point::required(2, 20.0, 0.0),
        ];
        let improved = two_opt(&metric, path, false);
        assert_eq!(improved.last().map(|p| p.id), Some(0));
        assert_relative_eq!(metric.evaluate(&improved), 100.0);
    }
}
