//! Random restarts polished by 2-opt.

use rand::seq::SliceRandom;
use rand::Rng;
use teleroute_core::{Point, RouteMetric};

use crate::tour::straight_tour;
use crate::two_opt::two_opt;

/// 2-opt passes chained on each shuffled order.
const RUNS_PER_ATTEMPT: usize = 3;

/// Number of restarts used for a scenario of `point_count` points.
pub fn restart_attempts(point_count: usize) -> usize {
    match point_count {
        0..=10 => 15,
        11..=15 => 10,
        _ => 5,
    }
}

/// Shuffles `points` `attempts` times and keeps the best 2-opt result.
pub fn random_restart<R: Rng + ?Sized>(
    metric: &RouteMetric<'_>,
    start: &Point,
    destination: Option<&Point>,
    points: &[Point],
    attempts: usize,
    rng: &mut R,
) -> Vec<Point> {
    if points.is_empty() {
        return straight_tour(start, points, destination);
    }

    let fixed_tail = destination.is_some();
    let mut best: Option<(f64, Vec<Point>)> = None;
    let mut shuffled = points.to_vec();

    for _ in 0..attempts {
        shuffled.shuffle(rng);
        let mut path = straight_tour(start, &shuffled, destination);

        for _ in 0..RUNS_PER_ATTEMPT {
            path = two_opt(metric, path, fixed_tail);
            let cost = metric.evaluate(&path);
            if best.as_ref().map_or(true, |(b, _)| cost < *b) {
                best = Some((cost, path.clone()));
            }
        }
    }

    match best {
        Some((_, path)) => path,
        None => straight_tour(start, points, destination),
    }
}
