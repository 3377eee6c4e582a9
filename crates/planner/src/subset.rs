//! Subset selection for category targets.
//!
//! When a category has more markers than required, which ones to visit is
//! part of the problem. A handful of random draws are scored with a cheap
//! Euclidean nearest-neighbor estimate and the best draw is kept. The full
//! algorithms then run on that draw only.

use rand::seq::SliceRandom;
use rand::Rng;
use teleroute_core::geometry::euclidean_distance;
use teleroute_core::Point;

use crate::request::CategoryTargets;

/// The chosen visit set.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetSelection {
    /// Points to visit.
    pub points: Vec<Point>,
    /// Estimated tour length of `points`.
    pub estimate: f64,
    /// Number of draws scored.
    pub trials: usize,
}

/// Draws up to `trials` candidate visit sets and keeps the cheapest.
///
/// Only one draw is made when no category (and no waypoint requirement)
/// is oversupplied, since every draw would be identical.
pub fn select_subset<R: Rng + ?Sized>(
    start: &Point,
    ends: &[Point],
    waypoints: &[Point],
    targets: &CategoryTargets,
    trials: usize,
    rng: &mut R,
) -> SubsetSelection {
    let trials = if is_oversupplied(targets, waypoints) {
        trials.max(1)
    } else {
        1
    };

    let mut best = SubsetSelection {
        points: Vec::new(),
        estimate: f64::INFINITY,
        trials,
    };

    for _ in 0..trials {
        let candidate = draw(targets, waypoints, rng);
        if candidate.is_empty() {
            log::warn!("subset draw produced no points to visit");
            continue;
        }

        let estimate = estimate_tour(start, &candidate, ends);
        if estimate < best.estimate {
            best.estimate = estimate;
            best.points = candidate;
        }
    }

    log::debug!(
        "selected {} points from {} draws (estimate {:.1})",
        best.points.len(),
        trials,
        best.estimate
    );
    best
}

/// Single-pass Euclidean nearest-neighbor walk from `start` through
/// `points`, plus the distance to the closest end.
pub fn estimate_tour(start: &Point, points: &[Point], ends: &[Point]) -> f64 {
    let mut remaining: Vec<&Point> = points.iter().collect();
    let mut current = start;
    let mut total = 0.0;

    while !remaining.is_empty() {
        let (idx, dist) = remaining
            .iter()
            .enumerate()
            .map(|(i, p)| (i, euclidean_distance(current.position(), p.position())))
            .fold((0, f64::INFINITY), |best, cand| {
                if cand.1 < best.1 {
                    cand
                } else {
                    best
                }
            });
        total += dist;
        current = remaining.remove(idx);
    }

    let to_end = ends
        .iter()
        .map(|e| euclidean_distance(current.position(), e.position()))
        .fold(f64::INFINITY, f64::min);
    if to_end.is_finite() {
        total += to_end;
    }
    total
}

fn is_oversupplied(targets: &CategoryTargets, waypoints: &[Point]) -> bool {
    let categories = targets.points.iter().any(|(&category, markers)| {
        let required = targets.requirement(category);
        required > 0 && required < markers.len()
    });
    let hubs =
        targets.waypoint_requirement > 0 && targets.waypoint_requirement < waypoints.len();
    categories || hubs
}

fn draw<R: Rng + ?Sized>(targets: &CategoryTargets, waypoints: &[Point], rng: &mut R) -> Vec<Point> {
    let mut candidate = Vec::new();
    for (&category, markers) in &targets.points {
        take(&mut candidate, markers, targets.requirement(category), rng);
    }
    take(&mut candidate, waypoints, targets.waypoint_requirement, rng);
    candidate
}

fn take<R: Rng + ?Sized>(into: &mut Vec<Point>, available: &[Point], required: usize, rng: &mut R) {
    if required == 0 || available.is_empty() {
        return;
    }
    if required >= available.len() {
        into.extend_from_slice(available);
    } else {
        into.extend(available.choose_multiple(rng, required).copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use teleroute_core::Category;

    #[test]
    fn test_estimate_tour() {
        let start = Point::start(0.0, 0.0);
        let points = vec![Point::required(0, 20.0, 0.0), Point::required(1, 10.0, 0.0)];
        assert_relative_eq!(estimate_tour(&start, &points, &[]), 20.0);

        let ends = vec![Point::end(0, 20.0, 30.0), Point::end(1, 20.0, 5.0)];
        assert_relative_eq!(estimate_tour(&start, &points, &ends), 25.0);
    }

    #[test]
    fn test_single_trial_when_nothing_oversupplied() {
        let targets = CategoryTargets::new()
            .with_points(
                Category::Heart,
                vec![
                    Point::marker(0, Category::Heart, 5.0, 0.0),
                    Point::marker(1, Category::Heart, 10.0, 0.0),
                ],
            )
            .with_requirement(Category::Heart, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let selection = select_subset(&Point::start(0.0, 0.0), &[], &[], &targets, 20, &mut rng);

        assert_eq!(selection.trials, 1);
        assert_eq!(selection.points.len(), 2);
        assert_relative_eq!(selection.estimate, 10.0);
    }

    #[test]
    fn test_picks_nearby_markers() {
        // One near marker and one far marker; requiring one should keep the
        // near one across twenty draws.
        let targets = CategoryTargets::new()
            .with_points(
                Category::Vista,
                vec![
                    Point::marker(0, Category::Vista, 500.0, 0.0),
                    Point::marker(1, Category::Vista, 5.0, 0.0),
                ],
            )
            .with_requirement(Category::Vista, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let selection = select_subset(&Point::start(0.0, 0.0), &[], &[], &targets, 20, &mut rng);

        assert_eq!(selection.trials, 20);
        assert_eq!(selection.points.len(), 1);
        assert_eq!(selection.points[0].id, 1);
    }

    #[test]
    fn test_waypoint_requirement_draws_hubs() {
        let waypoints = vec![
            Point::waypoint(0, 50.0, 0.0, 20.0),
            Point::waypoint(1, 60.0, 0.0, 20.0),
        ];
        let targets = CategoryTargets::new()
            .with_points(Category::Heart, vec![Point::marker(0, Category::Heart, 1.0, 1.0)])
            .with_waypoint_requirement(2);
        let mut rng = StdRng::seed_from_u64(9);
        let selection =
            select_subset(&Point::start(0.0, 0.0), &[], &waypoints, &targets, 20, &mut rng);

        assert_eq!(selection.points.iter().filter(|p| p.is_waypoint()).count(), 2);
        // Hearts are optional here.
        assert_eq!(selection.points.len(), 2);
    }
}
