//! Cheapest-insertion tour construction.
//!
//! The tour grows from `[start, destination?]`. Each round inserts the
//! remaining point whose cheapest position adds the least discovery-aware
//! cost. Speculative waypoint detours are weighed the same way as in
//! nearest neighbor. The discovery state grows as points are placed and is
//! an approximation: a point inserted mid-tour does not retroactively
//! update what later legs would have seen.

use teleroute_core::geometry::euclidean_distance;
use teleroute_core::{Point, RouteMetric};

use crate::detour::detour_candidates;
use crate::tour::{append_unplaced, straight_tour};

#[derive(Debug, Clone, Copy)]
struct Placement<'a> {
    point: usize,
    position: usize,
    detour: Option<&'a Point>,
}

/// Builds a tour by cheapest insertion, checking at most `max_checks`
/// positions in total.
///
/// On overflow the points not yet placed are appended in input order
/// before the destination.
pub fn greedy_insertion(
    metric: &RouteMetric<'_>,
    start: &Point,
    destination: Option<&Point>,
    points: &[Point],
    max_checks: usize,
) -> Vec<Point> {
    if points.is_empty() {
        return straight_tour(start, points, destination);
    }

    let discovery = metric.discovery();
    let has_destination = destination.is_some();
    let mut state = discovery.fresh_state();
    let mut tour = straight_tour(start, &[], destination);
    let mut remaining: Vec<Point> = points.to_vec();
    let mut checks = 0usize;
    discovery.discover_at(start, &mut state);

    while !remaining.is_empty() {
        let detours = detour_candidates(metric, &remaining, &state);
        let last_position = if has_destination {
            tour.len() - 1
        } else {
            tour.len()
        };

        let mut best: Option<Placement<'_>> = None;
        let mut best_increase = f64::INFINITY;

        for (idx, point) in remaining.iter().enumerate() {
            for position in 1..=last_position {
                checks += 1;
                if checks > max_checks {
                    log::warn!(
                        "greedy insertion hit {} position checks; appending {} unplaced points",
                        max_checks,
                        remaining.len()
                    );
                    append_unplaced(&mut tour, &remaining, has_destination);
                    return tour;
                }

                let before = &tour[position - 1];
                let after = tour.get(position);

                let existing = after.map_or(0.0, |a| metric.distance(before, a, &state));
                let tail = after.map_or(0.0, |a| metric.distance(point, a, &state));
                let increase = metric.distance(before, point, &state) + tail - existing;

                for detour in &detours {
                    let walk = euclidean_distance(before.position(), detour.waypoint.position())
                        + euclidean_distance(detour.waypoint.position(), point.position());
                    let effective = (walk + tail - existing) - detour.credit;
                    if effective < best_increase {
                        best_increase = effective;
                        best = Some(Placement {
                            point: idx,
                            position,
                            detour: Some(detour.waypoint),
                        });
                    }
                }

                if increase < best_increase {
                    best_increase = increase;
                    best = Some(Placement {
                        point: idx,
                        position,
                        detour: None,
                    });
                }
            }
        }

        // No finite placement (AND-mode ends before any hub is known).
        let Some(placement) = best else {
            log::debug!(
                "greedy insertion found no finite placement; appending {} points",
                remaining.len()
            );
            append_unplaced(&mut tour, &remaining, has_destination);
            break;
        };

        let mut position = placement.position;
        if let Some(waypoint) = placement.detour {
            let stop = waypoint.as_explicit_visit();
            discovery.discover_along(&tour[position - 1], &stop, &mut state);
            tour.insert(position, stop);
            discovery.discover_at(&stop, &mut state);
            position += 1;
        }

        let point = remaining.remove(placement.point);
        discovery.discover_along(&tour[position - 1], &point, &mut state);
        tour.insert(position, point);
        discovery.discover_at(&point, &mut state);
    }

    tour
}
