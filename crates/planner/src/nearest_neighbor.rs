//! Nearest-neighbor construction with speculative waypoint detours.
//!
//! Starting from the start point, repeatedly moves to the cheapest
//! unvisited point under the discovery-aware distance. While discovery is
//! on, each step also weighs walking through an undiscovered waypoint on
//! the way: the detour's walking cost minus the waypoint's amortized future
//! value. A winning detour is spliced in as an explicit waypoint stop.

use teleroute_core::geometry::euclidean_distance;
use teleroute_core::{Point, RouteMetric};

use crate::detour::detour_candidates;
use crate::tour::straight_tour;

/// Builds a tour by always moving to the cheapest next point.
pub fn nearest_neighbor(
    metric: &RouteMetric<'_>,
    start: &Point,
    destination: Option<&Point>,
    points: &[Point],
) -> Vec<Point> {
    if points.is_empty() {
        return straight_tour(start, points, destination);
    }

    let discovery = metric.discovery();
    let mut state = discovery.fresh_state();
    let mut remaining: Vec<Point> = points.to_vec();
    let mut path = Vec::with_capacity(points.len() + 2);
    let mut current = *start;
    path.push(current);
    discovery.discover_at(&current, &mut state);

    while !remaining.is_empty() {
        let detours = detour_candidates(metric, &remaining, &state);

        let mut best_idx = None;
        let mut best_detour = None;
        let mut best_cost = f64::INFINITY;

        for (idx, point) in remaining.iter().enumerate() {
            let direct = metric.distance(&current, point, &state);

            for detour in &detours {
                let walk = euclidean_distance(current.position(), detour.waypoint.position())
                    + euclidean_distance(detour.waypoint.position(), point.position());
                let effective = walk - detour.credit;
                if effective < direct && effective < best_cost {
                    best_cost = effective;
                    best_idx = Some(idx);
                    best_detour = Some(detour.waypoint);
                }
            }

            if direct < best_cost {
                best_cost = direct;
                best_idx = Some(idx);
                best_detour = None;
            }
        }

        // Every option is infinite (an AND-mode end with no known hub yet):
        // walk to the first remaining point anyway.
        let next = remaining.remove(best_idx.unwrap_or(0));

        if let Some(waypoint) = best_detour {
            let stop = waypoint.as_explicit_visit();
            discovery.discover_along(&current, &stop, &mut state);
            path.push(stop);
            current = stop;
            discovery.discover_at(&current, &mut state);
        }

        discovery.discover_along(&current, &next, &mut state);
        path.push(next);
        current = next;
        discovery.discover_at(&current, &mut state);
    }

    path.extend(destination.copied());
    path
}
