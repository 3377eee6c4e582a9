//! Waypoint insertion post-processing.
//!
//! Tour builders produce visiting orders in which teleports are implicit:
//! the metric charges the relay cost but the path does not show the hub.
//! [`insert_waypoints`] makes those relays visible so the renderer can draw
//! the teleport.

use crate::metric::{PathWalk, RouteMetric};
use crate::point::Point;

/// Splices the best discovered relay waypoint in front of each point it
/// shortens the approach to.
///
/// Discovery is threaded along the augmented path as it is built, so a relay
/// discovered by an earlier leg is available to later ones. Relays are
/// spliced as plain waypoints (the metric charges `TELEPORT_COST` to reach
/// them); explicit waypoint stops already in the path pass through
/// untouched.
///
/// The augmented path is returned only when it evaluates no worse than
/// `raw_path`, so this never increases the cost of a route.
pub fn insert_waypoints(metric: &RouteMetric<'_>, raw_path: &[Point]) -> Vec<Point> {
    let Some(first) = raw_path.first() else {
        return Vec::new();
    };
    if metric.waypoints().is_empty() {
        return raw_path.to_vec();
    }

    let mut walk = metric.begin_walk(first);
    let mut path = Vec::with_capacity(raw_path.len() * 2);
    path.push(*first);
    for current in &raw_path[1..] {
        if let Some(relay) = relay_step(metric, &mut walk, current) {
            path.push(*relay);
        }
        path.push(*current);
    }

    if path.len() == raw_path.len() {
        return path;
    }

    let raw_cost = metric.evaluate(raw_path);
    let augmented_cost = walk.cost();
    if keeps_relays(raw_cost, augmented_cost) {
        path
    } else {
        log::debug!(
            "relay insertion rejected: {:.3} > {:.3}",
            augmented_cost,
            raw_cost
        );
        raw_path.to_vec()
    }
}

/// Extends an augmented walk to `current`, teleporting through the best
/// discovered relay first. Returns the relay used.
///
/// Walking a raw path point by point through this function builds the same
/// augmented path [`insert_waypoints`] does, and `walk` accumulates its cost.
pub fn relay_step<'a>(
    metric: &RouteMetric<'a>,
    walk: &mut PathWalk,
    current: &Point,
) -> Option<&'a Point> {
    let relay = if current.is_waypoint() && current.explicit_visit {
        None
    } else {
        metric.best_relay(walk.last(), current, walk.state())
    };
    if let Some(relay) = relay {
        metric.step(walk, relay);
    }
    metric.step(walk, current);
    relay
}

/// Whether an augmented path costing `augmented_cost` replaces a raw path
/// costing `raw_cost`.
#[inline]
pub fn keeps_relays(raw_cost: f64, augmented_cost: f64) -> bool {
    augmented_cost <= raw_cost + 1e-9
}
