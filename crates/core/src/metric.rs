//! Discovery-aware distance and path evaluation.
//!
//! [`RouteMetric::evaluate`] is the single cost function every algorithm is
//! scored against. The distance between two points depends on which
//! waypoints are known at that moment of the walk, so costs are only
//! meaningful for whole paths walked from the start.

use crate::config::EndpointMode;
use crate::discovery::{DiscoveryModel, DiscoveryState};
use crate::geometry::euclidean_distance;
use crate::point::{Point, PointKind};

/// Cost of the edge arriving at a discovered waypoint used as a relay.
pub const TELEPORT_COST: f64 = 0.0;

/// Cost of targeting an undiscovered waypoint directly.
pub const UNREACHABLE_PENALTY: f64 = 999_999.0;

/// Weight applied to each pairwise saving in [`RouteMetric::waypoint_value`].
const SAVING_WEIGHT: f64 = 0.2;

/// The distance model of one computation.
#[derive(Debug, Clone, Copy)]
pub struct RouteMetric<'a> {
    discovery: DiscoveryModel<'a>,
    endpoint_mode: EndpointMode,
}

impl<'a> RouteMetric<'a> {
    /// Creates a metric over `waypoints`.
    pub fn new(waypoints: &'a [Point], discovery: bool, endpoint_mode: EndpointMode) -> Self {
        Self {
            discovery: DiscoveryModel::new(waypoints, discovery),
            endpoint_mode,
        }
    }

    /// The discovery rules.
    #[inline]
    pub fn discovery(&self) -> &DiscoveryModel<'a> {
        &self.discovery
    }

    /// The waypoint source.
    #[inline]
    pub fn waypoints(&self) -> &'a [Point] {
        self.discovery.waypoints()
    }

    /// The endpoint mode.
    #[inline]
    pub fn endpoint_mode(&self) -> EndpointMode {
        self.endpoint_mode
    }

    /// Direct walking cost from `a`, before relays are considered.
    ///
    /// In AND mode an end point cannot be walked away from while the scene
    /// has a waypoint: the route must teleport out.
    fn direct_cost(&self, a: &Point, b: &Point) -> f64 {
        if self.endpoint_mode == EndpointMode::And
            && a.is_end()
            && !self.waypoints().is_empty()
        {
            f64::INFINITY
        } else {
            euclidean_distance(a.position(), b.position())
        }
    }

    /// Cheapest cost of travelling from `a` to `b` given what is known.
    pub fn distance(&self, a: &Point, b: &Point, state: &DiscoveryState) -> f64 {
        if a.is_waypoint() {
            return euclidean_distance(a.position(), b.position());
        }

        if let PointKind::Waypoint { .. } = b.kind {
            if b.explicit_visit {
                return euclidean_distance(a.position(), b.position());
            }
            return if self.discovery.is_discovered(b, state) {
                TELEPORT_COST
            } else {
                UNREACHABLE_PENALTY
            };
        }

        let direct = self.direct_cost(a, b);
        self.waypoints()
            .iter()
            .filter(|w| self.discovery.is_discovered(w, state))
            .map(|w| TELEPORT_COST + euclidean_distance(w.position(), b.position()))
            .fold(direct, f64::min)
    }

    /// The discovered waypoint that makes `prev → current` cheapest, if
    /// teleporting through it beats walking.
    pub fn best_relay(
        &self,
        prev: &Point,
        current: &Point,
        state: &DiscoveryState,
    ) -> Option<&'a Point> {
        if prev.is_waypoint() || current.is_waypoint() {
            return None;
        }

        let mut best = None;
        let mut best_cost = self.direct_cost(prev, current);
        for waypoint in self.waypoints() {
            if !self.discovery.is_discovered(waypoint, state) {
                continue;
            }
            let cost = TELEPORT_COST + euclidean_distance(waypoint.position(), current.position());
            if cost < best_cost {
                best_cost = cost;
                best = Some(waypoint);
            }
        }
        best
    }

    /// Total cost of walking `path` from its first point.
    ///
    /// Discovery is threaded in traversal order: point discovery at each
    /// point happens before the cost of the edge leaving it, and segment
    /// discovery happens before moving on.
    pub fn evaluate(&self, path: &[Point]) -> f64 {
        let Some(first) = path.first() else {
            return 0.0;
        };

        let mut walk = self.begin_walk(first);
        for next in &path[1..] {
            self.step(&mut walk, next);
        }
        walk.cost()
    }

    /// Starts an incremental walk at `start`.
    pub fn begin_walk(&self, start: &Point) -> PathWalk {
        let mut state = self.discovery.fresh_state();
        self.discovery.discover_at(start, &mut state);
        PathWalk {
            state,
            last: *start,
            cost: 0.0,
        }
    }

    /// Extends `walk` by one edge to `next`.
    ///
    /// Stepping through a path from its first point accumulates exactly the
    /// cost [`RouteMetric::evaluate`] returns for it.
    pub fn step(&self, walk: &mut PathWalk, next: &Point) {
        walk.cost += self.distance(&walk.last, next, &walk.state);
        self.discovery.discover_along(&walk.last, next, &mut walk.state);
        self.discovery.discover_at(next, &mut walk.state);
        walk.last = *next;
    }

    /// Waypoint ids known after walking the whole of `path`.
    pub fn discovered_along(&self, path: &[Point]) -> Vec<usize> {
        let mut state = self.discovery.fresh_state();
        for (i, point) in path.iter().enumerate() {
            self.discovery.discover_at(point, &mut state);
            if let Some(next) = path.get(i + 1) {
                self.discovery.discover_along(point, next, &mut state);
            }
        }
        state.ids()
    }

    /// Rough value of discovering `waypoint` now, given the points still to visit.
    ///
    /// Sums a fraction of the saving each remaining pair would get by
    /// teleporting to the waypoint instead of walking between them. Zero for
    /// waypoints that are already known.
    pub fn waypoint_value(
        &self,
        waypoint: &Point,
        remaining: &[Point],
        state: &DiscoveryState,
    ) -> f64 {
        if self.discovery.is_discovered(waypoint, state) {
            return 0.0;
        }

        let mut savings = 0.0;
        for (i, a) in remaining.iter().enumerate() {
            for b in &remaining[i + 1..] {
                let direct = euclidean_distance(a.position(), b.position());
                let via = TELEPORT_COST + euclidean_distance(waypoint.position(), b.position());
                savings += (direct - via).max(0.0) * SAVING_WEIGHT;
            }
        }
        savings
    }
}

/// A path prefix being walked by [`RouteMetric::step`].
///
/// Costs only grow as the walk is extended, so the cost of a prefix is a
/// lower bound for every path that starts with it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathWalk {
    state: DiscoveryState,
    last: Point,
    cost: f64,
}

impl PathWalk {
    /// Cost accumulated so far.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The point the walk currently stands on.
    #[inline]
    pub fn last(&self) -> &Point {
        &self.last
    }

    /// Waypoints known at the current point.
    #[inline]
    pub fn state(&self) -> &DiscoveryState {
        &self.state
    }
}
