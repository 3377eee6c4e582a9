//! Waypoint discovery.
//!
//! A waypoint becomes a usable teleport hub once the route passes within its
//! radius, either at a visited point or anywhere along a walked segment.
//! Discovery is path-dependent, so every path walk starts from a
//! [`DiscoveryModel::fresh_state`] and the state is dropped afterwards.

use crate::geometry::{euclidean_distance, segment_intersects_circle};
use crate::point::Point;

/// The set of waypoint ids known at some moment of a path walk.
///
/// Only grows. Indexed by waypoint id, which is dense within the waypoint
/// source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryState {
    known: Vec<bool>,
    count: usize,
}

impl DiscoveryState {
    /// Creates a state with nothing discovered.
    pub fn empty(waypoint_count: usize) -> Self {
        Self {
            known: vec![false; waypoint_count],
            count: 0,
        }
    }

    /// Creates a state with every waypoint discovered.
    pub fn full(waypoint_count: usize) -> Self {
        Self {
            known: vec![true; waypoint_count],
            count: waypoint_count,
        }
    }

    /// Returns true if waypoint `id` is known.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.known.get(id).copied().unwrap_or(false)
    }

    /// Marks waypoint `id` as known. Returns true if it was newly discovered.
    pub fn insert(&mut self, id: usize) -> bool {
        match self.known.get_mut(id) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of known waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is known.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Known waypoint ids in ascending order.
    pub fn ids(&self) -> Vec<usize> {
        self.known
            .iter()
            .enumerate()
            .filter_map(|(id, &known)| known.then_some(id))
            .collect()
    }
}

/// Discovery rules over a waypoint source.
///
/// The same model serves the single-set planner and the multi-category
/// planner; only the waypoint slice differs.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryModel<'a> {
    waypoints: &'a [Point],
    enabled: bool,
}

impl<'a> DiscoveryModel<'a> {
    /// Creates a model over `waypoints`. With `enabled == false` every
    /// waypoint counts as discovered.
    pub fn new(waypoints: &'a [Point], enabled: bool) -> Self {
        debug_assert!(
            waypoints.iter().enumerate().all(|(i, w)| w.id == i),
            "waypoint ids must be dense"
        );
        Self { waypoints, enabled }
    }

    /// The waypoint source.
    #[inline]
    pub fn waypoints(&self) -> &'a [Point] {
        self.waypoints
    }

    /// Returns true if discovery mode is on.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// State at the start of a path walk: empty, or full when discovery is off.
    pub fn fresh_state(&self) -> DiscoveryState {
        if self.enabled {
            DiscoveryState::empty(self.waypoints.len())
        } else {
            DiscoveryState::full(self.waypoints.len())
        }
    }

    /// Returns true if `waypoint` can be used as a relay.
    #[inline]
    pub fn is_discovered(&self, waypoint: &Point, state: &DiscoveryState) -> bool {
        !self.enabled || state.contains(waypoint.id)
    }

    /// Discovers every waypoint whose radius contains `point`.
    pub fn discover_at(&self, point: &Point, state: &mut DiscoveryState) {
        if !self.enabled {
            return;
        }
        for waypoint in self.waypoints {
            let Some(radius) = waypoint.radius() else {
                continue;
            };
            if euclidean_distance(point.position(), waypoint.position()) <= radius
                && state.insert(waypoint.id)
            {
                log::trace!("waypoint {} discovered at {}", waypoint.id, point.label());
            }
        }
    }

    /// Discovers every undiscovered waypoint whose circle the segment
    /// `from → to` touches.
    pub fn discover_along(&self, from: &Point, to: &Point, state: &mut DiscoveryState) {
        if !self.enabled {
            return;
        }
        for waypoint in self.waypoints {
            if state.contains(waypoint.id) {
                continue;
            }
            let Some(radius) = waypoint.radius() else {
                continue;
            };
            if segment_intersects_circle(
                from.position(),
                to.position(),
                waypoint.position(),
                radius,
            ) {
                state.insert(waypoint.id);
                log::trace!(
                    "waypoint {} discovered along {} -> {}",
                    waypoint.id,
                    from.label(),
                    to.label()
                );
            }
        }
    }
}
