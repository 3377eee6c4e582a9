//! Route computation results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// The best route one algorithm found across all scenarios.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmResult {
    /// Algorithm display name.
    pub name: String,
    /// Route, including relay and explicit waypoint stops.
    pub path: Vec<Point>,
    /// Evaluated route cost.
    pub distance: f64,
}

impl AlgorithmResult {
    /// Creates a new result.
    pub fn new(name: impl Into<String>, path: Vec<Point>, distance: f64) -> Self {
        Self {
            name: name.into(),
            path,
            distance,
        }
    }

    /// Route labels joined with arrows, e.g. `Start → P1 → ~W1 → E1`.
    pub fn route_summary(&self) -> String {
        self.path
            .iter()
            .map(Point::label)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Result of one route computation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputationResult {
    /// One result per algorithm that ran, in run order.
    pub results: Vec<AlgorithmResult>,

    /// Index into `results` of the shortest route.
    pub best_index: Option<usize>,

    /// The points the algorithms were asked to visit (after subset selection).
    pub visited: Vec<Point>,

    /// Waypoint ids discovered along the best route.
    pub discovered_waypoints: Vec<usize>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl ComputationResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            best_index: None,
            visited: Vec::new(),
            discovered_waypoints: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// The shortest route, if any algorithm ran.
    pub fn best(&self) -> Option<&AlgorithmResult> {
        self.best_index.and_then(|i| self.results.get(i))
    }

    /// Looks up a result by algorithm name.
    pub fn by_name(&self, name: &str) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Recomputes `best_index` as the minimum-distance result.
    /// Ties keep the earlier result.
    pub fn select_best(&mut self) {
        self.best_index = self
            .results
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, r)| match best {
                Some((_, d)) if d <= r.distance => best,
                _ => Some((i, r.distance)),
            })
            .map(|(i, _)| i);
    }
}

impl Default for ComputationResult {
    fn default() -> Self {
        Self::new()
    }
}
