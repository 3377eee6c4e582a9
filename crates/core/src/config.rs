//! Configuration for route computation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How end points constrain the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndpointMode {
    /// Finish at whichever end point gives the shortest route.
    #[default]
    Or,
    /// Visit every end point; leaving an end requires a teleport.
    And,
}

/// Configuration parameters for route computation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteConfig {
    /// Endpoint semantics.
    pub endpoint_mode: EndpointMode,

    /// When false every waypoint is usable from the start.
    /// When true a waypoint becomes usable once the route passes within its radius.
    pub discovery: bool,

    /// Brute force runs only when every scenario has at most this many points.
    pub brute_force_max_points: usize,

    /// Cap on permutations explored by brute force.
    pub max_permutations: usize,

    /// Cap on position checks made by greedy insertion.
    pub max_insertion_checks: usize,

    /// Nearest neighbor + 2-opt runs only up to this many points.
    pub two_opt_max_points: usize,

    /// Random trials made by subset selection.
    pub subset_trials: usize,

    /// Target count above which a warning is logged.
    pub large_request_threshold: usize,

    /// Seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            endpoint_mode: EndpointMode::Or,
            discovery: false,
            brute_force_max_points: 7,
            max_permutations: 50_000,
            max_insertion_checks: 10_000,
            two_opt_max_points: 20,
            subset_trials: 20,
            large_request_threshold: 25,
            seed: None,
        }
    }
}

impl RouteConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint mode.
    pub fn with_endpoint_mode(mut self, mode: EndpointMode) -> Self {
        self.endpoint_mode = mode;
        self
    }

    /// Enables or disables waypoint discovery.
    pub fn with_discovery(mut self, enabled: bool) -> Self {
        self.discovery = enabled;
        self
    }

    /// Sets the brute-force point limit.
    pub fn with_brute_force_max_points(mut self, points: usize) -> Self {
        self.brute_force_max_points = points;
        self
    }

    /// Sets the permutation cap.
    pub fn with_max_permutations(mut self, permutations: usize) -> Self {
        self.max_permutations = permutations.max(1);
        self
    }

    /// Sets the greedy-insertion check cap.
    pub fn with_max_insertion_checks(mut self, checks: usize) -> Self {
        self.max_insertion_checks = checks;
        self
    }

    /// Sets the nearest neighbor + 2-opt point limit.
    pub fn with_two_opt_max_points(mut self, points: usize) -> Self {
        self.two_opt_max_points = points;
        self
    }

    /// Sets the number of subset-selection trials.
    pub fn with_subset_trials(mut self, trials: usize) -> Self {
        self.subset_trials = trials.max(1);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
