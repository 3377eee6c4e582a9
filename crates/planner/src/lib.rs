//! Route planning over discovery-aware distances.
//!
//! Given a start, optional ends, teleport waypoints, and the points to
//! visit, this crate runs a suite of tour-construction algorithms and
//! reports each one's best route:
//!
//! 1. **Validation**: reject requests that cannot be routed
//! 2. **Subset selection**: for category targets, choose which markers to visit
//! 3. **Scenarios**: expand the endpoint mode into concrete destinations
//! 4. **Construction**: brute force, nearest neighbor, nearest neighbor +
//!    2-opt, greedy insertion and random restart, each on every scenario
//! 5. **Relay insertion**: splice the teleport hubs each leg would use
//! 6. **Selection**: the cheapest evaluated route wins
//!
//! Every route is scored by [`RouteMetric::evaluate`], which walks the path
//! from the start and tracks which waypoints have been discovered so far.
//!
//! # Example
//!
//! ```rust
//! use teleroute_planner::{solve, ComputationRequest, Point, RouteConfig};
//!
//! let request = ComputationRequest::new()
//!     .with_start(Point::start(0.0, 0.0))
//!     .with_required(vec![Point::required(0, 10.0, 0.0), Point::required(1, 0.0, 10.0)])
//!     .with_config(RouteConfig::default().with_seed(42));
//!
//! let result = solve(&request).unwrap();
//! let best = result.best().unwrap();
//! assert!((best.distance - (10.0 + 200f64.sqrt())).abs() < 1e-9);
//! ```

pub mod algorithm;
pub mod brute_force;
mod detour;
pub mod greedy;
pub mod nearest_neighbor;
pub mod random_restart;
pub mod request;
pub mod scenario;
pub mod solver;
pub mod subset;
mod tour;
pub mod two_opt;

pub use algorithm::Algorithm;
pub use request::{CategoryTargets, ComputationRequest, Targets};
pub use scenario::{build_scenarios, Scenario};
pub use solver::{solve, solve_with_rng};
pub use subset::{estimate_tour, select_subset, SubsetSelection};

pub use teleroute_core::{
    AlgorithmResult, Category, ComputationResult, EndpointMode, Error, Point, PointKind, Result,
    RouteConfig, RouteMetric, Shortfall,
};
