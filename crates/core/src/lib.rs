//! # Teleroute Core
//!
//! Point model and discovery-aware distance for the teleroute planner.
//!
//! Routes are planned over points placed on a map. Waypoints are teleport
//! hubs: once a route has passed within a waypoint's radius, any later leg
//! may teleport to it for free and walk on from there. Because discovery
//! depends on the route walked so far, the cost of an edge depends on
//! everything before it, and a route can only be scored as a whole.
//!
//! ## Core Components
//!
//! - **Geometry**: [`geometry::euclidean_distance`], [`geometry::segment_intersects_circle`]
//! - **Points**: [`Point`], [`PointKind`], [`Category`]
//! - **Discovery**: [`DiscoveryModel`], [`DiscoveryState`]
//! - **Metric**: [`RouteMetric`] - distance, relay lookup, path evaluation
//! - **Post-processing**: [`insert_waypoints`]
//! - **Configuration**: [`RouteConfig`], [`EndpointMode`]
//!
//! ## Example
//!
//! ```rust
//! use teleroute_core::{EndpointMode, Point, RouteMetric};
//!
//! let waypoints = vec![Point::waypoint(0, 50.0, 0.0, 10.0)];
//! let metric = RouteMetric::new(&waypoints, true, EndpointMode::Or);
//!
//! let path = vec![
//!     Point::start(0.0, 0.0),
//!     Point::required(0, 100.0, 0.0),
//!     Point::required(1, 50.0, 3.0),
//! ];
//! // The first leg discovers the waypoint, the second teleports through it.
//! assert!((metric.evaluate(&path) - 103.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod discovery;
pub mod error;
pub mod geometry;
pub mod insertion;
pub mod metric;
pub mod point;
pub mod result;

// Re-exports
pub use config::{EndpointMode, RouteConfig};
pub use discovery::{DiscoveryModel, DiscoveryState};
pub use error::{Error, Result, Shortfall};
pub use insertion::{insert_waypoints, keeps_relays, relay_step};
pub use metric::{PathWalk, RouteMetric, TELEPORT_COST, UNREACHABLE_PENALTY};
pub use point::{Category, Point, PointKind, DEFAULT_WAYPOINT_RADIUS, MIN_WAYPOINT_RADIUS};
pub use result::{AlgorithmResult, ComputationResult};
