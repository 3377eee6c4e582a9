//! Error types for route computation.

use std::fmt;

use crate::point::Category;

/// Result alias used throughout teleroute.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected before any route is computed.
///
/// Search-space overflow and unreachable targets are not errors: the
/// algorithms degrade gracefully and the penalty cost steers them away.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No start point was placed.
    #[error("please set a start point")]
    MissingStart,

    /// AND mode needs a waypoint to teleport out of each mandatory end.
    #[error(
        "AND mode requires at least one waypoint to handle mandatory teleportation from {ends} endpoint(s)"
    )]
    AndModeWithoutWaypoint {
        /// Number of end points in the request.
        ends: usize,
    },

    /// One or more marker categories have fewer markers than required.
    #[error("requirements not met:\n{}", format_shortfalls(.0))]
    UnmetRequirements(Vec<Shortfall>),

    /// More waypoints are required than were placed.
    #[error("requirements not met:\nWaypoint: need {required}, have {available}")]
    WaypointShortfall {
        /// Requested waypoint count.
        required: usize,
        /// Placed waypoint count.
        available: usize,
    },

    /// Category mode with no markers placed at all.
    #[error("please place at least one marker on the map")]
    NoMarkers,

    /// Category mode where every requirement is zero.
    #[error("no points to visit; set a requirement above zero for at least one marker type")]
    NothingToVisit,

    /// A waypoint violates the placement invariants.
    #[error("invalid waypoint {id}: {reason}")]
    InvalidWaypoint {
        /// Waypoint id.
        id: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// A category whose supply is below its requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    /// Under-supplied category.
    pub category: Category,
    /// Requested count.
    pub required: usize,
    /// Placed count.
    pub available: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: need {}, have {}",
            self.category.name(),
            self.required,
            self.available
        )
    }
}

fn format_shortfalls(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
