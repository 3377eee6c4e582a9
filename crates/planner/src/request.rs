//! Computation requests and their validation.

use std::collections::BTreeMap;

use teleroute_core::{
    Category, EndpointMode, Error, Point, Result, RouteConfig, Shortfall, MIN_WAYPOINT_RADIUS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category markers and how many of each must be visited.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryTargets {
    /// Placed markers per category.
    pub points: BTreeMap<Category, Vec<Point>>,
    /// Markers to visit per category; missing or zero means optional.
    pub requirements: BTreeMap<Category, usize>,
    /// Waypoints to visit as targets.
    pub waypoint_requirement: usize,
}

impl CategoryTargets {
    /// Creates an empty target set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `points` as the markers of `category`.
    pub fn with_points(mut self, category: Category, points: Vec<Point>) -> Self {
        self.points.insert(category, points);
        self
    }

    /// Requires `count` markers of `category`.
    pub fn with_requirement(mut self, category: Category, count: usize) -> Self {
        self.requirements.insert(category, count);
        self
    }

    /// Requires `count` waypoints to be visited.
    pub fn with_waypoint_requirement(mut self, count: usize) -> Self {
        self.waypoint_requirement = count;
        self
    }

    /// Requirement for `category` (zero when unset).
    pub fn requirement(&self, category: Category) -> usize {
        self.requirements.get(&category).copied().unwrap_or(0)
    }

    /// Markers placed for `category`.
    pub fn markers(&self, category: Category) -> &[Point] {
        self.points.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of placed markers.
    pub fn marker_count(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }
}

/// What a computation must visit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Targets {
    /// Every point must be visited.
    Required(Vec<Point>),
    /// A number of markers per category, chosen by subset selection.
    Categories(CategoryTargets),
}

impl Default for Targets {
    fn default() -> Self {
        Targets::Required(Vec::new())
    }
}

/// Everything one route computation needs.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputationRequest {
    /// Where the route begins.
    pub start: Option<Point>,
    /// Candidate (OR) or mandatory (AND) end points.
    pub ends: Vec<Point>,
    /// Teleport hubs, with dense ids `0..n`.
    pub waypoints: Vec<Point>,
    /// What must be visited.
    pub targets: Targets,
    /// Modes and search limits.
    pub config: RouteConfig,
}

impl ComputationRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start point.
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end points.
    pub fn with_ends(mut self, ends: Vec<Point>) -> Self {
        self.ends = ends;
        self
    }

    /// Sets the waypoints.
    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Visits every point in `points`.
    pub fn with_required(mut self, points: Vec<Point>) -> Self {
        self.targets = Targets::Required(points);
        self
    }

    /// Visits a subset of category markers.
    pub fn with_categories(mut self, targets: CategoryTargets) -> Self {
        self.targets = Targets::Categories(targets);
        self
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    /// Checks every precondition, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.start.is_none() {
            return Err(Error::MissingStart);
        }

        for (expected, waypoint) in self.waypoints.iter().enumerate() {
            validate_waypoint(expected, waypoint)?;
        }

        if self.config.endpoint_mode == EndpointMode::And
            && !self.ends.is_empty()
            && self.waypoints.is_empty()
        {
            return Err(Error::AndModeWithoutWaypoint {
                ends: self.ends.len(),
            });
        }

        if let Targets::Categories(targets) = &self.targets {
            self.validate_categories(targets)?;
        }

        Ok(())
    }

    fn validate_categories(&self, targets: &CategoryTargets) -> Result<()> {
        if targets.marker_count() == 0 {
            return Err(Error::NoMarkers);
        }

        let shortfalls: Vec<Shortfall> = targets
            .requirements
            .iter()
            .filter(|&(_, &required)| required > 0)
            .filter_map(|(&category, &required)| {
                let available = targets.markers(category).len();
                (required > available).then_some(Shortfall {
                    category,
                    required,
                    available,
                })
            })
            .collect();
        if !shortfalls.is_empty() {
            return Err(Error::UnmetRequirements(shortfalls));
        }

        if targets.waypoint_requirement > self.waypoints.len() {
            return Err(Error::WaypointShortfall {
                required: targets.waypoint_requirement,
                available: self.waypoints.len(),
            });
        }

        let anything_required = targets.requirements.values().any(|&n| n > 0)
            || targets.waypoint_requirement > 0;
        if !anything_required {
            return Err(Error::NothingToVisit);
        }

        Ok(())
    }
}

fn validate_waypoint(expected: usize, waypoint: &Point) -> Result<()> {
    if waypoint.id != expected {
        return Err(Error::InvalidWaypoint {
            id: waypoint.id,
            reason: format!("waypoint ids must be dense, expected {}", expected),
        });
    }
    match waypoint.radius() {
        None => Err(Error::InvalidWaypoint {
            id: waypoint.id,
            reason: "not a waypoint".to_string(),
        }),
        Some(radius) if radius < MIN_WAYPOINT_RADIUS => Err(Error::InvalidWaypoint {
            id: waypoint.id,
            reason: format!("radius {} is below the minimum of {}", radius, MIN_WAYPOINT_RADIUS),
        }),
        Some(_) => Ok(()),
    }
}
