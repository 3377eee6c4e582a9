//! Map points and their kinds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest discovery radius a waypoint may have.
pub const MIN_WAYPOINT_RADIUS: f64 = 15.0;

/// Discovery radius given to freshly placed waypoints.
pub const DEFAULT_WAYPOINT_RADIUS: f64 = 30.0;

/// Marker categories of the multi-category planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Heart,
    Scout,
    Vista,
    PointOfInterest,
    Dodge,
    Event,
    Harvest,
    Mining,
    Logging,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 9] = [
        Category::Heart,
        Category::Scout,
        Category::Vista,
        Category::PointOfInterest,
        Category::Dodge,
        Category::Event,
        Category::Harvest,
        Category::Mining,
        Category::Logging,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Heart => "Heart",
            Category::Scout => "Scout",
            Category::Vista => "Vista",
            Category::PointOfInterest => "Point of Interest",
            Category::Dodge => "Dodge",
            Category::Event => "Possible Event",
            Category::Harvest => "Harvest",
            Category::Mining => "Mining",
            Category::Logging => "Logging",
        }
    }

    /// Route label prefix: the initials of the name.
    pub fn prefix(self) -> String {
        self.name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// What a point represents on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointKind {
    /// Route origin.
    Start,
    /// Route end (a destination in OR mode, a mandatory stop in AND mode).
    End,
    /// A mandatory point to visit.
    Required,
    /// A teleport hub, discovered by passing within `radius`.
    Waypoint {
        /// Discovery radius.
        radius: f64,
    },
    /// A marker of the multi-category planner.
    CategoryMarker {
        /// Marker category.
        category: Category,
    },
}

/// A point placed on the map.
///
/// `id` is unique within the point's group (start, ends, required points,
/// waypoints, or one marker category) and ids are dense from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Dense id within the point's group.
    pub id: usize,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Point kind.
    pub kind: PointKind,
    /// True only for waypoints spliced into a route as a real stop.
    pub explicit_visit: bool,
}

impl Point {
    fn new(id: usize, x: f64, y: f64, kind: PointKind) -> Self {
        Self {
            id,
            x,
            y,
            kind,
            explicit_visit: false,
        }
    }

    /// Creates the start point.
    pub fn start(x: f64, y: f64) -> Self {
        Self::new(0, x, y, PointKind::Start)
    }

    /// Creates an end point.
    pub fn end(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, x, y, PointKind::End)
    }

    /// Creates a required point.
    pub fn required(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, x, y, PointKind::Required)
    }

    /// Creates a waypoint. The radius is clamped to [`MIN_WAYPOINT_RADIUS`].
    pub fn waypoint(id: usize, x: f64, y: f64, radius: f64) -> Self {
        Self::new(
            id,
            x,
            y,
            PointKind::Waypoint {
                radius: radius.max(MIN_WAYPOINT_RADIUS),
            },
        )
    }

    /// Creates a category marker.
    pub fn marker(id: usize, category: Category, x: f64, y: f64) -> Self {
        Self::new(id, x, y, PointKind::CategoryMarker { category })
    }

    /// Returns the coordinates as a tuple.
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns true for waypoints.
    #[inline]
    pub fn is_waypoint(&self) -> bool {
        matches!(self.kind, PointKind::Waypoint { .. })
    }

    /// Returns true for end points.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.kind, PointKind::End)
    }

    /// Discovery radius, if this point is a waypoint.
    #[inline]
    pub fn radius(&self) -> Option<f64> {
        match self.kind {
            PointKind::Waypoint { radius } => Some(radius),
            _ => None,
        }
    }

    /// Returns a copy tagged as an explicit stop.
    pub fn as_explicit_visit(&self) -> Self {
        Self {
            explicit_visit: true,
            ..*self
        }
    }

    /// Returns true if `other` is the same placed point (kind and id),
    /// ignoring the explicit-visit tag.
    pub fn same_identity(&self, other: &Point) -> bool {
        if self.id != other.id {
            return false;
        }
        match (self.kind, other.kind) {
            (PointKind::Start, PointKind::Start)
            | (PointKind::End, PointKind::End)
            | (PointKind::Required, PointKind::Required)
            | (PointKind::Waypoint { .. }, PointKind::Waypoint { .. }) => true,
            (
                PointKind::CategoryMarker { category: a },
                PointKind::CategoryMarker { category: b },
            ) => a == b,
            _ => false,
        }
    }

    /// Short route label (`Start`, `E1`, `P2`, `W3`, `~W3`, `POI1`, ...).
    ///
    /// Waypoints used as a teleport relay get a `~` prefix; explicit stops
    /// do not.
    pub fn label(&self) -> String {
        match self.kind {
            PointKind::Start => "Start".to_string(),
            PointKind::End => format!("E{}", self.id + 1),
            PointKind::Required => format!("P{}", self.id + 1),
            PointKind::Waypoint { .. } if self.explicit_visit => format!("W{}", self.id + 1),
            PointKind::Waypoint { .. } => format!("~W{}", self.id + 1),
            PointKind::CategoryMarker { category } => {
                format!("{}{}", category.prefix(), self.id + 1)
            }
        }
    }
}
