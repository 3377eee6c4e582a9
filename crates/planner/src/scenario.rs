//! Expansion of endpoint modes into concrete scenarios.

use teleroute_core::{EndpointMode, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One concrete routing problem: visit every point, then stop at the
/// destination if there is one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// Where the route must finish.
    pub destination: Option<Point>,
    /// Points to visit in any order.
    pub points_to_visit: Vec<Point>,
}

impl Scenario {
    /// Number of points to visit.
    pub fn len(&self) -> usize {
        self.points_to_visit.len()
    }

    /// Whether there is nothing to visit.
    pub fn is_empty(&self) -> bool {
        self.points_to_visit.is_empty()
    }
}

/// Builds the scenarios for `mode`.
///
/// - OR with ends: one scenario per end, finishing there.
/// - OR without ends: a single open scenario.
/// - AND: a single open scenario with every end folded into the visit set.
pub fn build_scenarios(mode: EndpointMode, ends: &[Point], targets: &[Point]) -> Vec<Scenario> {
    match mode {
        EndpointMode::Or if ends.is_empty() => vec![Scenario {
            destination: None,
            points_to_visit: targets.to_vec(),
        }],
        EndpointMode::Or => ends
            .iter()
            .map(|end| Scenario {
                destination: Some(*end),
                points_to_visit: targets.to_vec(),
            })
            .collect(),
        EndpointMode::And => {
            let mut points_to_visit = targets.to_vec();
            points_to_visit.extend_from_slice(ends);
            vec![Scenario {
                destination: None,
                points_to_visit,
            }]
        }
    }
}
