//! Speculative waypoint detours shared by the construction heuristics.
//!
//! While discovery is on, a builder may walk to an undiscovered waypoint on
//! its way to the next point so that later legs can teleport through it.
//! The detour is credited with the waypoint's estimated future value,
//! spread over the points still to visit.

use teleroute_core::{DiscoveryState, Point, RouteMetric};

/// An undiscovered waypoint and the credit for detouring through it now.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Detour<'a> {
    pub waypoint: &'a Point,
    pub credit: f64,
}

/// Detour candidates for the current step. Empty when discovery is off.
pub(crate) fn detour_candidates<'a>(
    metric: &RouteMetric<'a>,
    remaining: &[Point],
    state: &DiscoveryState,
) -> Vec<Detour<'a>> {
    let discovery = metric.discovery();
    if !discovery.is_enabled() || remaining.is_empty() {
        return Vec::new();
    }

    let spread = remaining.len() as f64;
    metric
        .waypoints()
        .iter()
        .filter(|w| !discovery.is_discovered(w, state))
        .map(|waypoint| Detour {
            waypoint,
            credit: metric.waypoint_value(waypoint, remaining, state) / spread,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use teleroute_core::EndpointMode;

    #[test]
    fn test_no_candidates_without_discovery() {
        let wps = vec![Point::waypoint(0, 10.0, 10.0, 15.0)];
        let metric = RouteMetric::new(&wps, false, EndpointMode::Or);
        let state = metric.discovery().fresh_state();
        let remaining = vec![Point::required(0, 0.0, 0.0)];
        assert!(detour_candidates(&metric, &remaining, &state).is_empty());
    }

    #[test]
    fn test_only_undiscovered_waypoints() {
        let wps = vec![
            Point::waypoint(0, 10.0, 10.0, 15.0),
            Point::waypoint(1, 90.0, 10.0, 15.0),
        ];
        let metric = RouteMetric::new(&wps, true, EndpointMode::Or);
        let mut state = metric.discovery().fresh_state();
        state.insert(0);

        let remaining = vec![Point::required(0, 0.0, 0.0), Point::required(1, 95.0, 0.0)];
        let candidates = detour_candidates(&metric, &remaining, &state);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].waypoint.id, 1);
        assert!(candidates[0].credit > 0.0);
    }
}
