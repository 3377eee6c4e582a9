//! Tour assembly helpers.

use teleroute_core::Point;

/// `start`, then `points` in the given order, then `destination`.
pub(crate) fn straight_tour(start: &Point, points: &[Point], destination: Option<&Point>) -> Vec<Point> {
    let mut tour = Vec::with_capacity(points.len() + 2);
    tour.push(*start);
    tour.extend_from_slice(points);
    tour.extend(destination.copied());
    tour
}

/// Inserts `points` in front of the destination, or at the tail when there is none.
pub(crate) fn append_unplaced(tour: &mut Vec<Point>, points: &[Point], has_destination: bool) {
    let at = if has_destination {
        tour.len().saturating_sub(1).max(1)
    } else {
        tour.len()
    };
    tour.splice(at..at, points.iter().copied());
}

/// Whether `tour` visits every entry of `points` as often as it is listed.
///
/// Explicit waypoint stops are detours, not visits, and are not counted.
pub(crate) fn visits_each_once(tour: &[Point], points: &[Point]) -> bool {
    points.iter().all(|p| {
        let listed = points.iter().filter(|q| q.same_identity(p)).count();
        let visited = tour
            .iter()
            .filter(|q| !q.explicit_visit && q.same_identity(p))
            .count();
        listed == visited
    })
}
