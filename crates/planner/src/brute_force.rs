//! Exhaustive search.
//!
//! Enumerates every visiting order of the points. With discovery enabled
//! each waypoint may also be visited once as an explicit stop anywhere in
//! the order, which covers every route the detour heuristics can build.
//!
//! Candidates are scored the way the solver scores a finished route: after
//! relay insertion. A raw walk and a relay walk are extended together, and
//! the cheaper of the two prefix costs bounds every completion, so branches
//! that cannot beat the best route found are cut. The number of complete
//! candidates scored is capped; once the cap is hit the best route found so
//! far is returned.

use teleroute_core::{keeps_relays, relay_step, PathWalk, Point, RouteMetric};

use crate::tour::straight_tour;

/// Finds the cheapest route through `points` by trying every order.
pub fn brute_force(
    metric: &RouteMetric<'_>,
    start: &Point,
    destination: Option<&Point>,
    points: &[Point],
    max_permutations: usize,
) -> Vec<Point> {
    if points.is_empty() {
        return straight_tour(start, points, destination);
    }

    let stops: Vec<Point> = if metric.discovery().is_enabled() {
        metric
            .waypoints()
            .iter()
            .map(Point::as_explicit_visit)
            .collect()
    } else {
        Vec::new()
    };

    let mut search = ExhaustiveSearch {
        metric,
        destination,
        points,
        stops: &stops,
        max_permutations,
        explored: 0,
        placed: 0,
        path: Vec::with_capacity(points.len() + stops.len() + 2),
        used: vec![false; points.len()],
        stop_used: vec![false; stops.len()],
        best: None,
    };
    search.path.push(*start);
    let walk = metric.begin_walk(start);
    search.extend(&walk, &walk);

    if search.explored >= max_permutations {
        log::warn!(
            "brute force stopped at {} candidates for {} points; returning best so far",
            search.explored,
            points.len()
        );
    }

    match search.best {
        Some((_, path)) => path,
        None => straight_tour(start, points, destination),
    }
}

struct ExhaustiveSearch<'m, 'a> {
    metric: &'m RouteMetric<'a>,
    destination: Option<&'m Point>,
    points: &'m [Point],
    stops: &'m [Point],
    max_permutations: usize,
    explored: usize,
    placed: usize,
    path: Vec<Point>,
    used: Vec<bool>,
    stop_used: Vec<bool>,
    best: Option<(f64, Vec<Point>)>,
}

impl ExhaustiveSearch<'_, '_> {
    /// `raw` walks `self.path` as is; `relayed` walks it with relays spliced.
    fn extend(&mut self, raw: &PathWalk, relayed: &PathWalk) {
        if self.explored >= self.max_permutations {
            return;
        }
        if let Some((best, _)) = &self.best {
            if raw.cost().min(relayed.cost()) >= *best {
                return;
            }
        }

        if self.placed == self.points.len() {
            self.score(raw, relayed);
        }

        for i in 0..self.points.len() {
            if self.used[i] {
                continue;
            }
            self.used[i] = true;
            self.placed += 1;
            self.descend(raw, relayed, self.points[i]);
            self.placed -= 1;
            self.used[i] = false;
        }

        for i in 0..self.stops.len() {
            if self.stop_used[i] {
                continue;
            }
            self.stop_used[i] = true;
            self.descend(raw, relayed, self.stops[i]);
            self.stop_used[i] = false;
        }
    }

    fn descend(&mut self, raw: &PathWalk, relayed: &PathWalk, next: Point) {
        let mut raw = raw.clone();
        let mut relayed = relayed.clone();
        self.metric.step(&mut raw, &next);
        relay_step(self.metric, &mut relayed, &next);

        self.path.push(next);
        self.extend(&raw, &relayed);
        self.path.pop();
    }

    /// Scores the current path as a complete route.
    fn score(&mut self, raw: &PathWalk, relayed: &PathWalk) {
        self.explored += 1;

        let (mut raw, mut relayed) = (raw.clone(), relayed.clone());
        if let Some(destination) = self.destination {
            self.metric.step(&mut raw, destination);
            relay_step(self.metric, &mut relayed, destination);
        }
        let cost = if keeps_relays(raw.cost(), relayed.cost()) {
            relayed.cost()
        } else {
            raw.cost()
        };

        if self.best.as_ref().map_or(true, |(best, _)| cost < *best) {
            let mut path = self.path.clone();
            path.extend(self.destination.copied());
            self.best = Some((cost, path));
        }
    }
}
