//! Computation entry points.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teleroute_core::{
    insert_waypoints, AlgorithmResult, ComputationResult, Error, Point, Result, RouteMetric,
};

use crate::algorithm::Algorithm;
use crate::request::{ComputationRequest, Targets};
use crate::scenario::{build_scenarios, Scenario};
use crate::subset::select_subset;
use crate::tour::visits_each_once;

/// Runs every applicable algorithm on `request` and returns their routes.
///
/// Randomness comes from `config.seed` when set, otherwise from entropy.
pub fn solve(request: &ComputationRequest) -> Result<ComputationResult> {
    let mut rng = match request.config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    solve_with_rng(request, &mut rng)
}

/// Like [`solve`], drawing randomness from `rng`.
pub fn solve_with_rng<R: Rng + ?Sized>(
    request: &ComputationRequest,
    rng: &mut R,
) -> Result<ComputationResult> {
    let started = Instant::now();
    request.validate()?;

    let config = &request.config;
    let start = request.start.ok_or(Error::MissingStart)?;
    let visit = visit_set(request, &start, rng);

    if visit.len() > config.large_request_threshold {
        log::warn!(
            "routing through {} points; this may take a while",
            visit.len()
        );
    }

    let metric = RouteMetric::new(&request.waypoints, config.discovery, config.endpoint_mode);
    let scenarios = build_scenarios(config.endpoint_mode, &request.ends, &visit);
    let point_count = scenarios.iter().map(Scenario::len).max().unwrap_or(0);

    let mut result = ComputationResult::new();
    for algorithm in Algorithm::suite(point_count, config) {
        let name = algorithm.name();
        let mut best: Option<AlgorithmResult> = None;

        for scenario in &scenarios {
            let raw = algorithm.build_tour(
                &metric,
                &start,
                scenario.destination.as_ref(),
                &scenario.points_to_visit,
                config,
                rng,
            );
            debug_assert!(
                visits_each_once(&raw, &scenario.points_to_visit),
                "{} dropped or repeated a point",
                name
            );
            let path = insert_waypoints(&metric, &raw);
            let distance = metric.evaluate(&path);

            log::debug!(
                "{} to {}: {:.2}",
                name,
                scenario
                    .destination
                    .as_ref()
                    .map_or_else(|| "open end".to_string(), Point::label),
                distance
            );

            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(AlgorithmResult::new(name.clone(), path, distance));
            }
        }

        result.results.extend(best);
    }

    result.select_best();
    result.discovered_waypoints = result
        .best()
        .map(|best| metric.discovered_along(&best.path))
        .unwrap_or_default();
    result.visited = visit;
    result.computation_time_ms = started.elapsed().as_millis() as u64;

    if let Some(best) = result.best() {
        log::info!(
            "best route: {} at {:.2} ({} waypoints discovered, {} ms)",
            best.name,
            best.distance,
            result.discovered_waypoints.len(),
            result.computation_time_ms
        );
    }

    Ok(result)
}

fn visit_set<R: Rng + ?Sized>(request: &ComputationRequest, start: &Point, rng: &mut R) -> Vec<Point> {
    match &request.targets {
        Targets::Required(points) => points.clone(),
        Targets::Categories(targets) => {
            select_subset(
                start,
                &request.ends,
                &request.waypoints,
                targets,
                request.config.subset_trials,
                rng,
            )
            .points
        }
    }
}
