//! The tour-construction algorithms run for each computation.

use rand::Rng;
use teleroute_core::{Point, RouteConfig, RouteMetric};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::brute_force::brute_force;
use crate::greedy::greedy_insertion;
use crate::nearest_neighbor::nearest_neighbor;
use crate::random_restart::{random_restart, restart_attempts};
use crate::two_opt::two_opt;

/// A tour-construction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Exhaustive search (small instances only).
    BruteForce,
    /// Cheapest next point, with speculative waypoint detours.
    NearestNeighbor,
    /// Nearest neighbor polished by 2-opt.
    NearestNeighborTwoOpt,
    /// Cheapest insertion.
    GreedyInsertion,
    /// Shuffled orders polished by 2-opt.
    RandomRestart {
        /// Number of shuffles.
        attempts: usize,
    },
}

impl Algorithm {
    /// Display name, also used as the result key.
    pub fn name(&self) -> String {
        match self {
            Self::BruteForce => "Brute Force (Optimal)".to_string(),
            Self::NearestNeighbor => "Nearest Neighbor".to_string(),
            Self::NearestNeighborTwoOpt => "Nearest Neighbor + 2-Opt".to_string(),
            Self::GreedyInsertion => "Greedy Insertion".to_string(),
            Self::RandomRestart { attempts } => format!("Random Restart ({}x)", attempts),
        }
    }

    /// The algorithms worth running when the largest scenario has
    /// `point_count` points to visit.
    pub fn suite(point_count: usize, config: &RouteConfig) -> Vec<Algorithm> {
        let mut suite = Vec::with_capacity(5);
        if point_count <= config.brute_force_max_points {
            suite.push(Self::BruteForce);
        }
        suite.push(Self::NearestNeighbor);
        if point_count <= config.two_opt_max_points {
            suite.push(Self::NearestNeighborTwoOpt);
        }
        suite.push(Self::GreedyInsertion);
        suite.push(Self::RandomRestart {
            attempts: restart_attempts(point_count),
        });
        suite
    }

    /// Builds a raw tour from `start` through `points`, ending at
    /// `destination` when there is one.
    pub fn build_tour<R: Rng + ?Sized>(
        &self,
        metric: &RouteMetric<'_>,
        start: &Point,
        destination: Option<&Point>,
        points: &[Point],
        config: &RouteConfig,
        rng: &mut R,
    ) -> Vec<Point> {
        match *self {
            Self::BruteForce => {
                brute_force(metric, start, destination, points, config.max_permutations)
            }
            Self::NearestNeighbor => nearest_neighbor(metric, start, destination, points),
            Self::NearestNeighborTwoOpt => {
                let tour = nearest_neighbor(metric, start, destination, points);
                two_opt(metric, tour, destination.is_some())
            }
            Self::GreedyInsertion => {
                greedy_insertion(metric, start, destination, points, config.max_insertion_checks)
            }
            Self::RandomRestart { attempts } => {
                random_restart(metric, start, destination, points, attempts, rng)
            }
        }
    }
}
