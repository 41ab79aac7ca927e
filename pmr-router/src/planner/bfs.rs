//! Bounded breadth-first route search.
//!
//! Explores simple paths outward from the start station one connection at
//! a time. Each partial path carries its own station list, so a station may
//! appear on many paths but never twice on the same one. The search stops
//! after `max_transfers` levels, which keeps the work bounded by
//! branching-factor^max_transfers even on dense graphs.
//!
//! Among all paths reaching the destination the winner is chosen by:
//! 1. Total duration (shorter is better)
//! 2. Total distance (shorter is better)
//! 3. Station-id sequence (lexicographically smaller is better)
//! 4. Line sequence (lexicographically smaller is better)
//!
//! so repeated queries on unchanged data always return the same path.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::{Connection, Station};
use crate::index::{StationGraph, StationIndex, StationStore};

use super::cancel::CancelToken;
use super::config::{RouteOptions, SearchConfig};
use super::outcome::{RouteError, RouteOutcome};

/// A path chosen by the solver, before pricing.
#[derive(Debug, Clone)]
pub struct SolvedPath {
    pub stations: Vec<Station>,
    pub connections: Vec<Connection>,
    pub total_duration: u64,
    pub total_distance: u64,
    /// Number of partial paths generated during the search.
    pub paths_explored: usize,
}

impl SolvedPath {
    pub fn station_ids(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Partial path on the frontier, borrowing from the graph snapshot.
#[derive(Clone)]
struct PartialPath<'g> {
    stations: Vec<&'g Station>,
    connections: Vec<&'g Connection>,
    duration: u64,
    distance: u64,
}

impl<'g> PartialPath<'g> {
    fn start(station: &'g Station) -> Self {
        Self {
            stations: vec![station],
            connections: Vec::new(),
            duration: 0,
            distance: 0,
        }
    }

    fn tail(&self) -> &'g Station {
        self.stations[self.stations.len() - 1]
    }

    fn visits(&self, station: &Station) -> bool {
        self.stations.iter().any(|s| s.id == station.id)
    }

    fn extend(&self, connection: &'g Connection, next: &'g Station) -> Self {
        let mut stations = self.stations.clone();
        stations.push(next);
        let mut connections = self.connections.clone();
        connections.push(connection);
        Self {
            stations,
            connections,
            duration: self.duration + u64::from(connection.duration_seconds),
            distance: self.distance + u64::from(connection.distance_meters),
        }
    }

    /// Totals-only comparison. Extending a path never lowers its totals,
    /// so a partial path that already compares `Greater` than a complete
    /// one can never beat it.
    fn cmp_totals(&self, other: &Self) -> Ordering {
        self.duration
            .cmp(&other.duration)
            .then_with(|| self.distance.cmp(&other.distance))
    }

    /// Full tie-breaking order between two complete paths.
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.cmp_totals(other)
            .then_with(|| {
                let ours = self.stations.iter().map(|s| &s.id);
                let theirs = other.stations.iter().map(|s| &s.id);
                ours.cmp(theirs)
            })
            .then_with(|| {
                let ours = self.connections.iter().map(|c| &c.line);
                let theirs = other.connections.iter().map(|c| &c.line);
                ours.cmp(theirs)
            })
    }

    fn to_solved(&self, paths_explored: usize) -> SolvedPath {
        SolvedPath {
            stations: self.stations.iter().map(|s| (*s).clone()).collect(),
            connections: self.connections.iter().map(|c| (*c).clone()).collect(),
            total_duration: self.duration,
            total_distance: self.distance,
            paths_explored,
        }
    }
}

/// Accessibility-aware route solver over a station index.
pub struct RouteSolver<'a, S: StationStore> {
    index: &'a StationIndex<S>,
    config: &'a SearchConfig,
}

impl<'a, S: StationStore> RouteSolver<'a, S> {
    /// Create a new solver.
    pub fn new(index: &'a StationIndex<S>, config: &'a SearchConfig) -> Self {
        Self { index, config }
    }

    /// Find the best path from `start` to `end` under `options`.
    ///
    /// Unknown stations and unreachable destinations are returned as
    /// outcomes. Errors are reserved for bad requests, cancellation and
    /// store failures.
    pub fn find_optimal_route(
        &self,
        start: &str,
        end: &str,
        options: RouteOptions,
        cancel: &CancelToken,
    ) -> Result<RouteOutcome<SolvedPath>, RouteError> {
        if options.max_transfers > self.config.max_transfers_ceiling {
            return Err(RouteError::InvalidRequest(format!(
                "max_transfers {} exceeds ceiling {}",
                options.max_transfers, self.config.max_transfers_ceiling
            )));
        }

        let graph = self.index.snapshot()?;
        solve(&graph, start, end, options, cancel)
    }
}

/// Run the bounded search on a graph snapshot.
pub fn solve(
    graph: &StationGraph,
    start: &str,
    end: &str,
    options: RouteOptions,
    cancel: &CancelToken,
) -> Result<RouteOutcome<SolvedPath>, RouteError> {
    let Some(origin) = graph.station(start) else {
        return Ok(RouteOutcome::StationNotFound(start.to_string()));
    };
    let Some(destination) = graph.station(end) else {
        return Ok(RouteOutcome::StationNotFound(end.to_string()));
    };

    if options.require_accessibility && !(origin.accessible && destination.accessible) {
        debug!(start, end, "endpoint not accessible");
        return Ok(RouteOutcome::NoRouteFound);
    }

    let mut best: Option<PartialPath> = None;
    let mut paths_explored = 0;
    let mut frontier = vec![PartialPath::start(origin)];

    // Level by level: paths on the frontier at `depth` have exactly `depth` connections
    for depth in 0..options.max_transfers {
        let mut next_frontier = Vec::new();
        let can_extend_further = depth + 1 < options.max_transfers;

        for path in &frontier {
            if cancel.is_cancelled() {
                debug!(start, end, depth, paths_explored, "route search cancelled");
                return Err(RouteError::Cancelled);
            }

            if best
                .as_ref()
                .is_some_and(|b| path.cmp_totals(b) == Ordering::Greater)
            {
                continue;
            }

            let tail = path.tail();
            for connection in graph.connections_from(tail.id.as_str()) {
                if options.require_accessibility && !connection.accessible {
                    continue;
                }
                let Some(next_id) = connection.other_end(&tail.id) else {
                    continue;
                };
                let Some(next) = graph.station(next_id.as_str()) else {
                    continue;
                };
                if options.require_accessibility && !next.accessible {
                    continue;
                }
                if path.visits(next) {
                    continue;
                }

                let candidate = path.extend(connection, next);
                paths_explored += 1;

                if best
                    .as_ref()
                    .is_some_and(|b| candidate.cmp_totals(b) == Ordering::Greater)
                {
                    continue;
                }

                if next.id == destination.id {
                    let improves = best
                        .as_ref()
                        .is_none_or(|b| candidate.cmp_rank(b) == Ordering::Less);
                    if improves {
                        trace!(
                            duration = candidate.duration,
                            distance = candidate.distance,
                            hops = candidate.connections.len(),
                            "new best route"
                        );
                        best = Some(candidate);
                    }
                } else if can_extend_further {
                    next_frontier.push(candidate);
                }
            }
        }

        trace!(depth, frontier = next_frontier.len(), "expanded level");
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    debug!(
        start,
        end,
        max_transfers = options.max_transfers,
        require_accessibility = options.require_accessibility,
        paths_explored,
        found = best.is_some(),
        "route search complete"
    );

    Ok(match best {
        Some(path) => RouteOutcome::Found(path.to_solved(paths_explored)),
        None => RouteOutcome::NoRouteFound,
    })
}

#[cfg(test)]
#[path = "bfs_tests.rs"]
mod tests;
