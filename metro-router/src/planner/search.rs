//! Least-cost route search.
//!
//! Every hop costs 1, and changing line at an interchange adds the transfer
//! penalty. The search is Dijkstra's algorithm over (station, arriving line)
//! labels, so two arrivals at the same station on different lines are
//! tracked separately and the penalty is charged exactly. The best cost of a
//! station is the minimum over its labels, and the first label popped for the
//! destination is an optimal route.
//!
//! Labels are ranked by `(cost, hops)`: among routes of equal cost the one
//! with fewer hops wins. Reversing a route keeps both numbers, so a route and
//! its reverse always have the same cost and the same length.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{LineId, Station};
use crate::network::{Edge, Network};

use super::config::RouteConfig;
use super::route::{PathSegment, RouteResult};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Request is missing a start or end station
    #[error("invalid route request: {0}")]
    InvalidInput(String),

    /// Station is not on any line
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Destination is not reachable from the start
    #[error("no route found from {start} to {end}")]
    NoRouteFound { start: Station, end: Station },
}

/// Request for a route between two stations.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Station to travel from.
    pub start: String,

    /// Station to travel to.
    pub end: String,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Validate the route request.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.start.trim().is_empty() {
            return Err(RouteError::InvalidInput(
                "start station is required".to_string(),
            ));
        }

        if self.end.trim().is_empty() {
            return Err(RouteError::InvalidInput(
                "end station is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// A search label: a station together with the line used to reach it.
/// The start label has no line.
type Label = (Station, Option<LineId>);

/// How a label was reached: the label before it and the edge taken.
type Step = (Label, Edge);

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frontier {
    cost: u32,
    hops: u32,
    station: Station,
    line: Option<LineId>,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every field: min-heap by cost, then hops, then by name
        // for reproducible tie-breaking.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.station.cmp(&self.station))
            .then_with(|| other.line.cmp(&self.line))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Route planner over an immutable network.
///
/// The planner holds no mutable state; every search allocates its own
/// frontier and label maps, so one planner (or many) can serve concurrent
/// queries against a shared `Network`.
pub struct RoutePlanner<'a> {
    network: &'a Network,
    config: &'a RouteConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a RouteConfig) -> Self {
        Self { network, config }
    }

    /// Find the least-cost route for a request.
    pub fn find_route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        request.validate()?;

        let start = self.resolve(&request.start)?;
        let end = self.resolve(&request.end)?;

        if start == end {
            return Ok(RouteResult::trivial(start.clone()));
        }

        self.search(start, end)
    }

    /// Find the least-cost route between two named stations.
    pub fn route(&self, start: &str, end: &str) -> Result<RouteResult, RouteError> {
        self.find_route(&RouteRequest::new(start, end))
    }

    fn resolve(&self, name: &str) -> Result<&'a Station, RouteError> {
        self.network
            .station(name.trim())
            .ok_or_else(|| RouteError::UnknownStation(name.trim().to_string()))
    }

    fn search(&self, start: &Station, end: &Station) -> Result<RouteResult, RouteError> {
        let mut dist: HashMap<Label, (u32, u32)> = HashMap::new();
        let mut previous: HashMap<Label, Step> = HashMap::new();
        let mut settled: HashSet<Label> = HashSet::new();
        let mut heap = BinaryHeap::new();

        dist.insert((start.clone(), None), (0, 0));
        heap.push(Frontier {
            cost: 0,
            hops: 0,
            station: start.clone(),
            line: None,
        });

        while let Some(Frontier {
            cost,
            hops,
            station,
            line,
        }) = heap.pop()
        {
            let label = (station, line);
            if !settled.insert(label.clone()) {
                continue;
            }

            trace!(
                station = %label.0,
                line = ?label.1.as_ref().map(LineId::as_str),
                cost,
                hops,
                "Settled label"
            );

            if &label.0 == end {
                debug!(
                    start = %start,
                    end = %end,
                    cost,
                    hops,
                    settled = settled.len(),
                    "Route found"
                );
                return Ok(self.reconstruct(label, &previous));
            }

            for edge in self.network.neighbors(label.0.as_str()) {
                let penalty = match &label.1 {
                    Some(current) if current != &edge.line => self.config.transfer_penalty,
                    _ => 0,
                };
                let candidate = (cost + 1 + penalty, hops + 1);

                let next: Label = (edge.to.clone(), Some(edge.line.clone()));
                if settled.contains(&next) {
                    continue;
                }

                let improves = dist.get(&next).is_none_or(|&best| candidate < best);
                if improves {
                    dist.insert(next.clone(), candidate);
                    previous.insert(next.clone(), (label.clone(), edge.clone()));
                    heap.push(Frontier {
                        cost: candidate.0,
                        hops: candidate.1,
                        station: next.0,
                        line: next.1,
                    });
                }
            }
        }

        debug!(
            start = %start,
            end = %end,
            settled = settled.len(),
            "No route found"
        );

        Err(RouteError::NoRouteFound {
            start: start.clone(),
            end: end.clone(),
        })
    }

    /// Walk the predecessor chain back from `last` and emit segments in
    /// travel order.
    fn reconstruct(&self, last: Label, previous: &HashMap<Label, Step>) -> RouteResult {
        let mut segments = Vec::new();
        let mut current = last;

        while let Some((prev, edge)) = previous.get(&current) {
            segments.push(PathSegment::arrival(
                edge.to.clone(),
                edge.line.clone(),
                edge.direction.clone(),
            ));
            current = prev.clone();
        }

        segments.push(PathSegment::origin(current.0));
        segments.reverse();

        RouteResult::from_segments(segments, self.config)
    }
}
