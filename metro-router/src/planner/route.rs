//! Route result types.
//!
//! A `RouteResult` is the ordered list of stations visited from origin to
//! destination, with the line and direction used to reach each one, plus
//! the aggregate time and cost of the trip.

use chrono::Duration;

use crate::domain::{Direction, LineId, Station};

use super::config::RouteConfig;

/// One step of a route: the station arrived at and how.
///
/// The first segment of every route is the origin itself and carries no
/// line or direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Station arrived at
    pub station: Station,
    /// Line used to arrive, `None` for the origin
    pub line: Option<LineId>,
    /// Direction of travel on `line`, `None` for the origin
    pub direction: Option<Direction>,
}

impl PathSegment {
    /// The origin segment.
    pub fn origin(station: Station) -> Self {
        Self {
            station,
            line: None,
            direction: None,
        }
    }

    /// A segment reached by travelling on `line` towards `direction`.
    pub fn arrival(station: Station, line: LineId, direction: Direction) -> Self {
        Self {
            station,
            line: Some(line),
            direction: Some(direction),
        }
    }
}

/// A route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    segments: Vec<PathSegment>,
    time: Duration,
    cost: u32,
}

impl RouteResult {
    /// Builds a route from its segments, deriving time and cost.
    ///
    /// `segments` must start with the origin segment, so it is never empty.
    pub(crate) fn from_segments(segments: Vec<PathSegment>, config: &RouteConfig) -> Self {
        let hops = segments.len().saturating_sub(1);
        let transfers = count_transfers(&segments);

        let time = config.time_per_hop() * hops as i32;
        let cost = hops as u32 + transfers as u32 * config.transfer_penalty;

        Self {
            segments,
            time,
            cost,
        }
    }

    /// The zero-length route from a station to itself.
    pub fn trivial(station: Station) -> Self {
        Self {
            segments: vec![PathSegment::origin(station)],
            time: Duration::zero(),
            cost: 0,
        }
    }

    /// Returns the segments, origin first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the stations visited, origin first.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.segments.iter().map(|s| &s.station)
    }

    /// Returns the origin station.
    pub fn origin(&self) -> &Station {
        &self.segments[0].station
    }

    /// Returns the destination station.
    pub fn destination(&self) -> &Station {
        &self.segments[self.segments.len() - 1].station
    }

    /// Returns the number of hops (edges traversed).
    pub fn hops(&self) -> usize {
        self.segments.len() - 1
    }

    /// Returns the number of line changes along the route.
    pub fn transfers(&self) -> usize {
        count_transfers(&self.segments)
    }

    /// Returns the estimated travel time.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Returns the estimated travel time in whole minutes.
    pub fn time_minutes(&self) -> i64 {
        self.time.num_minutes()
    }

    /// Returns hops plus the transfer penalty for each line change.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns true if origin and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.segments.len() == 1
    }
}

/// Counts consecutive segment pairs on different lines, ignoring the origin.
fn count_transfers(segments: &[PathSegment]) -> usize {
    segments
        .get(1..)
        .unwrap_or_default()
        .windows(2)
        .filter(|pair| pair[0].line != pair[1].line)
        .count()
}
