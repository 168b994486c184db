//! Line definitions.

use std::collections::HashSet;
use std::fmt;

use super::{LineId, Station, TopologyError};

/// The terminal a movement along a line is heading towards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    terminal: Station,
}

impl Direction {
    /// Creates a direction towards the given terminal.
    pub fn towards(terminal: Station) -> Self {
        Self { terminal }
    }

    /// Returns the terminal station.
    pub fn terminal(&self) -> &Station {
        &self.terminal
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "towards {}", self.terminal)
    }
}

/// A named, ordered sequence of stations.
///
/// Order encodes physical adjacency: each station is adjacent to the
/// stations immediately before and after it. A `Line` always has at least
/// one station and never lists the same station twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    stations: Vec<Station>,
}

impl Line {
    /// Creates a line, validating its station sequence.
    pub fn new(id: LineId, stations: Vec<Station>) -> Result<Self, TopologyError> {
        if stations.is_empty() {
            return Err(TopologyError::EmptyLine(id));
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station) {
                return Err(TopologyError::DuplicateStation {
                    line: id,
                    station: station.clone(),
                });
            }
        }

        Ok(Self { id, stations })
    }

    /// Parses a line from raw names.
    pub fn parse(id: &str, stations: &[&str]) -> Result<Self, TopologyError> {
        let id = LineId::parse(id)?;
        let stations = stations
            .iter()
            .map(|s| Station::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(id, stations)
    }

    /// Returns the line identifier.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Returns the stations in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the first terminal.
    pub fn first(&self) -> &Station {
        // Non-empty by construction
        &self.stations[0]
    }

    /// Returns the last terminal.
    pub fn last(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Returns the number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; lines are non-empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns true if the line calls at `station`.
    pub fn contains(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s.as_str() == station)
    }

    /// Returns the direction label for a movement that left `predecessor`
    /// on this line.
    ///
    /// Leaving the first terminal heads towards the last terminal; leaving
    /// any other station is labelled towards the first terminal. This is a
    /// structural label, not the rider's actual next stop.
    pub fn direction_from(&self, predecessor: &Station) -> Direction {
        if predecessor == self.first() {
            Direction::towards(self.last().clone())
        } else {
            Direction::towards(self.first().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn blue() -> Line {
        Line::parse(
            "blue",
            &["East End", "Foot Stand", "Football Stadium", "City Centre"],
        )
        .unwrap()
    }

    #[test]
    fn terminals() {
        let line = blue();
        assert_eq!(line.first(), &station("East End"));
        assert_eq!(line.last(), &station("City Centre"));
        assert_eq!(line.len(), 4);
        assert!(!line.is_empty());
    }

    #[test]
    fn single_station_line_is_its_own_terminal() {
        let line = Line::parse("shuttle", &["Depot"]).unwrap();
        assert_eq!(line.first(), line.last());
    }

    #[test]
    fn rejects_empty_line() {
        let err = Line::parse("blue", &[]).unwrap_err();
        assert_eq!(
            err,
            TopologyError::EmptyLine(LineId::parse("blue").unwrap())
        );
    }

    #[test]
    fn rejects_duplicate_station() {
        let err = Line::parse("blue", &["A", "B", "A"]).unwrap_err();
        assert_eq!(
            err,
            TopologyError::DuplicateStation {
                line: LineId::parse("blue").unwrap(),
                station: station("A"),
            }
        );
    }

    #[test]
    fn rejects_duplicate_after_trimming() {
        assert!(Line::parse("blue", &["A", " A "]).is_err());
    }

    #[test]
    fn rejects_blank_station_name() {
        let err = Line::parse("blue", &["A", ""]).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidName(_)));
    }

    #[test]
    fn contains() {
        let line = blue();
        assert!(line.contains("Foot Stand"));
        assert!(!line.contains("Neo Lane"));
    }

    #[test]
    fn direction_from_first_terminal_heads_to_last() {
        let line = blue();
        let dir = line.direction_from(&station("East End"));
        assert_eq!(dir.terminal(), &station("City Centre"));
        assert_eq!(dir.to_string(), "towards City Centre");
    }

    #[test]
    fn direction_from_elsewhere_heads_to_first() {
        let line = blue();
        // Travelling Foot Stand -> Football Stadium is still labelled towards
        // the first terminal.
        let dir = line.direction_from(&station("Foot Stand"));
        assert_eq!(dir.terminal(), &station("East End"));

        let dir = line.direction_from(&station("City Centre"));
        assert_eq!(dir.terminal(), &station("East End"));
    }
}
