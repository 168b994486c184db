//! The transit network graph.
//!
//! A `Network` is derived once from a set of lines and is read-only
//! afterwards. Every station is registered in first-seen order, and each
//! pair of stations adjacent on a line is connected in both directions by an
//! edge tagged with that line. Two stations adjacent on two lines are joined
//! by two parallel edges, one per line.

mod city;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Direction, Line, LineId, Station, TopologyError};

pub use city::CITY_LINES;

/// A directed half of an adjacency: the neighbour reached, the line used,
/// and the direction label for leaving on that line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Neighbouring station
    pub to: Station,
    /// Line connecting the two stations
    pub line: LineId,
    /// Direction label, see [`Line::direction_from`]
    pub direction: Direction,
}

/// An immutable transit network.
///
/// Adjacency is symmetric: if `A` neighbours `B` on line `L`, then `B`
/// neighbours `A` on line `L`. Every station referenced by an edge is a
/// member of the station set.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Distinct stations in first-seen order.
    stations: Vec<Station>,

    /// Outgoing edges per station, in the order they were declared.
    /// Isolated stations map to an empty list.
    adjacency: HashMap<Station, Vec<Edge>>,

    /// Lines in declaration order.
    lines: Vec<Line>,
}

impl Network {
    /// Build a network from validated lines.
    ///
    /// Lines are processed in iteration order, which fixes the order of
    /// [`Network::stations`]. The resulting adjacency does not depend on it.
    pub fn build(lines: impl IntoIterator<Item = Line>) -> Result<Self, TopologyError> {
        let mut network = Self::default();
        let mut seen_ids = HashSet::new();

        for line in lines {
            if !seen_ids.insert(line.id().clone()) {
                return Err(TopologyError::DuplicateLine(line.id().clone()));
            }
            network.add_line(&line);
            network.lines.push(line);
        }

        debug!(
            lines = network.lines.len(),
            stations = network.station_count(),
            edges = network.edge_count(),
            "Built transit network"
        );

        Ok(network)
    }

    /// Build a network from raw `(line, stations)` definitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_router::network::Network;
    ///
    /// let network = Network::from_definitions(&[
    ///     ("blue", &["East End", "Foot Stand"]),
    ///     ("black", &["East End", "Gas Works"]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(network.station_count(), 3);
    /// assert_eq!(network.neighbors("East End").len(), 2);
    /// ```
    pub fn from_definitions(definitions: &[(&str, &[&str])]) -> Result<Self, TopologyError> {
        let lines = definitions
            .iter()
            .map(|(id, stations)| Line::parse(id, stations))
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(lines)
    }

    /// The built-in city network served by the binary.
    pub fn city() -> Result<Self, TopologyError> {
        Self::from_definitions(CITY_LINES)
    }

    fn add_line(&mut self, line: &Line) {
        let stations = line.stations();

        for (i, station) in stations.iter().enumerate() {
            self.register(station);

            if i > 0 {
                self.connect(station, &stations[i - 1], line);
            }
            if i + 1 < stations.len() {
                self.connect(station, &stations[i + 1], line);
            }
        }
    }

    fn register(&mut self, station: &Station) {
        if !self.adjacency.contains_key(station) {
            self.stations.push(station.clone());
            self.adjacency.insert(station.clone(), Vec::new());
        }
    }

    fn connect(&mut self, from: &Station, to: &Station, line: &Line) {
        self.adjacency.entry(from.clone()).or_default().push(Edge {
            to: to.clone(),
            line: line.id().clone(),
            direction: line.direction_from(from),
        });
    }

    /// Returns the edges leaving `station`.
    ///
    /// Returns an empty slice for isolated or unknown stations.
    pub fn neighbors(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `station` is on any line.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Look up the canonical `Station` for a name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.adjacency.get_key_value(name).map(|(station, _)| station)
    }

    /// All distinct stations, in the order first seen while scanning lines
    /// in declaration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a line by identifier.
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.id().as_str() == id)
    }

    /// All lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of undirected edges (A–B on L counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn edge(to: &str, via: &str, towards: &str) -> Edge {
        Edge {
            to: station(to),
            line: line(via),
            direction: Direction::towards(station(towards)),
        }
    }

    fn small() -> Network {
        Network::from_definitions(&[
            ("blue", &["A", "B", "C"]),
            ("red", &["D", "B", "E"]),
        ])
        .unwrap()
    }

    #[test]
    fn registers_stations_in_first_seen_order() {
        let network = small();
        let names: Vec<&str> = network.stations().iter().map(Station::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn interchange_has_edges_on_both_lines() {
        let network = small();
        assert_eq!(
            network.neighbors("B"),
            &[
                edge("A", "blue", "A"),
                edge("C", "blue", "A"),
                edge("D", "red", "D"),
                edge("E", "red", "D"),
            ]
        );
    }

    #[test]
    fn terminals_have_one_neighbour() {
        let network = small();
        assert_eq!(network.neighbors("A"), &[edge("B", "blue", "C")]);
        assert_eq!(network.neighbors("E"), &[edge("B", "red", "D")]);
    }

    #[test]
    fn parallel_edges_are_kept_per_line() {
        let network =
            Network::from_definitions(&[("blue", &["A", "B"]), ("red", &["A", "B"])]).unwrap();
        assert_eq!(
            network.neighbors("A"),
            &[edge("B", "blue", "B"), edge("B", "red", "B")]
        );
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn isolated_station_is_legal() {
        let network = Network::from_definitions(&[("shuttle", &["Depot"])]).unwrap();
        assert!(network.contains("Depot"));
        assert!(network.neighbors("Depot").is_empty());
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn unknown_station() {
        let network = small();
        assert!(!network.contains("Z"));
        assert!(network.neighbors("Z").is_empty());
        assert!(network.station("Z").is_none());
    }

    #[test]
    fn canonical_station_lookup() {
        let network = small();
        assert_eq!(network.station("B"), Some(&station("B")));
    }

    #[test]
    fn line_lookup() {
        let network = small();
        let red = network.line("red").unwrap();
        assert_eq!(red.first(), &station("D"));
        assert!(network.line("green").is_none());
        assert_eq!(network.lines().len(), 2);
    }

    #[test]
    fn rejects_duplicate_line() {
        let err = Network::from_definitions(&[("blue", &["A", "B"]), ("blue", &["C"])])
            .unwrap_err();
        assert_eq!(err, TopologyError::DuplicateLine(line("blue")));
    }

    #[test]
    fn rejects_malformed_line() {
        let err = Network::from_definitions(&[("blue", &["A", "B", "A"])]).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateStation { .. }));

        let err = Network::from_definitions(&[("blue", &[])]).unwrap_err();
        assert_eq!(err, TopologyError::EmptyLine(line("blue")));
    }

    #[test]
    fn empty_network() {
        let network = Network::build(Vec::new()).unwrap();
        assert_eq!(network.station_count(), 0);
        assert_eq!(network.edge_count(), 0);
    }
}
