//! The built-in city network.
//!
//! "East End" joins the blue and black lines, "Boxing Avenue" the blue and
//! red lines, "Neo Lane" the red and black lines, and the green line links
//! "Maze Road" to "Harbour Point". The one-hop orange shuttle between
//! "Football Stadium" and "Twin Towers" gives East End to Neo Lane a
//! four-hop route with two changes, against five hops on the black line.

/// Line definitions, each listed terminal to terminal.
pub const CITY_LINES: &[(&str, &[&str])] = &[
    (
        "blue",
        &[
            "East End",
            "Foot Stand",
            "Football Stadium",
            "City Centre",
            "Peter Park",
            "Boxing Avenue",
            "Maze Road",
        ],
    ),
    (
        "red",
        &[
            "Cotton Mill",
            "Iron Gate",
            "Boxing Avenue",
            "Silver Row",
            "Twin Towers",
            "Neo Lane",
        ],
    ),
    (
        "black",
        &[
            "East End",
            "Gas Works",
            "Old Quarry",
            "Harbour Point",
            "Lime Kiln",
            "Neo Lane",
        ],
    ),
    (
        "green",
        &[
            "Maze Road",
            "Sun Terrace",
            "Harbour Point",
            "Market Square",
            "Riverside",
        ],
    ),
    ("orange", &["Football Stadium", "Twin Towers"]),
];

#[cfg(test)]
mod tests {
    use crate::network::Network;

    #[test]
    fn city_network_builds() {
        let network = Network::city().unwrap();

        assert_eq!(network.lines().len(), 5);
        assert_eq!(network.station_count(), 19);
        assert_eq!(network.edge_count(), 21);
    }

    #[test]
    fn interchanges() {
        let network = Network::city().unwrap();

        for (station, lines) in [
            ("East End", 2),
            ("Boxing Avenue", 2),
            ("Neo Lane", 2),
            ("Harbour Point", 2),
            ("Maze Road", 2),
            ("Football Stadium", 2),
            ("Twin Towers", 2),
            ("Lime Kiln", 1),
            ("Foot Stand", 1),
        ] {
            let on = network
                .lines()
                .iter()
                .filter(|line| line.contains(station))
                .count();
            assert_eq!(on, lines, "{station}");
        }
    }
}
