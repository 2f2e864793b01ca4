//! Unit tests for rn-topology.

use std::io::Cursor;

use rn_core::{Connection, Direction, StationId, TrainId};

use crate::{RailNetwork, RailNetworkBuilder, StationSpec, TopologyError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// "Map 1": blue A–B–C–D and green X–Y–C–Z, sharing C.
fn map_one() -> RailNetwork {
    let stations = ["A", "B", "C", "D", "X", "Y", "Z"]
        .into_iter()
        .map(|n| StationSpec::new(n, 0.1));
    let connections = vec![
        Connection::new("A", "B", "blue", "S"),
        Connection::new("B", "C", "blue", "S"),
        Connection::new("C", "D", "blue", "S"),
        Connection::new("X", "Y", "green", "S"),
        Connection::new("Y", "C", "green", "S"),
        Connection::new("C", "Z", "green", "S"),
    ];
    RailNetwork::from_records(stations, connections).unwrap()
}

fn names(net: &RailNetwork, line: &str) -> Vec<String> {
    net.line_by_name(line)
        .unwrap()
        .stations()
        .iter()
        .map(|&s| net.station(s).name.clone())
        .collect()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn line_order_follows_first_encounter() {
        let net = map_one();
        assert_eq!(names(&net, "blue"), ["A", "B", "C", "D"]);
        assert_eq!(names(&net, "green"), ["X", "Y", "C", "Z"]);
    }

    #[test]
    fn repeated_stations_not_duplicated() {
        let mut b = RailNetworkBuilder::new();
        for n in ["A", "B", "C"] {
            b.add_station(StationSpec::new(n, 0.0)).unwrap();
        }
        b.add_connection(Connection::new("A", "B", "red", "S")).unwrap();
        b.add_connection(Connection::new("B", "A", "red", "N")).unwrap();
        b.add_connection(Connection::new("B", "C", "red", "S")).unwrap();
        let net = b.build();
        assert_eq!(names(&net, "red"), ["A", "B", "C"]);
        assert_eq!(net.connections().len(), 3);
    }

    #[test]
    fn shared_station_served_by_both_lines() {
        let net = map_one();
        let c = net.station_id("C").unwrap();
        let serving: Vec<&str> = net
            .lines_serving(c)
            .iter()
            .map(|&l| net.line(l).name.as_str())
            .collect();
        assert_eq!(serving, ["blue", "green"]);

        let a = net.station_id("A").unwrap();
        assert_eq!(net.lines_serving(a).len(), 1);
    }

    #[test]
    fn rejects_probability_out_of_range() {
        let mut b = RailNetworkBuilder::new();
        let err = b.add_station(StationSpec::new("A", 1.5)).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidProbability { .. }));
        let err = b.add_station(StationSpec::new("A", -0.1)).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidProbability { .. }));
        let err = b.add_station(StationSpec::new("A", f64::NAN)).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidProbability { .. }));
    }

    #[test]
    fn accepts_probability_bounds() {
        let mut b = RailNetworkBuilder::new();
        b.add_station(StationSpec::new("A", 0.0)).unwrap();
        b.add_station(StationSpec::new("B", 1.0)).unwrap();
        assert_eq!(b.station_count(), 2);
    }

    #[test]
    fn rejects_empty_names() {
        let mut b = RailNetworkBuilder::new();
        let err = b.add_station(StationSpec::new("  ", 0.5)).unwrap_err();
        assert!(matches!(err, TopologyError::EmptyName { what: "station" }));

        b.add_station(StationSpec::new("A", 0.5)).unwrap();
        b.add_station(StationSpec::new("B", 0.5)).unwrap();
        let err = b.add_connection(Connection::new("A", "B", "", "S")).unwrap_err();
        assert!(matches!(err, TopologyError::EmptyName { what: "line" }));
    }

    #[test]
    fn rejects_duplicate_station() {
        let mut b = RailNetworkBuilder::new();
        b.add_station(StationSpec::new("A", 0.5)).unwrap();
        let err = b.add_station(StationSpec::new("A", 0.2)).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateStation(n) if n == "A"));
    }

    #[test]
    fn rejects_connection_to_unknown_station() {
        let mut b = RailNetworkBuilder::new();
        b.add_station(StationSpec::new("A", 0.5)).unwrap();
        let err = b.add_connection(Connection::new("A", "Q", "red", "S")).unwrap_err();
        match err {
            TopologyError::UnknownStation { station, line } => {
                assert_eq!(station, "Q");
                assert_eq!(line, "red");
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(b.line_count(), 0, "failed connection must not create a line");
    }
}

// ── Lookups and summaries ─────────────────────────────────────────────────────

#[cfg(test)]
mod lookups {
    use super::*;

    #[test]
    fn not_found_errors() {
        let net = map_one();
        assert!(matches!(net.station_by_name("Nowhere"), Err(TopologyError::StationNotFound(_))));
        assert!(matches!(net.line_by_name("purple"), Err(TopologyError::LineNotFound(_))));
        assert!(matches!(net.train(TrainId(1)), Err(TopologyError::TrainNotFound(_))));
        assert!(matches!(net.train(TrainId(0)), Err(TopologyError::TrainNotFound(_))));
    }

    #[test]
    fn display_strings() {
        let mut net = map_one();
        let a = net.station_id("A").unwrap();
        let blue = net.line_id("blue").unwrap();
        net.add_train(a, Direction::South, blue).unwrap();

        assert_eq!(
            net.station(a).to_string(),
            "Station A with delay probability 0.1 and 1 trains"
        );
        assert_eq!(net.line(blue).to_string(), "BLUE line");
        assert_eq!(net.to_string(), "Rail network with 2 lines, 7 stations, and 1 trains");
        assert_eq!(
            net.train_summary(TrainId(1)).unwrap().to_string(),
            "Train 1 on BLUE line is at station A heading in South direction"
        );

        net.set_train_state(TrainId(1), Direction::South, true);
        assert!(net.train_summary(TrainId(1)).unwrap().to_string().ends_with(" (DELAY)"));
    }

    #[test]
    fn reads_are_idempotent() {
        let mut net = map_one();
        let c = net.station_id("C").unwrap();
        let green = net.line_id("green").unwrap();
        net.add_train(c, Direction::North, green).unwrap();

        let first = net.train_summary(TrainId(1)).unwrap();
        let second = net.train_summary(TrainId(1)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            net.station_by_name("C").unwrap().to_string(),
            net.station_by_name("C").unwrap().to_string()
        );
    }
}

// ── Trains and occupancy ──────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn add_train_assigns_sequential_ids() {
        let mut net = map_one();
        let b = net.station_id("B").unwrap();
        let blue = net.line_id("blue").unwrap();
        let t1 = net.add_train(b, Direction::North, blue).unwrap();
        let t2 = net.add_train(b, Direction::South, blue).unwrap();
        assert_eq!((t1, t2), (TrainId(1), TrainId(2)));
        assert_eq!(net.station(b).trains(), &[TrainId(1), TrainId(2)]);
        assert_eq!(net.train(t2).unwrap().station(), b);
    }

    #[test]
    fn add_train_off_line_rejected() {
        let mut net = map_one();
        let x = net.station_id("X").unwrap();
        let blue = net.line_id("blue").unwrap();
        let err = net.add_train(x, Direction::North, blue).unwrap_err();
        assert!(matches!(err, TopologyError::StationNotOnLine { .. }));
        assert_eq!(net.train_count(), 0);
        assert_eq!(net.station(x).train_count(), 0);
    }

    #[test]
    fn move_train_keeps_both_sides_in_sync() {
        let mut net = map_one();
        let a = net.station_id("A").unwrap();
        let b = net.station_id("B").unwrap();
        let blue = net.line_id("blue").unwrap();
        let t = net.add_train(a, Direction::South, blue).unwrap();

        net.move_train(t, b);
        assert!(!net.station(a).has_train(t));
        assert!(net.station(b).has_train(t));
        assert_eq!(net.train(t).unwrap().station(), b);
    }

    #[test]
    fn move_train_to_same_station() {
        let mut net = map_one();
        let a = net.station_id("A").unwrap();
        let blue = net.line_id("blue").unwrap();
        let t1 = net.add_train(a, Direction::South, blue).unwrap();
        let t2 = net.add_train(a, Direction::South, blue).unwrap();

        net.move_train(t1, a);
        assert_eq!(net.station(a).trains(), &[t2, t1]);
    }

    #[test]
    #[should_panic(expected = "not on the blue line")]
    fn move_off_line_panics() {
        let mut net = map_one();
        let a = net.station_id("A").unwrap();
        let x = net.station_id("X").unwrap();
        let blue = net.line_id("blue").unwrap();
        let t = net.add_train(a, Direction::South, blue).unwrap();
        net.move_train(t, x);
    }

    #[test]
    fn rejected_move_leaves_occupancy_intact() {
        let mut net = map_one();
        let a = net.station_id("A").unwrap();
        let x = net.station_id("X").unwrap();
        let blue = net.line_id("blue").unwrap();
        let t = net.add_train(a, Direction::South, blue).unwrap();

        let moved = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| net.move_train(t, x)));
        assert!(moved.is_err());
        assert_eq!(net.train(t).unwrap().station(), a);
        assert_eq!(net.station(a).trains(), &[t]);
        assert_eq!(net.station(x).train_count(), 0);
    }

    #[test]
    fn set_train_state_leaves_position() {
        let mut net = map_one();
        let c = net.station_id("C").unwrap();
        let green = net.line_id("green").unwrap();
        let t = net.add_train(c, Direction::South, green).unwrap();

        net.set_train_state(t, Direction::North, true);
        let train = net.train(t).unwrap();
        assert_eq!((train.direction(), train.delayed()), (Direction::North, true));
        assert_eq!((train.id(), train.line(), train.station()), (t, green, c));
        assert_eq!(net.station(c).trains(), &[t]);
    }

    #[test]
    #[should_panic(expected = "invalid train id")]
    fn set_state_of_unknown_train_panics() {
        let mut net = map_one();
        net.set_train_state(TrainId(1), Direction::North, false);
    }

    #[test]
    #[should_panic]
    fn move_unknown_train_panics() {
        let mut net = map_one();
        net.move_train(TrainId(3), StationId(0));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use super::*;
    use crate::{load_connections_reader, load_network, load_stations_reader};

    #[test]
    fn stations_parsed() {
        let specs = load_stations_reader(Cursor::new("Hej,0.666\nPå,0.9\nDig,0.05\n")).unwrap();
        assert_eq!(
            specs,
            vec![
                StationSpec::new("Hej", 0.666),
                StationSpec::new("På", 0.9),
                StationSpec::new("Dig", 0.05),
            ]
        );
    }

    #[test]
    fn whitespace_trimmed_and_blank_lines_skipped() {
        let specs = load_stations_reader(Cursor::new(" A , 0.5 \n\nB,0.25\n")).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "A");
        assert_eq!(specs[0].delay_probability, 0.5);
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = load_stations_reader(Cursor::new("A,0.5\nB,0.5,extra\n")).unwrap_err();
        match err {
            TopologyError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other}"),
        }

        let err = load_connections_reader(Cursor::new("A,B,red\n")).unwrap_err();
        assert!(matches!(err, TopologyError::Parse { line: 1, .. }));
    }

    #[test]
    fn non_numeric_probability_is_parse_error() {
        let err = load_stations_reader(Cursor::new("A,often\n")).unwrap_err();
        assert!(matches!(err, TopologyError::Parse { line: 1, .. }));
    }

    #[test]
    fn connections_parsed() {
        let conns = load_connections_reader(Cursor::new("A,B,red,N\nB,C,red,E\n")).unwrap();
        assert_eq!(conns[0], Connection::new("A", "B", "red", "N"));
        assert_eq!(conns[1].direction, "E");
    }

    #[test]
    fn round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let stations = dir.path().join("stations.txt");
        let connections = dir.path().join("connections.txt");
        std::fs::File::create(&stations)
            .unwrap()
            .write_all(b"A,0.666\nB,0.187\nC,0.05\nD,0.69\n")
            .unwrap();
        std::fs::File::create(&connections)
            .unwrap()
            .write_all(b"A,B,red,N\nB,C,red,E\nC,D,red,S\n")
            .unwrap();

        let net = load_network(&stations, &connections).unwrap();
        assert_eq!(names(&net, "red"), ["A", "B", "C", "D"]);
        assert_eq!(net.station_by_name("B").unwrap().delay_probability, 0.187);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_network(&missing, &missing).unwrap_err();
        assert!(matches!(err, TopologyError::Io(_)));
    }
}
