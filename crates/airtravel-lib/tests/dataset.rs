mod common;

use std::fs;

use airtravel_lib::{
    load_network, network_to_json, parse_network, Error, NetworkDocument,
};
use tempfile::tempdir;

use common::{sample_network_path, triangle};

#[test]
fn fixture_network_loads_in_order() {
    let network = load_network(&sample_network_path()).expect("fixture loads");

    assert_eq!(network.airport_count(), 6);
    assert_eq!(network.flight_count(), 10);
    let from_jfk: Vec<_> = network
        .neighbors("JFK")
        .iter()
        .map(|flight| flight.destination.as_str())
        .collect();
    assert_eq!(from_jfk, vec!["BOS", "ORD", "LAX"]);
    assert_eq!(network.neighbors("JFK")[0].departure, "08:00");
    assert_eq!(
        network.airport("ORD").map(|a| a.display_name()),
        Some("Chicago O'Hare")
    );
}

#[test]
fn missing_file_reports_network_not_found() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("absent.json");
    let err = load_network(&path).expect_err("missing file");
    assert!(matches!(err, Error::NetworkNotFound { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_surfaced() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ \"airports\": [").expect("write file");
    assert!(matches!(load_network(&path), Err(Error::Json(_))));
}

#[test]
fn document_contents_are_validated() {
    let self_loop = r#"{
        "airports": [{"code": "A"}, {"code": "B"}],
        "flights": [{"origin": "A", "destination": "A", "economy": 1, "business": 1}]
    }"#;
    assert!(matches!(
        parse_network(self_loop),
        Err(Error::SelfLoopFlight { .. })
    ));

    let dangling = r#"{
        "airports": [{"code": "A"}],
        "flights": [{"origin": "A", "destination": "B", "economy": 1, "business": 1}]
    }"#;
    assert!(matches!(
        parse_network(dangling),
        Err(Error::InvalidAirport { .. })
    ));

    let duplicate = r#"{"airports": [{"code": "A"}, {"code": "a"}]}"#;
    assert!(matches!(
        parse_network(duplicate),
        Err(Error::DuplicateAirport { .. })
    ));
}

#[test]
fn exported_snapshot_reloads_identically() {
    let network = triangle();
    let json = network_to_json(&network).expect("export");

    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("network.json");
    fs::write(&path, &json).expect("write snapshot");

    let reloaded = load_network(&path).expect("reload");
    assert_eq!(
        NetworkDocument::from_network(&reloaded),
        NetworkDocument::from_network(&network)
    );
}
