mod common;

use airtravel_lib::{
    enumerate_under_cost, enumerate_within_stops, find_cheapest, find_cheapest_with_limits, Error,
    FareClass, FlightNetwork, Route, SearchLimits,
};

use common::{network_from_legs, seeded_network, triangle};

/// Fare of `route` when always taking the cheapest flight between consecutive airports.
fn route_fare(network: &FlightNetwork, route: &Route, class: FareClass) -> f64 {
    route
        .edges()
        .map(|(from, to)| {
            network
                .neighbors(from)
                .iter()
                .filter(|flight| flight.destination == to)
                .map(|flight| flight.fare(class))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

#[test]
fn scenario_direct_flight_beats_two_legs() {
    let network = triangle();
    let cheapest = find_cheapest(&network, "A", "C", FareClass::Economy)
        .expect("search succeeds")
        .expect("route exists");

    assert_eq!(cheapest.route.airports, vec!["A", "C"]);
    assert_eq!(cheapest.total, 150.0);
    assert_eq!(cheapest.fare_class, FareClass::Economy);
}

#[test]
fn fare_class_changes_the_winner() {
    let network = network_from_legs(&[
        ("A", "B", 10.0, 500.0),
        ("B", "C", 10.0, 500.0),
        ("A", "C", 100.0, 200.0),
    ]);

    let economy = find_cheapest(&network, "A", "C", FareClass::Economy)
        .unwrap()
        .unwrap();
    assert_eq!(economy.route.airports, vec!["A", "B", "C"]);
    assert_eq!(economy.total, 20.0);

    let business = find_cheapest(&network, "A", "C", FareClass::Business)
        .unwrap()
        .unwrap();
    assert_eq!(business.route.airports, vec!["A", "C"]);
    assert_eq!(business.total, 200.0);
}

#[test]
fn unreachable_destination_is_not_an_error() {
    let network = network_from_legs(&[("A", "B", 10.0, 10.0), ("C", "A", 10.0, 10.0)]);
    let result = find_cheapest(&network, "A", "C", FareClass::Economy).expect("search succeeds");
    assert!(result.is_none());
}

#[test]
fn cheaper_late_discovery_replaces_earlier_candidate() {
    // The expensive direct flight is queued first; the cheaper detour must still win.
    let network = network_from_legs(&[
        ("A", "D", 300.0, 300.0),
        ("A", "B", 50.0, 50.0),
        ("B", "C", 50.0, 50.0),
        ("C", "D", 50.0, 50.0),
    ]);
    let cheapest = find_cheapest(&network, "A", "D", FareClass::Economy)
        .unwrap()
        .unwrap();
    assert_eq!(cheapest.route.airports, vec!["A", "B", "C", "D"]);
    assert_eq!(cheapest.total, 150.0);
}

#[test]
fn zero_fare_cycles_terminate() {
    let network = network_from_legs(&[
        ("A", "B", 0.0, 0.0),
        ("B", "A", 0.0, 0.0),
        ("B", "C", 5.0, 5.0),
    ]);
    let cheapest = find_cheapest(&network, "A", "C", FareClass::Business)
        .unwrap()
        .unwrap();
    assert_eq!(cheapest.route.airports, vec!["A", "B", "C"]);
    assert_eq!(cheapest.total, 5.0);
}

#[test]
fn cheapest_route_dominates_every_simple_route() {
    for seed in 0..12 {
        let network = seeded_network(seed, 6, 3);
        for class in [FareClass::Economy, FareClass::Business] {
            for (source, dest) in [("N0", "N5"), ("N1", "N3"), ("N4", "N2")] {
                let all_routes = enumerate_within_stops(&network, source, dest, usize::MAX)
                    .expect("enumeration succeeds");
                let cheapest = find_cheapest(&network, source, dest, class).expect("search");

                match cheapest {
                    None => assert!(
                        all_routes.is_empty(),
                        "seed {seed}: no cheapest route but {} simple routes exist",
                        all_routes.len()
                    ),
                    Some(priced) => {
                        assert_eq!(priced.route.source(), Some(source));
                        assert_eq!(priced.route.destination(), Some(dest));
                        let brute_force = all_routes
                            .iter()
                            .map(|route| route_fare(&network, route, class))
                            .fold(f64::INFINITY, f64::min);
                        assert!(
                            (priced.total - brute_force).abs() < 1e-9,
                            "seed {seed} {class}: found {} but brute force gives {}",
                            priced.total,
                            brute_force
                        );
                        assert!(
                            (route_fare(&network, &priced.route, class) - priced.total).abs()
                                < 1e-9
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn leg_ceiling_finds_cheapest_route_within_budget() {
    for seed in 0..12 {
        let network = seeded_network(seed, 6, 3);
        for max_legs in 1..4 {
            let limits = SearchLimits {
                max_legs: Some(max_legs),
                max_queue_len: None,
            };
            let within = enumerate_within_stops(&network, "N0", "N5", max_legs)
                .expect("enumeration succeeds");
            let limited =
                find_cheapest_with_limits(&network, "N0", "N5", FareClass::Economy, &limits)
                    .expect("search");

            match limited {
                None => assert!(
                    within.is_empty(),
                    "seed {seed}: no route within {max_legs} legs but {} exist",
                    within.len()
                ),
                Some(priced) => {
                    assert!(priced.route.hop_count() <= max_legs);
                    let brute_force = within
                        .iter()
                        .map(|route| route_fare(&network, route, FareClass::Economy))
                        .fold(f64::INFINITY, f64::min);
                    assert!(
                        (priced.total - brute_force).abs() < 1e-9,
                        "seed {seed}, {max_legs} legs: found {} but brute force gives {}",
                        priced.total,
                        brute_force
                    );
                }
            }
        }
    }
}

#[test]
fn leg_ceiling_does_not_discard_short_expensive_prefix() {
    let network = network_from_legs(&[
        ("A", "B", 1.0, 1.0),
        ("B", "C", 1.0, 1.0),
        ("C", "D", 1.0, 1.0),
        ("A", "C", 10.0, 10.0),
    ]);
    let limits = SearchLimits {
        max_legs: Some(2),
        max_queue_len: None,
    };
    let priced = find_cheapest_with_limits(&network, "A", "D", FareClass::Economy, &limits)
        .expect("search")
        .expect("route within two legs");
    assert_eq!(priced.route.airports, vec!["A", "C", "D"]);
    assert_eq!(priced.total, 11.0);
}

#[test]
fn finders_normalise_and_validate_endpoints() {
    let network = network_from_legs(&[("A", "B", 10.0, 20.0)]);

    let priced = find_cheapest(&network, "a", "b", FareClass::Economy)
        .expect("search")
        .expect("lowercase codes resolve");
    assert_eq!(priced.route.airports, vec!["A", "B"]);

    let err = find_cheapest(&network, "A", "ZZZ", FareClass::Economy).expect_err("unknown code");
    assert!(matches!(err, Error::InvalidAirport { .. }));

    let err = enumerate_under_cost(&network, "A", "A", -5.0).expect_err("negative cap");
    assert!(matches!(err, Error::InvalidParameter { .. }));
}
