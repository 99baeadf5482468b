#![allow(dead_code)]

use std::path::PathBuf;

use airtravel_lib::FlightNetwork;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn sample_network_path() -> PathBuf {
    fixtures_dir().join("sample_network.json")
}

/// Build a network from `(origin, destination, economy, business)` legs,
/// adding airports in first-seen order.
pub fn network_from_legs(legs: &[(&str, &str, f64, f64)]) -> FlightNetwork {
    let mut network = FlightNetwork::new();
    for (origin, destination, _, _) in legs {
        for code in [origin, destination] {
            if !network.contains_airport(code) {
                network.add_airport(code).expect("add airport");
            }
        }
    }
    for (index, (origin, destination, economy, business)) in legs.iter().enumerate() {
        network
            .add_flight(
                origin,
                destination,
                format!("{:02}:00", index % 24),
                format!("{:02}:30", index % 24),
                *economy,
                *business,
            )
            .expect("add flight");
    }
    network
}

/// Airports A, B, C with A->B 100, B->C 100, A->C 150 economy.
pub fn triangle() -> FlightNetwork {
    network_from_legs(&[
        ("A", "B", 100.0, 400.0),
        ("B", "C", 100.0, 400.0),
        ("A", "C", 150.0, 500.0),
    ])
}

/// Small pseudo-random dense network used for brute-force cross-checks.
pub fn seeded_network(seed: u64, airports: usize, legs_per_airport: usize) -> FlightNetwork {
    let mut network = FlightNetwork::new();
    let codes: Vec<String> = (0..airports).map(|i| format!("N{i}")).collect();
    for code in &codes {
        network.add_airport(code).expect("add airport");
    }

    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };

    for (index, origin) in codes.iter().enumerate() {
        for _ in 0..legs_per_airport {
            let mut target = (next() as usize) % airports;
            if target == index {
                target = (target + 1) % airports;
            }
            let economy = (next() % 20) as f64 * 5.0;
            let business = (next() % 20) as f64 * 15.0;
            network
                .add_flight(origin, &codes[target], "", "", economy, business)
                .expect("add flight");
        }
    }
    network
}
