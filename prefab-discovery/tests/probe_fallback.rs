//! Tests for the sequential probe fallback using mocked servers

use prefab_discovery::{DiscoveryStrategy, ProbeDiscovery, ServerAddress};
use rstest::rstest;
use std::time::Duration;

/// Candidate pointing at a mockito server
fn addr_of(server: &mockito::ServerGuard) -> ServerAddress {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .split_once(':')
        .expect("mockito address has host:port form");
    ServerAddress {
        host: host.to_string(),
        port: port.parse().expect("mockito port is numeric"),
    }
}

/// Candidate nothing listens on
fn dead_addr() -> ServerAddress {
    ServerAddress {
        host: "127.0.0.1".to_string(),
        port: 1,
    }
}

#[test]
fn test_first_responding_candidate_wins_and_rest_are_not_probed() {
    let mut live = mockito::Server::new();
    let live_mock = live
        .mock("GET", "/homes")
        .with_status(200)
        .with_body("[]")
        .create();

    let mut after = mockito::Server::new();
    let after_mock = after.mock("GET", "/homes").expect(0).create();

    let live_addr = addr_of(&live);
    let probe = ProbeDiscovery::new(vec![dead_addr(), live_addr.clone(), addr_of(&after)]);

    let found = probe.locate(Duration::from_secs(5));

    assert_eq!(found, Some(live_addr));
    live_mock.assert();
    // The candidate after the winner must never be contacted
    after_mock.assert();
}

#[test]
fn test_error_status_counts_as_unreachable() {
    let mut broken = mockito::Server::new();
    let broken_mock = broken
        .mock("GET", "/homes")
        .with_status(500)
        .with_body("boom")
        .create();

    let mut live = mockito::Server::new();
    let live_mock = live
        .mock("GET", "/homes")
        .with_status(200)
        .with_body("[]")
        .create();

    let live_addr = addr_of(&live);
    let probe = ProbeDiscovery::new(vec![addr_of(&broken), live_addr.clone()]);

    assert_eq!(probe.locate(Duration::from_secs(5)), Some(live_addr));
    broken_mock.assert();
    live_mock.assert();
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn test_live_candidate_found_behind_dead_prefixes(#[case] dead_before: usize) {
    let mut live = mockito::Server::new();
    let _live_mock = live
        .mock("GET", "/homes")
        .with_status(200)
        .with_body("[]")
        .create();

    let live_addr = addr_of(&live);
    let mut candidates: Vec<ServerAddress> = (0..dead_before).map(|_| dead_addr()).collect();
    candidates.push(live_addr.clone());

    let probe = ProbeDiscovery::new(candidates);
    assert_eq!(probe.locate(Duration::from_secs(5)), Some(live_addr));
}

#[test]
fn test_all_dead_candidates_is_not_found() {
    let probe = ProbeDiscovery::new(vec![dead_addr(), dead_addr()]);
    assert_eq!(probe.locate(Duration::from_secs(5)), None);
}
