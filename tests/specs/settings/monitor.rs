//! Stats and monitor specs

use crate::prelude::*;

#[test]
fn seeded_stats_are_reproducible() {
    let state = StateDir::fast();
    let first = state
        .anayat()
        .args(&["--format", "json", "stats", "--seed", "42"])
        .passes();
    let second = state
        .anayat()
        .args(&["--format", "json", "stats", "--seed", "42"])
        .passes();

    similar_asserts::assert_eq!(first.stdout, second.stdout);

    let json = first.json();
    assert!(json["cpu_percent"].as_u64().unwrap() < 100);
    assert!(json["memory_mb"].as_u64().unwrap() >= 128);
}

#[test]
fn monitor_stops_after_tick_limit() {
    let out = StateDir::fast()
        .anayat()
        .args(&["--format", "json", "monitor", "--ticks", "2", "--seed", "3"])
        .passes();

    let ticks: Vec<serde_json::Value> = out
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0]["tick"], 1);
    assert_eq!(ticks[1]["tick"], 2);
    assert_eq!(ticks[1]["status"], "offline");
}

#[test]
fn monitor_text_output_shows_stats() {
    StateDir::fast()
        .anayat()
        .args(&["monitor", "--ticks", "1"])
        .passes()
        .stdout_has("Monitoring every")
        .stdout_has("#1 🔴 OFFLINE")
        .stdout_has("CPU: ");
}
