//! Preference specs

use crate::prelude::*;

#[test]
fn theme_defaults_to_config() {
    StateDir::fast()
        .anayat()
        .args(&["theme"])
        .passes()
        .stdout_has("dark");
}

#[test]
fn theme_set_persists() {
    let state = StateDir::fast();
    state.anayat().args(&["theme", "set", "light"]).passes();

    state.anayat().args(&["theme"]).passes().stdout_has("light");

    let json = state
        .anayat()
        .args(&["--format", "json", "status"])
        .passes()
        .json();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["status"], "offline");
}

#[test]
fn config_set_merges_settings() {
    let state = StateDir::fast();
    state
        .anayat()
        .args(&["config", "set", "botName=Anayat", "prefix=!"])
        .passes()
        .stderr_has("Configuration saved successfully!");
    state.anayat().args(&["config", "set", "prefix=."]).passes();

    let json = state
        .anayat()
        .args(&["--format", "json", "config", "show"])
        .passes()
        .json();
    assert_eq!(json["settings"]["botName"], "Anayat");
    assert_eq!(json["settings"]["prefix"], ".");
    assert_eq!(json["config"]["version"], "2.0.0");
}

#[test]
fn config_show_text_is_toml() {
    StateDir::fast()
        .anayat()
        .args(&["config", "show"])
        .passes()
        .stdout_has("[timing]")
        .stdout_has("Validating Input");
}
