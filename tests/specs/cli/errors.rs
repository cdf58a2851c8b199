//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_action_lists_valid_names() {
    StateDir::fast()
        .anayat()
        .args(&["action", "explode"])
        .fails()
        .stderr_has("unknown action 'explode'")
        .stderr_has("restart, stop, update, backup, logs, deploy");
}

#[test]
fn invalid_config_is_rejected() {
    let state = StateDir::empty();
    state.file("config.toml", "[deploy]\nsuccess_probability = 1.5\n");

    state.anayat().args(&["status"]).fails();
}

#[test]
fn conflicting_outcome_flags_are_rejected() {
    StateDir::fast()
        .anayat()
        .args(&["deploy", "--always-succeed", "--fail-at", "1"])
        .fails();
}

#[test]
fn config_set_requires_key_value() {
    StateDir::fast()
        .anayat()
        .args(&["config", "set", "botName"])
        .fails()
        .stderr_has("expected key=value");
}

#[test]
fn deploy_probability_out_of_range_is_rejected() {
    StateDir::fast()
        .anayat()
        .args(&["deploy", "--probability", "7", "--seed", "1"])
        .fails()
        .stderr_has("must be between 0 and 1");
}

#[test]
fn deploy_probability_nan_is_rejected() {
    StateDir::fast()
        .anayat()
        .args(&["deploy", "--probability", "NaN"])
        .fails()
        .stderr_has("must be between 0 and 1");
}
