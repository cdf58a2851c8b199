//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_workflows() {
    let state = StateDir::empty();
    let out = state.anayat().args(&["--help"]).passes();
    for command in ["deploy", "restart", "stop", "update", "backup", "exec", "monitor", "theme"] {
        assert!(out.stdout.contains(command), "missing {command}\n{out}");
    }
}

#[test]
fn deploy_help_shows_outcome_flags() {
    StateDir::empty()
        .anayat()
        .args(&["deploy", "--help"])
        .passes()
        .stdout_has("--fail-at")
        .stdout_has("--always-succeed")
        .stdout_has("--seed");
}
