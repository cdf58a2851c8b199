//! Terminal command specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    StateDir::fast()
        .anayat()
        .args(&["exec", "help"])
        .passes()
        .stdout_has("Available commands: status, users, restart, clear, help");
}

#[test]
fn status_reports_bot_status() {
    StateDir::fast()
        .anayat()
        .args(&["exec", "STATUS"])
        .passes()
        .stdout_has("Bot Status: offline")
        .stdout_has("Uptime: 0h 0m 0s");
}

#[test]
fn unknown_command_hints_help() {
    StateDir::fast()
        .anayat()
        .args(&["exec", "launch", "rocket"])
        .passes()
        .stdout_has("Command not found: launch rocket")
        .stdout_has("Type 'help' for available commands");
}

#[test]
fn restart_command_restarts_bot() {
    let state = StateDir::fast();
    state
        .anayat()
        .args(&["exec", "restart"])
        .passes()
        .stdout_has("Restarting bot...");

    state.anayat().args(&["status"]).passes().stdout_has("ONLINE");
}

#[test]
fn users_reply_is_json_in_json_mode() {
    let out = StateDir::fast()
        .anayat()
        .args(&["--format", "json", "exec", "users"])
        .passes();

    let json = out.json();
    assert!(json["text"].as_str().unwrap().starts_with("Total Users: "));
    assert!(json["effect"].is_null());
}
