//! Bot management specs

use crate::prelude::*;

#[test]
fn restart_brings_bot_online() {
    let state = StateDir::fast();

    state
        .anayat()
        .args(&["restart"])
        .passes()
        .stdout_has("🟢 ONLINE")
        .stderr_has("Restarting bot...")
        .stderr_has("Bot restarted successfully!");

    assert!(state.read("preferences.json").contains("online"));
}

#[test]
fn stop_needs_confirmation() {
    let state = StateDir::fast();
    state.anayat().args(&["restart"]).passes();

    state
        .anayat()
        .args(&["stop"])
        .passes()
        .stdout_has("ONLINE")
        .stderr_has("pass --yes to confirm");

    state
        .anayat()
        .args(&["stop", "--yes"])
        .passes()
        .stdout_has("🔴 OFFLINE")
        .stderr_has("Bot stopped");
}

#[test]
fn quiet_suppresses_notifications() {
    let out = StateDir::fast().anayat().args(&["--quiet", "update"]).passes();
    assert!(!out.stderr.contains("Bot updated"), "{out}");
}

#[test]
fn update_notifies() {
    StateDir::fast()
        .anayat()
        .args(&["update"])
        .passes()
        .stderr_has("Bot updated to latest version!");
}

#[test]
fn logs_prints_header_and_lines() {
    StateDir::fast()
        .anayat()
        .args(&["logs"])
        .passes()
        .stdout_has("=== SYSTEM LOGS ===")
        .stdout_has("[INFO] Connected to WhatsApp");
}

#[test]
fn quick_action_dispatches_workflow() {
    StateDir::fast()
        .anayat()
        .args(&["action", "restart"])
        .passes()
        .stdout_has("ONLINE");
}

#[test]
fn runs_write_log_file() {
    let state = StateDir::fast();
    state.anayat().args(&["deploy", "--always-succeed"]).passes();

    let log = state.read("anayat.log");
    assert!(log.contains("deployment finished"), "{log}");
}
