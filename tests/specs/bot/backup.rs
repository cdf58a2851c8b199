//! Backup specs

use crate::prelude::*;

#[test]
fn backup_writes_snapshot_with_saved_config() {
    let state = StateDir::fast();
    state
        .anayat()
        .args(&["config", "set", "botName=Anayat"])
        .passes();

    let out = state
        .anayat()
        .args(&["--format", "json", "backup"])
        .passes();
    let path = out.json()["path"].as_str().unwrap().to_string();

    assert!(path.contains("backups"), "{path}");
    assert!(path.contains("anayat-backup-"), "{path}");

    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(snapshot["config"], r#"{"botName":"Anayat"}"#);
    assert!(snapshot["users"].as_u64().unwrap() < 1000);
}

#[test]
fn backup_to_custom_directory() {
    let state = StateDir::fast();
    let out_dir = state.path().join("elsewhere");

    state
        .anayat()
        .args(&["backup", "--out", out_dir.to_str().unwrap()])
        .passes()
        .stdout_has("Backup written to")
        .stderr_has("Backup created and downloaded!");

    let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
