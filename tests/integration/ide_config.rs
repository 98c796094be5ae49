//! End-to-end coverage for the IDE config helper.

use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use mechlaunch::{
    ide::{apply_stub_path, StubCatalog, EXTRA_PATHS_KEY},
    lib::fs::SettingsUpdateStatus,
};

fn stubs_fixture(revisions: &[u32]) -> tempfile::TempDir {
    let temp = tempdir().expect("can create temporary directory");
    for revision in revisions {
        fs::create_dir_all(temp.path().join(format!("v{revision}")))
            .expect("can create stub revision");
    }
    temp
}

#[test]
fn resolved_stub_path_lands_in_the_settings_file() {
    let stubs = stubs_fixture(&[241, 251]);
    let workspace = tempdir().expect("can create temporary directory");
    let settings = workspace.path().join(".vscode").join("settings.json");

    let catalog = StubCatalog::scan(stubs.path()).expect("catalog should scan");
    let resolved = catalog.resolve(Some(241)).expect("revision should resolve");
    assert!(resolved.exact);

    let status = apply_stub_path(&settings, &catalog.stub_dir(resolved.revision), false)
        .expect("settings update should succeed");
    assert_eq!(status, SettingsUpdateStatus::Updated);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&settings).expect("settings exist"))
            .expect("settings parse");
    let paths = written[EXTRA_PATHS_KEY].as_array().expect("array written");
    assert_eq!(paths.len(), 1);
    let entry = paths[0].as_str().expect("path entry is a string");
    assert!(entry.ends_with("v241"), "entry: {entry}");
}

#[test]
fn requesting_a_future_revision_clamps_to_the_newest_bundle() {
    let stubs = stubs_fixture(&[241, 251]);

    let catalog = StubCatalog::scan(stubs.path()).expect("catalog should scan");
    let resolved = catalog.resolve(Some(261)).expect("revision should clamp");
    assert_eq!(resolved.revision, 251);
    assert!(!resolved.exact);
}

#[test]
fn second_run_leaves_the_settings_file_alone() {
    let stubs = stubs_fixture(&[241]);
    let workspace = tempdir().expect("can create temporary directory");
    let settings = workspace.path().join("settings.json");

    let catalog = StubCatalog::scan(stubs.path()).expect("catalog should scan");
    let stub_dir = catalog.stub_dir(241);

    apply_stub_path(&settings, &stub_dir, false).expect("first update");
    let before = fs::read_to_string(&settings).expect("settings exist");

    let status = apply_stub_path(&settings, &stub_dir, false).expect("second update");
    assert_eq!(status, SettingsUpdateStatus::AlreadySet);
    let after = fs::read_to_string(&settings).expect("settings exist");
    assert_eq!(before, after);
}
