mod common;

use mlprof_provider::{ProviderError, SNAPSHOT_FILE};

#[test]
fn package_is_compiled_to_sibling_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let package = common::write_bundle(dir.path(), "model.mlpackage", "heuristic");

    let plan = common::try_load(&package).unwrap();
    let compiled = dir.path().join("model.mlmodelc");
    assert_eq!(plan.source(), compiled);
    assert!(compiled.join(SNAPSHOT_FILE).is_file());
    assert_eq!(plan.program().unwrap().function_names(), vec!["main"]);
}

#[test]
fn existing_sibling_bundle_wins() {
    let dir = tempfile::tempdir().unwrap();
    let package = common::write_bundle(dir.path(), "model.mlpackage", "heuristic");
    common::write_bundle(dir.path(), "model.mlmodelc", "metadata");

    let plan = common::try_load(&package).unwrap();
    assert_eq!(
        plan.program().unwrap().function_names(),
        vec!["encoder", "decoder"]
    );
}

#[test]
fn package_without_snapshot_fails_compilation() {
    let dir = tempfile::tempdir().unwrap();
    let package = dir.path().join("model.mlpackage");
    std::fs::create_dir(&package).unwrap();
    let err = common::try_load(&package).unwrap_err();
    assert!(matches!(err, ProviderError::Compilation(_)));
    assert!(!dir.path().join("model.mlmodelc").exists());
}
