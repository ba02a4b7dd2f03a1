use std::path::{Path, PathBuf};

use mlprof_analysis::{AnalyzedSession, RuntimeClassifier, UnresolvedSession};
use mlprof_plan::ComputePlan;
use mlprof_provider::{
    LoadConfig, ProviderError, SNAPSHOT_FILE, SnapshotCompiler, SnapshotProvider, load_blocking,
    locate_model,
};

/// Load a fixture snapshot by name (without extension).
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    let path = format!("{}/fixtures/{name}.json", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to load {path}: {e}"))
}

/// Write a fixture into `<dir>/<stem>.<ext>/compute_plan.json` and return
/// the bundle path.
#[allow(dead_code)]
pub fn write_bundle(dir: &Path, file_name: &str, fixture: &str) -> PathBuf {
    let bundle = dir.join(file_name);
    std::fs::create_dir_all(&bundle).expect("failed to create bundle");
    std::fs::write(bundle.join(SNAPSHOT_FILE), load_fixture(fixture))
        .expect("failed to write snapshot");
    bundle
}

/// Locate, compile if needed, and load a model through the snapshot provider.
#[allow(dead_code)]
pub fn try_load(path: &Path) -> Result<ComputePlan, ProviderError> {
    let model = locate_model(path, &SnapshotCompiler)?;
    load_blocking(&SnapshotProvider, &model, &LoadConfig::default())
}

/// Load a fixture as a compiled bundle in a fresh temp dir.
#[allow(dead_code)]
pub fn load_plan(fixture: &str) -> ComputePlan {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = write_bundle(dir.path(), "model.mlmodelc", fixture);
    try_load(&bundle).expect("compute plan load failed")
}

/// Load and analyze a fixture.
#[allow(dead_code)]
pub fn analyze_fixture(fixture: &str, function: Option<&str>) -> AnalyzedSession {
    UnresolvedSession::new(load_plan(fixture), function.map(str::to_string))
        .analyze(&RuntimeClassifier)
        .expect("analysis failed")
}
