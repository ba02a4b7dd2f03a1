//! Compute plan snapshots.
//!
//! A snapshot is a JSON export of the runtime's compute plan, stored as
//! [`SNAPSHOT_FILE`] inside a compiled bundle. Functions are a list so
//! their enumeration order survives the round trip.

use std::path::Path;
use std::thread;

use mlprof_plan::{ComputePlan, Function, ModelStructure, Operation, Program};
use serde::Deserialize;

use crate::ProviderError;
use crate::load::{ComputePlanProvider, LoadCompletion, LoadConfig};
use crate::location::CompiledModel;
use crate::translate::{NativeDevice, translate_usage};

/// File name of the snapshot inside a bundle.
pub const SNAPSHOT_FILE: &str = "compute_plan.json";

#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    input_features: Vec<String>,
    #[serde(default)]
    output_features: Vec<String>,
    #[serde(default)]
    program: Option<SnapshotProgram>,
}

#[derive(Debug, Deserialize)]
struct SnapshotProgram {
    #[serde(default)]
    functions: Vec<SnapshotFunction>,
}

#[derive(Debug, Deserialize)]
struct SnapshotFunction {
    name: String,
    #[serde(default)]
    operations: Vec<SnapshotOperation>,
}

#[derive(Debug, Deserialize)]
struct SnapshotOperation {
    operator: String,
    #[serde(default)]
    device_usage: Option<SnapshotUsage>,
}

#[derive(Debug, Deserialize)]
struct SnapshotUsage {
    preferred: NativeDevice,
    #[serde(default)]
    supported: Vec<NativeDevice>,
}

/// Parses snapshot JSON into a [`ComputePlan`] attributed to `source`.
pub fn parse_snapshot(json: &str, source: &Path) -> Result<ComputePlan, ProviderError> {
    let doc: SnapshotDoc = serde_json::from_str(json)?;

    let program = match doc.program {
        None => None,
        Some(p) => {
            let mut program = Program::new();
            for func in p.functions {
                let operations = func
                    .operations
                    .into_iter()
                    .map(|op| match op.device_usage {
                        Some(u) => {
                            let usage = translate_usage(&u.preferred, &u.supported);
                            Operation::with_usage(op.operator, usage)
                        }
                        None => Operation::new(op.operator),
                    })
                    .collect();
                program.add_function(func.name, Function::new(operations))?;
            }
            Some(program)
        }
    };

    Ok(ComputePlan::new(
        ModelStructure {
            program,
            input_features: doc.input_features,
            output_features: doc.output_features,
        },
        source,
    ))
}

/// Reads and parses the snapshot of a compiled bundle.
pub fn read_snapshot(model: &CompiledModel) -> Result<ComputePlan, ProviderError> {
    let path = model.path().join(SNAPSHOT_FILE);
    let json = std::fs::read_to_string(&path).map_err(|e| {
        ProviderError::ComputePlanLoad(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_snapshot(&json, model.path())
}

/// Provider backed by the snapshot file of a compiled bundle.
///
/// The read happens on a worker thread and is delivered through the
/// completion.
#[derive(Debug, Default)]
pub struct SnapshotProvider;

impl ComputePlanProvider for SnapshotProvider {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn load(&self, model: &CompiledModel, config: &LoadConfig, completion: LoadCompletion) {
        log::info!(
            "reading compute plan snapshot (compute units: {})",
            config.compute_units
        );
        let model = model.clone();
        let spawned = thread::Builder::new()
            .name("mlprof-snapshot".into())
            .spawn(move || completion(read_snapshot(&model)));
        if let Err(e) = spawned {
            log::error!("failed to spawn snapshot reader: {e}");
        }
    }
}
