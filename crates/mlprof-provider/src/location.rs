//! Model location validation and package compilation.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ProviderError;
use crate::snapshot::SNAPSHOT_FILE;

/// Extension of an uncompiled model package.
pub const PACKAGE_EXTENSION: &str = "mlpackage";
/// Extension of a compiled model bundle.
pub const COMPILED_EXTENSION: &str = "mlmodelc";

/// A validated path to a compiled model bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledModel {
    path: PathBuf,
}

impl CompiledModel {
    /// Wraps a path that is already known to be a compiled bundle.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the compiled bundle.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Converts a model package into a compiled bundle.
pub trait ModelCompiler: Debug {
    /// Compile `package` into a bundle at `output`.
    fn compile(&self, package: &Path, output: &Path) -> Result<(), ProviderError>;
}

/// Materializes a compiled bundle from the compute plan snapshot stored in
/// the package.
#[derive(Debug, Default)]
pub struct SnapshotCompiler;

impl ModelCompiler for SnapshotCompiler {
    fn compile(&self, package: &Path, output: &Path) -> Result<(), ProviderError> {
        let snapshot = package.join(SNAPSHOT_FILE);
        if !snapshot.is_file() {
            return Err(ProviderError::Compilation(format!(
                "no {SNAPSHOT_FILE} in {}",
                package.display()
            )));
        }
        fs::create_dir_all(output).map_err(|e| {
            ProviderError::Compilation(format!("failed to create {}: {e}", output.display()))
        })?;
        fs::copy(&snapshot, output.join(SNAPSHOT_FILE)).map_err(|e| {
            ProviderError::Compilation(format!("failed to write {}: {e}", output.display()))
        })?;
        Ok(())
    }
}

/// Validates a model path and returns the compiled bundle to load.
///
/// A compiled bundle is used as-is. A package resolves to its sibling
/// compiled bundle, which is created with `compiler` if it does not exist
/// yet.
pub fn locate_model(
    path: &Path,
    compiler: &dyn ModelCompiler,
) -> Result<CompiledModel, ProviderError> {
    if !path.exists() {
        return Err(ProviderError::FileNotFound(path.to_path_buf()));
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(COMPILED_EXTENSION) => Ok(CompiledModel::new(path)),
        Some(PACKAGE_EXTENSION) => {
            let compiled = path.with_extension(COMPILED_EXTENSION);
            if compiled.exists() {
                log::info!("using existing compiled model {}", compiled.display());
            } else {
                log::info!("compiling {} with {compiler:?}", path.display());
                compiler.compile(path, &compiled)?;
            }
            Ok(CompiledModel::new(compiled))
        }
        _ => Err(ProviderError::InvalidFormat(path.to_path_buf())),
    }
}
