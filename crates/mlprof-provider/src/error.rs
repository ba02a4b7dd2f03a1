//! Error types for the provider boundary.

use std::path::PathBuf;

use mlprof_plan::PlanError;

/// Errors raised while locating, compiling, or loading a model.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The model path does not exist.
    #[error("file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The model path is neither a package nor a compiled bundle.
    #[error("input file must be either .mlpackage or .mlmodelc: {}", .0.display())]
    InvalidFormat(PathBuf),

    /// Converting a package into a compiled bundle failed.
    #[error("error compiling model: {0}")]
    Compilation(String),

    /// The compute plan could not be loaded, or no plan was returned.
    #[error("error loading compute plan: {0}")]
    ComputePlanLoad(String),

    /// A compute plan snapshot is malformed.
    #[error("invalid compute plan snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The loaded plan violates a structural invariant.
    #[error(transparent)]
    Plan(#[from] PlanError),
}
