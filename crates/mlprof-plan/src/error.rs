//! Error types for the compute plan model.

/// Errors that can occur when constructing or reading a compute plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The model structure has no executable program.
    #[error("missing program: model structure has no executable function graph")]
    MissingProgram,

    /// Two functions share a name.
    #[error("duplicate function name '{0}'")]
    DuplicateFunction(String),
}
