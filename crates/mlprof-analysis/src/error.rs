//! Errors raised during analysis.

use mlprof_plan::PlanError;

/// Errors during function resolution and usage analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// No function could be selected for analysis.
    #[error(
        "could not find a suitable function{suffix}. Available functions: {available:?}",
        suffix = .requested.as_ref().map(|r| format!(" (requested '{r}')")).unwrap_or_default()
    )]
    FunctionNotFound {
        /// The name the caller asked for, if any.
        requested: Option<String>,
        /// Function names present in the program.
        available: Vec<String>,
    },

    /// The compute plan has no executable program.
    #[error("missing program: model structure has no executable function graph")]
    MissingProgram,

    /// The compute plan violates a structural invariant.
    #[error(transparent)]
    InvalidPlan(PlanError),
}

impl From<PlanError> for AnalysisError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::MissingProgram => Self::MissingProgram,
            other => Self::InvalidPlan(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_not_found_display() {
        let err = AnalysisError::FunctionNotFound {
            requested: None,
            available: vec![],
        };
        assert_eq!(
            err.to_string(),
            "could not find a suitable function. Available functions: []"
        );

        let err = AnalysisError::FunctionNotFound {
            requested: Some("decode".into()),
            available: vec![],
        };
        assert!(err.to_string().contains("(requested 'decode')"));
    }

    #[test]
    fn missing_program_from_plan_error() {
        let err = AnalysisError::from(PlanError::MissingProgram);
        assert!(matches!(err, AnalysisError::MissingProgram));
    }
}
