//! Two-phase analysis sessions.
//!
//! An [`UnresolvedSession`] holds a loaded compute plan and the requested
//! function name. [`UnresolvedSession::analyze`] consumes it and either
//! yields an immutable [`AnalyzedSession`] or an error, after which the
//! session is gone.

use mlprof_plan::ComputePlan;

use crate::AnalysisError;
use crate::classify::DeviceClassifier;
use crate::resolve::{Resolution, resolve};
use crate::usage::{UsageAnalysis, aggregate};

/// A loaded compute plan that has not been analyzed yet.
#[derive(Debug, Clone)]
pub struct UnresolvedSession {
    plan: ComputePlan,
    requested: Option<String>,
}

impl UnresolvedSession {
    /// Starts a session over `plan`, optionally targeting a named function.
    pub fn new(plan: ComputePlan, requested: Option<String>) -> Self {
        Self { plan, requested }
    }

    /// The loaded plan.
    pub fn plan(&self) -> &ComputePlan {
        &self.plan
    }

    /// Function names in provider order. Empty when the plan has no program.
    pub fn function_names(&self) -> Vec<String> {
        match self.plan.program() {
            Ok(program) => program
                .function_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Resolves the function and aggregates its device usage.
    pub fn analyze(
        self,
        classifier: &dyn DeviceClassifier,
    ) -> Result<AnalyzedSession, AnalysisError> {
        let program = self.plan.program()?;
        let resolved = resolve(program, self.requested.as_deref())?;
        let function_name = resolved.name.to_string();
        let resolution = resolved.resolution;
        let analysis = aggregate(&self.plan, resolved.function, classifier);

        Ok(AnalyzedSession {
            plan: self.plan,
            function_name,
            resolution,
            analysis,
        })
    }
}

/// A session whose usage analysis has been computed.
#[derive(Debug, Clone)]
pub struct AnalyzedSession {
    plan: ComputePlan,
    function_name: String,
    resolution: Resolution,
    analysis: UsageAnalysis,
}

impl AnalyzedSession {
    /// The loaded plan.
    pub fn plan(&self) -> &ComputePlan {
        &self.plan
    }

    /// Name of the analyzed function.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// How the analyzed function was selected.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The cached usage analysis.
    pub fn analysis(&self) -> &UsageAnalysis {
        &self.analysis
    }
}
