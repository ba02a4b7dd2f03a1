//! Programs, functions, and operations.

use std::path::{Path, PathBuf};

use crate::device::{ComputeDevice, DeviceSet};
use crate::error::PlanError;

/// Device usage reported by the runtime for a single operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceUsageInfo {
    /// The device the runtime selected.
    pub preferred: ComputeDevice,
    /// Every device the operation can run on.
    pub supported: DeviceSet,
}

/// A single named step of a program function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    /// Operator name, e.g. `"conv"` or `"ios18.matmul"`.
    pub operator: String,
    /// Runtime metadata, absent when the lookup failed or is unsupported.
    pub device_usage: Option<DeviceUsageInfo>,
}

impl Operation {
    /// An operation without device metadata.
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            device_usage: None,
        }
    }

    /// An operation with device metadata.
    pub fn with_usage(operator: impl Into<String>, usage: DeviceUsageInfo) -> Self {
        Self {
            operator: operator.into(),
            device_usage: Some(usage),
        }
    }
}

/// An ordered sequence of operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Function {
    /// Operations in definition order.
    pub operations: Vec<Operation>,
}

impl Function {
    /// Creates a function from operations in definition order.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the function has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Named functions of an executable program, in provider order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    functions: Vec<(String, Function)>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a function. Names must be unique.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        function: Function,
    ) -> Result<(), PlanError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(PlanError::DuplicateFunction(name));
        }
        self.functions.push((name, function));
        Ok(())
    }

    /// Looks up a function by name.
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// The first function in provider order.
    pub fn first(&self) -> Option<(&str, &Function)> {
        self.functions.first().map(|(n, f)| (n.as_str(), f))
    }

    /// Function names in provider order.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterates `(name, function)` pairs in provider order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Function)> {
        self.functions.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the program defines no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Structure of a loaded model: its program and declared features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelStructure {
    /// The executable program, if the model is an ML program.
    pub program: Option<Program>,
    /// Declared input feature names.
    pub input_features: Vec<String>,
    /// Declared output feature names.
    pub output_features: Vec<String>,
}

/// A loaded compute plan: model structure plus per-operation device usage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputePlan {
    /// The model structure.
    pub structure: ModelStructure,
    /// Where the plan was loaded from.
    pub source: PathBuf,
}

impl ComputePlan {
    /// Creates a plan from a structure and its source location.
    pub fn new(structure: ModelStructure, source: impl Into<PathBuf>) -> Self {
        Self {
            structure,
            source: source.into(),
        }
    }

    /// The executable program.
    pub fn program(&self) -> Result<&Program, PlanError> {
        self.structure
            .program
            .as_ref()
            .ok_or(PlanError::MissingProgram)
    }

    /// Runtime device usage for `op`, if the runtime reported any.
    pub fn device_usage_for<'a>(&self, op: &'a Operation) -> Option<&'a DeviceUsageInfo> {
        op.device_usage.as_ref()
    }

    /// Path the plan was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
