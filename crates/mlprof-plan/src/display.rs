//! Display implementations and text dump for debugging.

use std::fmt;

use crate::ComputePlan;
use crate::program::{DeviceUsageInfo, Operation};

impl fmt::Display for DeviceUsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preferred={} supported={}", self.preferred, self.supported)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.device_usage {
            Some(usage) => write!(f, "{} [{usage}]", self.operator),
            None => write!(f, "{} [no device usage]", self.operator),
        }
    }
}

/// Dumps a compute plan as human-readable text.
pub fn dump_plan(plan: &ComputePlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("Source: {}\n", plan.source.display()));

    let structure = &plan.structure;
    out.push_str(&format!("Inputs: {:?}\n", structure.input_features));
    out.push_str(&format!("Outputs: {:?}\n", structure.output_features));

    match &structure.program {
        None => out.push_str("\nProgram: <none>\n"),
        Some(program) => {
            out.push_str("\nFunctions:\n");
            for (name, func) in program.iter() {
                out.push_str(&format!("  {name} ({} ops)\n", func.len()));
                for (i, op) in func.operations.iter().enumerate() {
                    out.push_str(&format!("    %{i} {op}\n"));
                }
            }
        }
    }

    out
}
