//! Model specifications listing.

use mlprof_analysis::resolve;
use mlprof_plan::ComputePlan;

/// Lists program functions, the operations of the resolved function, and
/// the declared input and output features.
///
/// The program section degrades to a one-line note when the plan has no
/// program or no function resolves; the feature section is always listed.
pub fn model_specs(plan: &ComputePlan, requested: Option<&str>) -> String {
    let mut out = String::new();

    match program_section(plan, requested) {
        Ok(section) => out.push_str(&section),
        Err(err) => out.push_str(&format!("Could not get program structure: {err}\n")),
    }

    let structure = &plan.structure;
    out.push_str("\nModel Structure:\n");
    out.push_str(&format!("- Input features: {:?}\n", structure.input_features));
    out.push_str(&format!("- Output features: {:?}", structure.output_features));

    out
}

fn program_section(
    plan: &ComputePlan,
    requested: Option<&str>,
) -> Result<String, mlprof_analysis::AnalysisError> {
    let program = plan.program()?;
    let mut out = String::from("\nProgram Functions:\n");
    for name in program.function_names() {
        out.push_str(&format!("- {name}\n"));
    }

    let resolved = resolve(program, requested)?;
    out.push_str(&format!("\nOperations in {} function:\n", resolved.name));
    for op in &resolved.function.operations {
        out.push_str(&format!("- {}\n", op.operator));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlprof_plan::{Function, ModelStructure, Operation, Program};

    fn plan() -> ComputePlan {
        let mut program = Program::new();
        program
            .add_function("main", Function::new(vec![Operation::new("const")]))
            .unwrap();
        program
            .add_function(
                "decode",
                Function::new(vec![Operation::new("ios18.mul"), Operation::new("add")]),
            )
            .unwrap();
        ComputePlan::new(
            ModelStructure {
                program: Some(program),
                input_features: vec!["image".into()],
                output_features: vec!["logits".into()],
            },
            "m.mlmodelc",
        )
    }

    #[test]
    fn lists_functions_ops_and_features() {
        let specs = model_specs(&plan(), None);
        assert!(specs.contains("Program Functions:\n- main\n- decode\n"));
        assert!(specs.contains("Operations in main function:\n- const\n"));
        assert!(specs.contains("- Input features: [\"image\"]"));
        assert!(specs.ends_with("- Output features: [\"logits\"]"));
    }

    #[test]
    fn uses_requested_function() {
        let specs = model_specs(&plan(), Some("decode"));
        assert!(specs.contains("Operations in decode function:\n- ios18.mul\n- add\n"));
    }

    #[test]
    fn missing_program_still_lists_features() {
        let plan = ComputePlan::new(
            ModelStructure {
                program: None,
                input_features: vec!["x".into()],
                output_features: vec![],
            },
            "m.mlmodelc",
        );
        let specs = model_specs(&plan, None);
        assert!(specs.starts_with("Could not get program structure: missing program"));
        assert!(specs.contains("- Input features: [\"x\"]"));
        assert!(!specs.contains("Program Functions:"));
    }
}
