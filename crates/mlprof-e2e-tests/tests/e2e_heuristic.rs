mod common;

use mlprof_analysis::UsageCounts;
use mlprof_plan::ComputeDevice;
use mlprof_report::{
    ReportStyle, bar_widths, model_specs, operator_table, usage_chart, usage_summary,
};

#[test]
fn counts_without_metadata() {
    let session = common::analyze_fixture("heuristic", None);
    assert_eq!(session.function_name(), "main");
    let analysis = session.analysis();
    assert_eq!(
        analysis.counts,
        UsageCounts {
            cpu: 2,
            gpu: 0,
            ane: 1,
            unknown: 0
        }
    );
    assert_eq!(analysis.heuristic_ops, 3);
}

#[test]
fn summary_line() {
    let session = common::analyze_fixture("heuristic", None);
    assert_eq!(usage_summary(&session.analysis().counts), "CPU: 2, GPU: 0, ANE: 1");
}

#[test]
fn operator_table_rows_in_order() {
    let session = common::analyze_fixture("heuristic", None);
    let table = operator_table(&session.analysis().operators);
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("{:<40}\t✅\t❌\t❌", "const"),
            format!("{:<40}\t✅\t❌\t✅", "ios18.mul"),
            format!("{:<40}\t✅\t✅\t✅", "add"),
        ]
    );
}

#[test]
fn chart_widths() {
    let session = common::analyze_fixture("heuristic", None);
    let counts = &session.analysis().counts;
    assert_eq!(
        bar_widths(counts, 50),
        vec![
            (ComputeDevice::Cpu, 33),
            (ComputeDevice::Gpu, 0),
            (ComputeDevice::Ane, 16)
        ]
    );

    let style = ReportStyle {
        color: false,
        ..Default::default()
    };
    let chart = usage_chart(counts, &style);
    assert!(chart.ends_with("All: 3  ■ CPU: 2  ■ GPU: 0  ■ ANE: 1  "));
    assert_eq!(chart.lines().nth(1).unwrap().chars().count(), 49);
}

#[test]
fn specs_listing() {
    let session = common::analyze_fixture("heuristic", None);
    let specs = model_specs(session.plan(), None);
    assert!(specs.contains("- main\n"));
    assert!(specs.contains("Operations in main function:\n- const\n- ios18.mul\n- add\n"));
    assert!(specs.contains("- Input features: [\"x\"]"));
    assert!(specs.contains("- Output features: [\"y\"]"));
}
