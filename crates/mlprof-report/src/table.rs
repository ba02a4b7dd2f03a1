//! Operator compatibility table.

use mlprof_analysis::OperatorRecord;

/// Width of the operator name column.
pub const OPERATOR_COLUMN_WIDTH: usize = 40;

const SUPPORTED: &str = "✅";
const UNSUPPORTED: &str = "❌";

/// One line per operator: the name padded to [`OPERATOR_COLUMN_WIDTH`],
/// then a tab-separated marker for CPU, GPU and ANE.
pub fn operator_table(records: &[OperatorRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let [cpu, gpu, ane] = record.support.map(|s| if s { SUPPORTED } else { UNSUPPORTED });
            format!(
                "{:<width$}\t{cpu}\t{gpu}\t{ane}",
                record.operator,
                width = OPERATOR_COLUMN_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
