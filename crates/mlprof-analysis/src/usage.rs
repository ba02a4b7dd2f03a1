//! Per-device usage aggregation.

use std::fmt;

use mlprof_plan::{ComputeDevice, ComputePlan, Function};

use crate::classify::{ClassificationSource, DeviceClassifier};

/// Number of operations preferring each device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageCounts {
    /// Operations on the CPU.
    pub cpu: usize,
    /// Operations on the GPU.
    pub gpu: usize,
    /// Operations on the ANE.
    pub ane: usize,
    /// Operations whose device could not be mapped.
    pub unknown: usize,
}

impl UsageCounts {
    /// Count for `device`.
    pub fn get(&self, device: ComputeDevice) -> usize {
        match device {
            ComputeDevice::Cpu => self.cpu,
            ComputeDevice::Gpu => self.gpu,
            ComputeDevice::Ane => self.ane,
            ComputeDevice::Unknown => self.unknown,
        }
    }

    /// Adds one operation to `device`.
    pub fn increment(&mut self, device: ComputeDevice) {
        match device {
            ComputeDevice::Cpu => self.cpu += 1,
            ComputeDevice::Gpu => self.gpu += 1,
            ComputeDevice::Ane => self.ane += 1,
            ComputeDevice::Unknown => self.unknown += 1,
        }
    }

    /// Total operations counted.
    pub fn total(&self) -> usize {
        self.cpu + self.gpu + self.ane + self.unknown
    }

    /// `(device, count)` in CPU, GPU, ANE order, followed by Unknown only
    /// when non-zero.
    pub fn entries(&self) -> Vec<(ComputeDevice, usize)> {
        let mut entries: Vec<_> = ComputeDevice::KNOWN
            .iter()
            .map(|&d| (d, self.get(d)))
            .collect();
        if self.unknown > 0 {
            entries.push((ComputeDevice::Unknown, self.unknown));
        }
        entries
    }
}

impl fmt::Display for UsageCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (device, count)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{device}: {count}")?;
        }
        Ok(())
    }
}

/// Device support of one operation, in definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRecord {
    /// Operator name.
    pub operator: String,
    /// Support for CPU, GPU and ANE, in that order.
    pub support: [bool; 3],
}

/// Result of aggregating one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageAnalysis {
    /// Per-device counts of preferred devices.
    pub counts: UsageCounts,
    /// One record per operation.
    pub operators: Vec<OperatorRecord>,
    /// Operations classified by the fallback heuristic.
    pub heuristic_ops: usize,
}

/// Classifies every operation of `function` and accumulates the results.
///
/// Device usage for each operation is looked up through `plan`.
pub fn aggregate(
    plan: &ComputePlan,
    function: &Function,
    classifier: &dyn DeviceClassifier,
) -> UsageAnalysis {
    let mut counts = UsageCounts::default();
    let mut operators = Vec::with_capacity(function.len());
    let mut heuristic_ops = 0;

    for op in &function.operations {
        let c = classifier.classify(op, plan.device_usage_for(op));
        counts.increment(c.preferred);
        if c.source == ClassificationSource::Heuristic {
            heuristic_ops += 1;
        }
        operators.push(OperatorRecord {
            operator: op.operator.clone(),
            support: c.supported.known_flags(),
        });
    }

    log::debug!(
        "classified {} operations ({heuristic_ops} without device usage)",
        operators.len()
    );

    UsageAnalysis {
        counts,
        operators,
        heuristic_ops,
    }
}
