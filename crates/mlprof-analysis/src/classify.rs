//! Per-operation device classification.
//!
//! Runtime metadata is authoritative and passed through unchanged. Only
//! operations without metadata go through [`fallback_classification`].

use std::fmt;

use mlprof_plan::{ComputeDevice, DeviceSet, DeviceUsageInfo, Operation};

/// Operator name of constant materialization.
pub const CONST_OPERATOR: &str = "const";

/// Prefix of the operator set introduced with iOS 18.
pub const VERSIONED_ACCELERATOR_PREFIX: &str = "ios18.";

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// Runtime device-usage metadata.
    Metadata,
    /// The fallback heuristic.
    Heuristic,
}

impl fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metadata => "metadata",
            Self::Heuristic => "heuristic",
        })
    }
}

/// Device assignment of a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Device the operation runs on.
    pub preferred: ComputeDevice,
    /// Devices the operation could run on.
    pub supported: DeviceSet,
    /// Whether this came from metadata or the heuristic.
    pub source: ClassificationSource,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} ({})",
            self.preferred, self.supported, self.source
        )
    }
}

/// Maps an operation to its device assignment.
pub trait DeviceClassifier {
    /// Classify one operation, given the runtime device usage reported for it.
    fn classify(&self, op: &Operation, usage: Option<&DeviceUsageInfo>) -> Classification;
}

/// Classifier used against real compute plans.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuntimeClassifier;

impl DeviceClassifier for RuntimeClassifier {
    fn classify(&self, op: &Operation, usage: Option<&DeviceUsageInfo>) -> Classification {
        match usage {
            Some(usage) => Classification {
                preferred: usage.preferred,
                supported: usage.supported,
                source: ClassificationSource::Metadata,
            },
            None => fallback_classification(&op.operator),
        }
    }
}

/// Guesses a device assignment from the operator name alone.
///
/// Rules apply in order: `const` is CPU-only, an `ios18.` operator prefers
/// the ANE with CPU as alternative, anything else prefers CPU and is
/// assumed schedulable everywhere.
pub fn fallback_classification(operator: &str) -> Classification {
    let (preferred, supported) = if operator == CONST_OPERATOR {
        (ComputeDevice::Cpu, DeviceSet::CPU)
    } else if operator.starts_with(VERSIONED_ACCELERATOR_PREFIX) {
        (ComputeDevice::Ane, DeviceSet::CPU | DeviceSet::ANE)
    } else {
        (ComputeDevice::Cpu, DeviceSet::ALL_KNOWN)
    };
    Classification {
        preferred,
        supported,
        source: ClassificationSource::Heuristic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_is_cpu_only() {
        for _ in 0..3 {
            let c = fallback_classification("const");
            assert_eq!(c.preferred, ComputeDevice::Cpu);
            assert_eq!(c.supported, DeviceSet::CPU);
        }
    }

    #[test]
    fn versioned_prefix_prefers_ane() {
        let c = fallback_classification("ios18.matmul");
        assert_eq!(c.preferred, ComputeDevice::Ane);
        assert_eq!(c.supported, DeviceSet::CPU | DeviceSet::ANE);
    }

    #[test]
    fn other_ops_are_universal() {
        for op in ["add", "conv", "ios17.mul", "constexpr_lut_to_dense", "ios18"] {
            let c = fallback_classification(op);
            assert_eq!(c.preferred, ComputeDevice::Cpu, "{op}");
            assert_eq!(c.supported, DeviceSet::ALL_KNOWN, "{op}");
        }
    }

    #[test]
    fn const_rule_is_exact_match() {
        let c = fallback_classification("const_extra");
        assert_eq!(c.supported, DeviceSet::ALL_KNOWN);
    }

    #[test]
    fn metadata_is_passed_through() {
        // Metadata that contradicts the heuristic must win.
        let op = Operation::with_usage(
            "const",
            DeviceUsageInfo {
                preferred: ComputeDevice::Gpu,
                supported: DeviceSet::GPU,
            },
        );
        let c = RuntimeClassifier.classify(&op, op.device_usage.as_ref());
        assert_eq!(c.preferred, ComputeDevice::Gpu);
        assert_eq!(c.supported, DeviceSet::GPU);
        assert_eq!(c.source, ClassificationSource::Metadata);
    }

    #[test]
    fn metadata_unknown_preserved() {
        let op = Operation::with_usage(
            "ios18.conv",
            DeviceUsageInfo {
                preferred: ComputeDevice::Unknown,
                supported: DeviceSet::UNKNOWN,
            },
        );
        let c = RuntimeClassifier.classify(&op, op.device_usage.as_ref());
        assert_eq!(c.preferred, ComputeDevice::Unknown);
        assert_eq!(c.supported.known_flags(), [false, false, false]);
    }

    #[test]
    fn no_metadata_uses_heuristic() {
        let c = RuntimeClassifier.classify(&Operation::new("ios18.add"), None);
        assert_eq!(c.source, ClassificationSource::Heuristic);
        assert_eq!(c.preferred, ComputeDevice::Ane);
    }

    #[test]
    fn display_classification() {
        let c = fallback_classification("const");
        assert_eq!(c.to_string(), "CPU of {CPU} (heuristic)");
    }
}
