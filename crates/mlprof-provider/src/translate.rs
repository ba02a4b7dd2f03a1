//! Translation from runtime-native device tags to [`ComputeDevice`].
//!
//! The host runtime identifies devices by its own class names
//! (`MLCPUComputeDevice`, ...). Those tags never leave this crate: every
//! [`DeviceUsageInfo`] handed to the analysis layer is already expressed
//! in [`ComputeDevice`] terms.

use std::fmt;

use mlprof_plan::{ComputeDevice, DeviceSet, DeviceUsageInfo};
use serde::Deserialize;

/// A device as named by the host runtime.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NativeDevice {
    /// `MLCPUComputeDevice`.
    Cpu,
    /// `MLGPUComputeDevice`.
    Gpu,
    /// `MLNeuralEngineComputeDevice`.
    NeuralEngine,
    /// Any tag this crate does not recognize.
    Other(String),
}

impl From<&str> for NativeDevice {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "mlcpucomputedevice" | "cpu" => Self::Cpu,
            "mlgpucomputedevice" | "gpu" => Self::Gpu,
            "mlneuralenginecomputedevice" | "ane" | "neural_engine" => Self::NeuralEngine,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for NativeDevice {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for NativeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => f.write_str("MLCPUComputeDevice"),
            Self::Gpu => f.write_str("MLGPUComputeDevice"),
            Self::NeuralEngine => f.write_str("MLNeuralEngineComputeDevice"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

/// Maps a native device to a [`ComputeDevice`]. Unrecognized tags map to
/// [`ComputeDevice::Unknown`].
pub fn translate_device(native: &NativeDevice) -> ComputeDevice {
    match native {
        NativeDevice::Cpu => ComputeDevice::Cpu,
        NativeDevice::Gpu => ComputeDevice::Gpu,
        NativeDevice::NeuralEngine => ComputeDevice::Ane,
        NativeDevice::Other(tag) => {
            log::debug!("unrecognized compute device '{tag}'");
            ComputeDevice::Unknown
        }
    }
}

/// Translates runtime device usage. Each device is mapped independently.
pub fn translate_usage(preferred: &NativeDevice, supported: &[NativeDevice]) -> DeviceUsageInfo {
    DeviceUsageInfo {
        preferred: translate_device(preferred),
        supported: supported.iter().map(translate_device).collect::<DeviceSet>(),
    }
}
