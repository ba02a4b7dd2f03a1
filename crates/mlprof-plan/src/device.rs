//! Compute devices and device sets.

use std::fmt;

/// A hardware compute device an operation can be scheduled on.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ComputeDevice {
    /// General-purpose processor.
    Cpu,
    /// Graphics processor.
    Gpu,
    /// Apple Neural Engine.
    Ane,
    /// A device that could not be mapped to a known kind.
    Unknown,
}

impl ComputeDevice {
    /// The known devices, in report order.
    pub const KNOWN: [ComputeDevice; 3] = [Self::Cpu, Self::Gpu, Self::Ane];

    fn bit(self) -> u8 {
        match self {
            Self::Cpu => 1,
            Self::Gpu => 1 << 1,
            Self::Ane => 1 << 2,
            Self::Unknown => 1 << 3,
        }
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Ane => "ANE",
            Self::Unknown => "Unknown",
        })
    }
}

/// Bit set of [`ComputeDevice`] values.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct DeviceSet(u8);

impl DeviceSet {
    /// No devices.
    pub const EMPTY: Self = Self(0);
    /// CPU only.
    pub const CPU: Self = Self(1);
    /// GPU only.
    pub const GPU: Self = Self(1 << 1);
    /// ANE only.
    pub const ANE: Self = Self(1 << 2);
    /// The unknown-device bucket.
    pub const UNKNOWN: Self = Self(1 << 3);
    /// CPU, GPU and ANE.
    pub const ALL_KNOWN: Self = Self(0b111);

    /// Returns `true` if `device` is a member of the set.
    pub fn contains(self, device: ComputeDevice) -> bool {
        self.0 & device.bit() != 0
    }

    /// Adds `device` to the set.
    pub fn insert(&mut self, device: ComputeDevice) {
        self.0 |= device.bit();
    }

    /// Returns `true` if no devices are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of devices in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in CPU, GPU, ANE, Unknown order.
    pub fn iter(self) -> impl Iterator<Item = ComputeDevice> {
        [
            ComputeDevice::Cpu,
            ComputeDevice::Gpu,
            ComputeDevice::Ane,
            ComputeDevice::Unknown,
        ]
        .into_iter()
        .filter(move |d| self.contains(*d))
    }

    /// Support flags for the known devices in CPU, GPU, ANE order.
    pub fn known_flags(self) -> [bool; 3] {
        ComputeDevice::KNOWN.map(|d| self.contains(d))
    }
}

impl std::ops::BitOr for DeviceSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for DeviceSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<ComputeDevice> for DeviceSet {
    fn from(device: ComputeDevice) -> Self {
        Self(device.bit())
    }
}

impl FromIterator<ComputeDevice> for DeviceSet {
    fn from_iter<I: IntoIterator<Item = ComputeDevice>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for device in iter {
            set.insert(device);
        }
        set
    }
}

impl fmt::Display for DeviceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, device) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{device}")?;
        }
        f.write_str("}")
    }
}
