#![warn(missing_docs)]
//! Compute plan data model for mlprof.
//!
//! A [`ComputePlan`] is what the host runtime hands back after loading a
//! compiled model: a [`ModelStructure`] whose [`Program`] is made of named
//! [`Function`]s, each an ordered list of [`Operation`]s optionally
//! annotated with [`DeviceUsageInfo`].

mod device;
mod display;
mod error;
mod program;

pub use device::{ComputeDevice, DeviceSet};
pub use display::dump_plan;
pub use error::PlanError;
pub use program::{ComputePlan, DeviceUsageInfo, Function, ModelStructure, Operation, Program};
