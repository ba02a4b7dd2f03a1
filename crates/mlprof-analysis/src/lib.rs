//! Device usage analysis of compute plans.
//!
//! [`resolve`] picks the function to analyze, a [`DeviceClassifier`]
//! assigns each operation a preferred device and a supported set, and
//! [`aggregate`] accumulates [`UsageCounts`] and [`OperatorRecord`]s.
//! [`UnresolvedSession::analyze`] runs the whole pipeline once.

pub mod classify;
mod error;
pub mod resolve;
pub mod session;
pub mod usage;

pub use classify::{
    CONST_OPERATOR, Classification, ClassificationSource, DeviceClassifier, RuntimeClassifier,
    VERSIONED_ACCELERATOR_PREFIX, fallback_classification,
};
pub use error::AnalysisError;
pub use resolve::{CONVENTIONAL_NAMES, Resolution, Resolved, resolve};
pub use session::{AnalyzedSession, UnresolvedSession};
pub use usage::{OperatorRecord, UsageAnalysis, UsageCounts, aggregate};
