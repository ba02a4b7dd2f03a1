//! Compute plan providers and the blocking load.

use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use mlprof_plan::ComputePlan;

use crate::ProviderError;
use crate::location::CompiledModel;

/// Default time to wait for a provider to deliver its compute plan.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Compute units the runtime may schedule on when building the plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComputeUnits {
    /// CPU, GPU and Neural Engine.
    #[default]
    All,
    /// CPU only.
    CpuOnly,
    /// CPU and GPU.
    CpuAndGpu,
    /// CPU and Neural Engine.
    CpuAndNeuralEngine,
}

impl fmt::Display for ComputeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::CpuOnly => "cpu-only",
            Self::CpuAndGpu => "cpu-and-gpu",
            Self::CpuAndNeuralEngine => "cpu-and-ne",
        })
    }
}

impl FromStr for ComputeUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "cpu-only" => Ok(Self::CpuOnly),
            "cpu-and-gpu" => Ok(Self::CpuAndGpu),
            "cpu-and-ne" => Ok(Self::CpuAndNeuralEngine),
            _ => Err(format!(
                "invalid compute units '{s}', expected all, cpu-only, cpu-and-gpu, or cpu-and-ne"
            )),
        }
    }
}

/// Options for a compute plan load.
#[derive(Clone, Debug)]
pub struct LoadConfig {
    /// How long [`load_blocking`] waits for the completion.
    pub timeout: Duration,
    /// Compute units passed to the runtime.
    pub compute_units: ComputeUnits,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_LOAD_TIMEOUT,
            compute_units: ComputeUnits::default(),
        }
    }
}

impl fmt::Display for LoadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LoadConfig {{ timeout: {:?}, compute_units: {} }}",
            self.timeout, self.compute_units
        )
    }
}

/// Callback a provider invokes exactly once with the load outcome.
pub type LoadCompletion = Box<dyn FnOnce(Result<ComputePlan, ProviderError>) + Send + 'static>;

/// A source of compute plans for compiled models.
///
/// Loading is callback-style: `load` may return before the plan is ready
/// and deliver it later from another thread.
pub trait ComputePlanProvider: Debug + Send + Sync {
    /// Identifier used for `--provider` dispatch.
    fn name(&self) -> &str;

    /// Start loading the compute plan for `model`. `completion` must be
    /// called at most once.
    fn load(&self, model: &CompiledModel, config: &LoadConfig, completion: LoadCompletion);
}

/// Issues a single load and waits for its completion, up to
/// `config.timeout`.
pub fn load_blocking(
    provider: &dyn ComputePlanProvider,
    model: &CompiledModel,
    config: &LoadConfig,
) -> Result<ComputePlan, ProviderError> {
    let (tx, rx) = mpsc::sync_channel(1);
    log::debug!(
        "loading compute plan for {} via '{}' ({config})",
        model.path().display(),
        provider.name()
    );
    provider.load(
        model,
        config,
        Box::new(move |result| {
            // The receiver may be gone after a timeout.
            let _ = tx.send(result);
        }),
    );

    match rx.recv_timeout(config.timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(ProviderError::ComputePlanLoad(format!(
            "timed out after {:?}",
            config.timeout
        ))),
        Err(RecvTimeoutError::Disconnected) => Err(ProviderError::ComputePlanLoad(
            "no compute plan returned".into(),
        )),
    }
}
