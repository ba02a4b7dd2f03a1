#![warn(missing_docs)]
//! Host runtime boundary for mlprof.
//!
//! Validates model locations ([`locate_model`]), compiles packages
//! ([`ModelCompiler`]), and loads compute plans through the callback-style
//! [`ComputePlanProvider`] trait, which [`load_blocking`] turns into a
//! single blocking call with a timeout. A [`ProviderRegistry`] backs the
//! CLI's `--provider` dispatch.

mod error;
pub mod load;
pub mod location;
pub mod snapshot;
pub mod translate;

pub use error::ProviderError;
pub use load::{
    ComputePlanProvider, ComputeUnits, DEFAULT_LOAD_TIMEOUT, LoadCompletion, LoadConfig,
    load_blocking,
};
pub use location::{CompiledModel, ModelCompiler, SnapshotCompiler, locate_model};
pub use snapshot::{SNAPSHOT_FILE, SnapshotProvider, parse_snapshot};
pub use translate::{NativeDevice, translate_device, translate_usage};

/// Registry of available providers, used for CLI `--provider` dispatch.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn ComputePlanProvider>>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Creates a registry pre-populated with built-in providers.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(SnapshotProvider));
        reg
    }

    /// Registers a provider.
    pub fn register(&mut self, provider: Box<dyn ComputePlanProvider>) {
        self.providers.push(provider);
    }

    /// Finds a provider by name.
    pub fn find(&self, name: &str) -> Option<&dyn ComputePlanProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| &**p)
    }

    /// Lists all registered provider names.
    pub fn list_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_find_builtin() {
        let reg = ProviderRegistry::with_builtins();
        assert!(reg.find("snapshot").is_some());
        assert!(reg.find("coreml").is_none());
    }

    #[test]
    fn registry_custom_provider() {
        #[derive(Debug)]
        struct TestProvider;
        impl ComputePlanProvider for TestProvider {
            fn name(&self) -> &str {
                "test"
            }
            fn load(
                &self,
                _model: &CompiledModel,
                _config: &LoadConfig,
                completion: LoadCompletion,
            ) {
                completion(Err(ProviderError::ComputePlanLoad("unsupported".into())));
            }
        }

        let mut reg = ProviderRegistry::new();
        reg.register(Box::new(TestProvider));
        assert_eq!(reg.list_names(), vec!["test"]);
        assert!(reg.find("test").is_some());
    }

    #[test]
    fn registry_default_is_empty() {
        assert!(ProviderRegistry::default().list_names().is_empty());
    }
}
