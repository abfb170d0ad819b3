use crate::change::Change;
use crate::descriptor::ChangeDescriptor;
use crate::discovery::DiscoveryProvider;
use crate::registry::ChangeRegistry;
use arc_swap::ArcSwap;
use delta_core::error::DeltaError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Builds changes by key from a discovery-bootstrapped registry.
///
/// The active [`ChangeRegistry`] sits behind an `ArcSwap`. `reset` builds a
/// complete replacement and swaps it in atomically; a call that already
/// loaded the previous registry finishes against it.
pub struct ChangeFactory {
    provider: Arc<dyn DiscoveryProvider>,
    namespace: String,
    registry: ArcSwap<ChangeRegistry>,
}

impl ChangeFactory {
    /// Bootstrap a factory from `provider`'s view of `namespace`.
    pub fn new(provider: Arc<dyn DiscoveryProvider>, namespace: impl Into<String>) -> Result<Self, DeltaError> {
        let namespace = namespace.into();
        let registry = ChangeRegistry::bootstrap(provider.as_ref(), &namespace)?;
        Ok(Self {
            provider,
            namespace,
            registry: ArcSwap::from_pointee(registry),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The registry currently in use.
    pub fn registry(&self) -> Arc<ChangeRegistry> {
        self.registry.load_full()
    }

    /// Discard all state and bootstrap again.
    ///
    /// Manual registrations made before the reset are gone unless discovery
    /// finds them. On failure the previous registry stays active.
    pub fn reset(&self) -> Result<(), DeltaError> {
        let fresh = ChangeRegistry::bootstrap(self.provider.as_ref(), &self.namespace)?;
        let changes = fresh.len();
        self.registry.store(Arc::new(fresh));
        info!(namespace = %self.namespace, changes = changes, "Change registry reset");
        Ok(())
    }

    pub fn register(&self, descriptor: ChangeDescriptor) -> Result<String, DeltaError> {
        self.registry.load().register(descriptor)
    }

    pub fn unregister(&self, name: &str) {
        self.registry.load().unregister(name);
    }

    pub fn create(&self, name: &str) -> Result<Option<Box<dyn Change>>, DeltaError> {
        self.registry.load().create(name)
    }

    /// Copy of the current key → descriptor mapping. Mainly for tests.
    pub fn snapshot(&self) -> HashMap<String, ChangeDescriptor> {
        self.registry.load().snapshot()
    }
}

impl std::fmt::Debug for ChangeFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeFactory")
            .field("provider", &self.provider.name())
            .field("namespace", &self.namespace)
            .field("registry", &*self.registry.load())
            .finish()
    }
}
