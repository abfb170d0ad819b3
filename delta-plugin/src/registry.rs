use crate::change::Change;
use crate::descriptor::ChangeDescriptor;
use crate::discovery::DiscoveryProvider;
use dashmap::DashMap;
use delta_core::error::{ChangeError, DeltaError};
use std::collections::HashMap;
use tracing::{debug, info};

/// Thread-safe change registry.
///
/// Maps each change key to the descriptor that builds it. Lookups and
/// mutations may run concurrently from any thread; a write to one key is
/// atomic with respect to readers of that key.
pub struct ChangeRegistry {
    entries: DashMap<String, ChangeDescriptor>,
}

impl ChangeRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Build a registry from everything `provider` finds in `namespace`.
    ///
    /// Candidates that do not qualify (see
    /// [`Conformance::qualifies`](crate::discovery::Conformance::qualifies))
    /// are skipped. A provider failure or a candidate that cannot be
    /// constructed aborts the whole bootstrap.
    pub fn bootstrap(provider: &dyn DiscoveryProvider, namespace: &str) -> Result<Self, DeltaError> {
        let candidates = provider.discover(namespace)?;
        let registry = Self::new();
        let mut skipped = 0usize;

        for candidate in candidates {
            if !candidate.conformance.qualifies() {
                debug!(
                    change_type = candidate.descriptor.type_name(),
                    conformance = ?candidate.conformance,
                    "Skipping candidate"
                );
                skipped += 1;
                continue;
            }
            registry.register(candidate.descriptor)?;
        }

        info!(
            namespace = namespace,
            provider = provider.name(),
            changes = registry.len(),
            skipped = skipped,
            "Change registry bootstrapped"
        );
        Ok(registry)
    }

    /// Register a change type under the key its instances declare.
    ///
    /// One throwaway instance is built to read the key. An existing entry
    /// with the same key is replaced. Returns the key.
    pub fn register(&self, descriptor: ChangeDescriptor) -> Result<String, DeltaError> {
        let name = descriptor
            .declared_name()
            .map_err(|source| DeltaError::Registration {
                type_name: descriptor.type_name(),
                source,
            })?;
        debug!(change = %name, change_type = descriptor.type_name(), "Registered change");
        self.entries.insert(name.clone(), descriptor);
        Ok(name)
    }

    /// Remove the entry for `name`. Absent keys are ignored.
    pub fn unregister(&self, name: &str) {
        if self.entries.remove(name).is_some() {
            debug!(change = %name, "Unregistered change");
        }
    }

    /// Build a new instance of the change registered as `name`.
    ///
    /// Returns `Ok(None)` for an unknown key. A registered change that fails
    /// to construct, or whose instance declares a different key, is an error.
    pub fn create(&self, name: &str) -> Result<Option<Box<dyn Change>>, DeltaError> {
        // Copy the descriptor out so the shard lock is not held while constructing.
        let Some(descriptor) = self.descriptor(name) else {
            return Ok(None);
        };

        let instantiation_error = |source: ChangeError| DeltaError::Instantiation {
            name: name.to_string(),
            type_name: descriptor.type_name(),
            source,
        };

        let change = descriptor.instantiate().map_err(instantiation_error)?;
        if change.change_name() != name {
            return Err(instantiation_error(ChangeError::NameMismatch {
                registered: name.to_string(),
                declared: change.change_name().to_string(),
            }));
        }
        Ok(Some(change))
    }

    /// Descriptor registered under `name`.
    pub fn descriptor(&self, name: &str) -> Option<ChangeDescriptor> {
        self.entries.get(name).map(|entry| *entry.value())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered keys, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Copy of the full key → descriptor mapping. Mainly for tests.
    pub fn snapshot(&self) -> HashMap<String, ChangeDescriptor> {
        self.entries
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChangeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeRegistry")
            .field("changes", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{Candidate, StaticDiscovery};

    #[derive(Default)]
    struct AddColumn {
        _columns: Vec<String>,
    }

    impl Change for AddColumn {
        fn change_name(&self) -> &str {
            "addColumn"
        }
    }

    #[derive(Default)]
    struct AddColumnV2 {
        _columns: Vec<String>,
    }

    impl Change for AddColumnV2 {
        fn change_name(&self) -> &str {
            "addColumn"
        }
    }

    #[derive(Default)]
    struct Shifty {
        _calls: std::sync::atomic::AtomicUsize,
    }

    impl Change for Shifty {
        fn change_name(&self) -> &str {
            "shifty"
        }
    }

    fn renamed() -> Result<Box<dyn Change>, ChangeError> {
        Ok(Box::new(AddColumn::default()))
    }

    #[test]
    fn test_empty_registry() {
        let reg = ChangeRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(reg.create("nonexistent").unwrap().is_none());
        assert!(reg.descriptor("nonexistent").is_none());
    }

    #[test]
    fn test_register_returns_declared_key() {
        let reg = ChangeRegistry::new();
        let key = reg.register(ChangeDescriptor::of::<AddColumn>()).unwrap();
        assert_eq!(key, "addColumn");
        assert!(reg.contains("addColumn"));
        assert_eq!(reg.names(), vec!["addColumn".to_string()]);
    }

    #[test]
    fn test_register_overwrite() {
        let reg = ChangeRegistry::new();
        reg.register(ChangeDescriptor::of::<AddColumn>()).unwrap();
        reg.register(ChangeDescriptor::of::<AddColumnV2>()).unwrap();
        // Last write wins; len must still be 1
        assert_eq!(reg.len(), 1);
        let change = reg.create("addColumn").unwrap().unwrap();
        assert!(change.type_name().ends_with("AddColumnV2"));
    }

    #[test]
    fn test_unregister_absent_is_noop() {
        let reg = ChangeRegistry::new();
        reg.register(ChangeDescriptor::of::<Shifty>()).unwrap();
        reg.unregister("missing");
        assert_eq!(reg.len(), 1);
        reg.unregister("shifty");
        assert!(reg.create("shifty").unwrap().is_none());
    }

    #[test]
    fn test_create_detects_key_drift() {
        let reg = ChangeRegistry::new();
        reg.register(ChangeDescriptor::of::<Shifty>()).unwrap();
        // Force a descriptor whose instances declare another key under "shifty".
        reg.entries
            .insert("shifty".into(), ChangeDescriptor::new("renamed", renamed));
        let err = reg.create("shifty").unwrap_err();
        match err {
            DeltaError::Instantiation { name, source, .. } => {
                assert_eq!(name, "shifty");
                assert!(matches!(source, ChangeError::NameMismatch { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let reg = ChangeRegistry::new();
        reg.register(ChangeDescriptor::of::<AddColumn>()).unwrap();
        let snapshot = reg.snapshot();
        reg.unregister("addColumn");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot["addColumn"], ChangeDescriptor::of::<AddColumn>());
        assert!(reg.is_empty());
    }

    #[test]
    fn test_bootstrap_from_static_provider() {
        let provider = StaticDiscovery::new(vec![
            Candidate::direct("delta.change", ChangeDescriptor::of::<AddColumn>()),
            Candidate::inherited("delta.change", 1, ChangeDescriptor::of::<Shifty>()),
        ]);
        let reg = ChangeRegistry::bootstrap(&provider, "delta.change").unwrap();
        assert_eq!(reg.names(), vec!["addColumn".to_string(), "shifty".to_string()]);
    }

    #[test]
    fn test_debug_lists_names() {
        let reg = ChangeRegistry::default();
        reg.register(ChangeDescriptor::of::<AddColumn>()).unwrap();
        assert!(format!("{reg:?}").contains("addColumn"));
    }
}
