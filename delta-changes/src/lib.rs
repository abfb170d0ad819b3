pub mod catalog;
pub mod column;
pub mod constraint;
pub mod index;
pub mod raw;
pub mod table;
pub mod tag_database;

use catalog::CatalogDiscovery;
use delta_core::config::RegistryConfig;
use delta_core::error::DeltaError;
use delta_core::namespace::DEFAULT_NAMESPACE;
use delta_plugin::factory::ChangeFactory;
use std::sync::{Arc, OnceLock};

/// Process-wide change factory.
static FACTORY: OnceLock<ChangeFactory> = OnceLock::new();

/// Shared change factory over the built-in catalog, bootstrapped on first use.
///
/// Code below the application entry point should take a `&ChangeFactory`
/// instead of calling this.
pub fn change_factory() -> Result<&'static ChangeFactory, DeltaError> {
    if let Some(factory) = FACTORY.get() {
        return Ok(factory);
    }
    let factory = ChangeFactory::new(Arc::new(CatalogDiscovery::new()), DEFAULT_NAMESPACE)?;
    // A concurrent first caller may have won; its factory is kept.
    Ok(FACTORY.get_or_init(|| factory))
}

/// Install the shared factory from configuration.
///
/// If the factory is already installed (by an earlier `init` or by
/// [`change_factory`]) it is returned when its namespace matches
/// `config.namespace`; a different namespace is a `DeltaError::Config`.
pub fn init(config: &RegistryConfig) -> Result<&'static ChangeFactory, DeltaError> {
    config.validate()?;
    let factory = match FACTORY.get() {
        Some(factory) => factory,
        None => {
            let fresh = ChangeFactory::new(Arc::new(CatalogDiscovery::new()), config.namespace.clone())?;
            FACTORY.get_or_init(|| fresh)
        }
    };
    if factory.namespace() != config.namespace {
        return Err(DeltaError::Config(format!(
            "shared change factory already uses namespace '{}', cannot switch to '{}'",
            factory.namespace(),
            config.namespace
        )));
    }
    Ok(factory)
}

/// Rebuild the shared factory's registry from discovery.
pub fn reset() -> Result<(), DeltaError> {
    change_factory()?.reset()
}
