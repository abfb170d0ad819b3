use crate::error::DeltaError;
use crate::namespace;
use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeltaConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Change registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Namespace handed to the discovery provider at bootstrap.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_namespace() -> String { namespace::DEFAULT_NAMESPACE.into() }
fn default_level() -> String { "info".into() }

// ── Impls ─────────────────────────────────────────────────────

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), DeltaError> {
        if !namespace::is_valid(&self.namespace) {
            return Err(DeltaError::Config(format!(
                "registry.namespace '{}' is not a dotted identifier",
                self.namespace
            )));
        }
        Ok(())
    }
}

impl DeltaConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: DeltaConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("DELTA_").split("__"))
            .extract()?;
        config.registry.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_registry_config_uses_builtin_namespace() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.namespace, "delta.change");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_logging_config_has_expected_values() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert!(!cfg.json);
    }

    #[test]
    fn validate_rejects_malformed_namespace() {
        let cfg = RegistryConfig {
            namespace: "delta..change".into(),
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, DeltaError::Config(_)));
        assert!(err.to_string().contains("delta..change"));
    }

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "registry:\n  namespace: \"delta.change.column\"\n").unwrap();
        let cfg = DeltaConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.registry.namespace, "delta.change.column");
        // Defaults still apply for unspecified sections
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn load_yaml_with_logging() {
        let yaml = r#"
logging:
  level: "delta_plugin=debug,warn"
  json: true
"#;
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "{yaml}").unwrap();
        let cfg = DeltaConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.logging.level, "delta_plugin=debug,warn");
        assert!(cfg.logging.json);
        assert_eq!(cfg.registry.namespace, "delta.change");
    }

    #[test]
    fn load_rejects_invalid_namespace() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "registry:\n  namespace: \"not a namespace\"\n").unwrap();
        assert!(DeltaConfig::load(tmpfile.path()).is_err());
    }

    #[test]
    fn config_serializes_to_json() {
        let json = serde_json::to_value(DeltaConfig::default()).unwrap();
        assert_eq!(json["registry"]["namespace"], "delta.change");
        assert_eq!(json["logging"]["json"], false);
    }
}
