use thiserror::Error;

/// Unified error type for Delta.
///
/// A missing change is not represented here: lookups report absence as
/// `Ok(None)` so callers can tell an unknown key from a broken change.
#[derive(Error, Debug)]
pub enum DeltaError {
    #[error("Discovery failed in namespace '{namespace}': {reason}")]
    Discovery { namespace: String, reason: String },

    #[error("Cannot register change type {type_name}: {source}")]
    Registration {
        type_name: &'static str,
        #[source]
        source: ChangeError,
    },

    #[error("Cannot instantiate change '{name}' ({type_name}): {source}")]
    Instantiation {
        name: String,
        type_name: &'static str,
        #[source]
        source: ChangeError,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl DeltaError {
    pub fn discovery(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        DeltaError::Discovery {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }

    /// The change key or type name the error is about, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            DeltaError::Discovery { .. } | DeltaError::Config(_) => None,
            DeltaError::Registration { type_name, .. } => Some(*type_name),
            DeltaError::Instantiation { name, .. } => Some(name.as_str()),
        }
    }
}

/// Failure raised by a change constructor.
#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("construction failed: {0}")]
    Construct(String),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("declared name '{declared}' does not match registered name '{registered}'")]
    NameMismatch { registered: String, declared: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
