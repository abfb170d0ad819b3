pub mod config;
pub mod error;
pub mod namespace;

pub use config::DeltaConfig;
pub use error::{ChangeError, DeltaError};
