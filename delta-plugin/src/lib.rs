pub mod change;
pub mod descriptor;
pub mod discovery;
pub mod factory;
pub mod registry;

pub use change::Change;
pub use descriptor::ChangeDescriptor;
pub use discovery::{Candidate, Conformance, DiscoveryProvider, StaticDiscovery};
pub use factory::ChangeFactory;
pub use registry::ChangeRegistry;
