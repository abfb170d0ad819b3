use crate::descriptor::ChangeDescriptor;
use delta_core::error::DeltaError;
use delta_core::namespace;

/// How a candidate type reaches the [`Change`](crate::change::Change) capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conformance {
    /// The type implements the capability itself.
    Direct,
    /// The capability comes from an ancestor `depth` parent hops up.
    Inherited { depth: usize },
    /// The type was found in the namespace but is not a change.
    Unrelated,
}

impl Conformance {
    /// Bootstrap filter: direct implementers and types whose immediate parent
    /// implements the capability. Deeper ancestry does not qualify.
    pub fn qualifies(&self) -> bool {
        matches!(self, Conformance::Direct | Conformance::Inherited { depth: 1 })
    }
}

/// A type found by a discovery provider.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Dotted module path the type lives under, e.g. `delta.change.column`.
    pub module: &'static str,
    pub conformance: Conformance,
    pub descriptor: ChangeDescriptor,
}

impl Candidate {
    pub fn direct(module: &'static str, descriptor: ChangeDescriptor) -> Self {
        Self {
            module,
            conformance: Conformance::Direct,
            descriptor,
        }
    }

    pub fn inherited(module: &'static str, depth: usize, descriptor: ChangeDescriptor) -> Self {
        Self {
            module,
            conformance: Conformance::Inherited { depth },
            descriptor,
        }
    }
}

/// Enumerates candidate change types reachable from a namespace.
///
/// Implementations must return everything available to them and report
/// failure as [`DeltaError::Discovery`] rather than an empty set.
pub trait DiscoveryProvider: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    fn discover(&self, namespace: &str) -> Result<Vec<Candidate>, DeltaError>;
}

/// Provider over a fixed list of candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    candidates: Vec<Candidate>,
}

impl StaticDiscovery {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl DiscoveryProvider for StaticDiscovery {
    fn name(&self) -> &str {
        "static"
    }

    fn discover(&self, ns: &str) -> Result<Vec<Candidate>, DeltaError> {
        if !namespace::is_valid(ns) {
            return Err(DeltaError::discovery(ns, "not a dotted identifier path"));
        }
        Ok(self
            .candidates
            .iter()
            .filter(|c| namespace::contains(ns, c.module))
            .copied()
            .collect())
    }
}
