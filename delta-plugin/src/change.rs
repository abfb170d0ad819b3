/// The capability every change plugin implements.
///
/// A change type is made available to the registry through a
/// [`ChangeDescriptor`](crate::descriptor::ChangeDescriptor), which supplies
/// zero-argument construction. The instance itself only has to say which key
/// it answers to.
pub trait Change: Send + Sync {
    /// Unique key the change is registered under (e.g. `addColumn`).
    fn change_name(&self) -> &str;

    /// Human-readable summary of what the change does.
    fn description(&self) -> &str {
        ""
    }

    /// Name of the concrete implementing type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl std::fmt::Debug for dyn Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Change")
            .field("name", &self.change_name())
            .field("type", &self.type_name())
            .finish()
    }
}
