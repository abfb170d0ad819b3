use delta_plugin::change::Change;

#[derive(Debug, Default)]
pub struct DropTableChange {
    pub schema_name: Option<String>,
    pub table_name: String,
    /// Drop dependent constraints as well.
    pub cascade_constraints: bool,
}

impl Change for DropTableChange {
    fn change_name(&self) -> &str {
        "dropTable"
    }

    fn description(&self) -> &str {
        "Drops an existing table"
    }
}
